//! Template Engine for the maintainers generator
//!
//! This crate renders the `before_text` / `after_text` templates that surround
//! the generated maintainers table. The template language is deliberately
//! small:
//!
//! - Conditional blocks with one control tag per line:
//!   `{{ if name }}`, `{{ else }}`, `{{ endif }}`. Blocks nest.
//! - Inline conditionals within one line:
//!   `{{ if name }}yes{{ else }}no{{ endif }}` (the `else` part is optional).
//! - Defaulted placeholders: `{name:default}` renders the variable when it is
//!   set to a non-empty value and the literal default otherwise.
//! - Simple placeholders: `{name}` renders the variable, or nothing when the
//!   variable is unknown.
//!
//! Rendering runs three ordered passes (conditionals, defaulted placeholders,
//! simple placeholders); the output of each pass is the input of the next.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use template_engine::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new().expect("placeholder patterns compile");
//!
//! let mut variables = HashMap::new();
//! variables.insert("repo".to_string(), "acapy-storage".to_string());
//!
//! let template = "# {repo}\n{{ if project }}\nPart of {project}\n{{ else }}\nProject: {project:Unassigned}\n{{ endif }}\n";
//! let rendered = renderer.render(template, &variables);
//!
//! assert_eq!(rendered, "# acapy-storage\nProject: Unassigned\n");
//! ```

use regex::{Captures, Regex};
use std::collections::HashMap;

mod conditional;
mod errors;

pub use conditional::{ConditionalScopes, ControlTag, ScopeFrame};
pub use errors::Error;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Pattern matching a complete `{{ if name }}..{{ else }}..{{ endif }}` chain
/// within one line.
const INLINE_CONDITIONAL_PATTERN: &str = r"\{\{\s*if\s+([A-Za-z0-9_]+)\s*\}\}(.*?)(?:\{\{\s*else\s*\}\}(.*?))?\{\{\s*endif\s*\}\}";

/// Pattern matching `{name:default}` placeholders. The default is non-empty.
const DEFAULTED_PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z0-9_]+):([^}]+)\}";

/// Pattern matching bare `{name}` placeholders.
const SIMPLE_PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z0-9_]+)\}";

/// Variables available to a template, keyed by placeholder name.
pub type TemplateVariables = HashMap<String, String>;

/// Returns `true` when `name` is set to a non-empty value.
///
/// This is the truth test for both `{{ if name }}` blocks and
/// `{name:default}` placeholders.
pub fn is_truthy(variables: &TemplateVariables, name: &str) -> bool {
    variables
        .get(name)
        .map(|value| !value.is_empty())
        .unwrap_or(false)
}

/// Renders template text against a variable mapping.
///
/// The renderer holds the compiled placeholder patterns so a single instance
/// can render any number of templates.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    inline_conditional: Regex,
    defaulted_placeholder: Regex,
    simple_placeholder: Regex,
}

impl TemplateRenderer {
    /// Creates a renderer, compiling the placeholder patterns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a placeholder pattern fails to
    /// compile.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            inline_conditional: compile(INLINE_CONDITIONAL_PATTERN)?,
            defaulted_placeholder: compile(DEFAULTED_PLACEHOLDER_PATTERN)?,
            simple_placeholder: compile(SIMPLE_PLACEHOLDER_PATTERN)?,
        })
    }

    /// Renders `template` with the given variables.
    ///
    /// Rendering never fails. Unknown variables render as empty text,
    /// unmatched `{{ else }}` / `{{ endif }}` lines are dropped and blocks left
    /// open at the end of the text keep whatever was already emitted.
    pub fn render(&self, template: &str, variables: &TemplateVariables) -> String {
        let text = self.evaluate_conditionals(template, variables);
        let text = self.substitute_defaulted_placeholders(&text, variables);
        self.substitute_simple_placeholders(&text, variables)
    }

    /// Pass 1: keeps the content lines of active branches and drops every
    /// control line. Inline conditionals on kept lines are replaced by their
    /// selected branch. Line terminators of kept lines are preserved.
    fn evaluate_conditionals(&self, template: &str, variables: &TemplateVariables) -> String {
        let mut scopes = ConditionalScopes::new();
        let mut output = String::with_capacity(template.len());

        for line in template.split_inclusive('\n') {
            match ControlTag::parse(line) {
                Some(tag) => scopes.apply(tag, |name| is_truthy(variables, name)),
                None => {
                    if scopes.is_emitting() {
                        output.push_str(&self.evaluate_inline_conditionals(line, variables));
                    }
                }
            }
        }

        output
    }

    /// Replaces each complete inline conditional chain in `line`. Tags that do
    /// not form a complete chain are left as content.
    fn evaluate_inline_conditionals(&self, line: &str, variables: &TemplateVariables) -> String {
        self.inline_conditional
            .replace_all(line, |caps: &Captures| {
                if is_truthy(variables, &caps[1]) {
                    caps[2].to_string()
                } else {
                    caps.get(3).map(|m| m.as_str()).unwrap_or_default().to_string()
                }
            })
            .into_owned()
    }

    /// Pass 2: `{name:default}`.
    fn substitute_defaulted_placeholders(
        &self,
        text: &str,
        variables: &TemplateVariables,
    ) -> String {
        self.defaulted_placeholder
            .replace_all(text, |caps: &Captures| {
                let name = &caps[1];
                if is_truthy(variables, name) {
                    variables[name].clone()
                } else {
                    caps[2].to_string()
                }
            })
            .into_owned()
    }

    /// Pass 3: `{name}`.
    fn substitute_simple_placeholders(&self, text: &str, variables: &TemplateVariables) -> String {
        self.simple_placeholder
            .replace_all(text, |caps: &Captures| {
                variables.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }
}

fn compile(pattern: &str) -> Result<Regex, Error> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
