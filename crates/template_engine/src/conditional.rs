//! # Conditional Blocks
//!
//! Line-oriented `{{ if name }}` / `{{ else }}` / `{{ endif }}` evaluation.
//!
//! A control tag is only recognised here when it makes up the whole line once
//! surrounding whitespace is trimmed. Complete `if`/`endif` chains written
//! within a single line are evaluated separately by the renderer; any other
//! tag sharing its line with text is ordinary content.
//!
//! The evaluation state lives in [`ConditionalScopes`], a stack of
//! [`ScopeFrame`] records. Each `if` pushes a frame, `else` flips the frame it
//! belongs to and `endif` pops it. Content is emitted only while every frame on
//! the stack is active.
//!
//! ```text
//! {{ if project }}        push  active = parent && project
//! Project: {project}      emitted when every frame is active
//! {{ else }}              flip  active = parent && !project
//! No project assigned
//! {{ endif }}             pop
//! ```

#[cfg(test)]
#[path = "conditional_tests.rs"]
mod tests;

/// A control line recognised by the conditional pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlTag<'a> {
    /// `{{ if <name> }}` opening a scope guarded by the named variable.
    If(&'a str),
    /// `{{ else }}` switching the innermost scope to its alternate branch.
    Else,
    /// `{{ endif }}` closing the innermost scope.
    EndIf,
}

impl<'a> ControlTag<'a> {
    /// Classifies a single template line.
    ///
    /// Returns `None` for content lines. Whitespace inside the braces is
    /// flexible (`{{if name}}` and `{{  if name  }}` both open a scope), but the
    /// trimmed line must consist of exactly one tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use template_engine::ControlTag;
    ///
    /// assert_eq!(ControlTag::parse("  {{ if project }}\n"), Some(ControlTag::If("project")));
    /// assert_eq!(ControlTag::parse("{{ else }}"), Some(ControlTag::Else));
    /// assert_eq!(ControlTag::parse("text {{ endif }}"), None);
    /// ```
    pub fn parse(line: &'a str) -> Option<Self> {
        let inner = line
            .trim()
            .strip_prefix("{{")?
            .strip_suffix("}}")?
            .trim();

        match inner {
            "else" => Some(ControlTag::Else),
            "endif" => Some(ControlTag::EndIf),
            _ => {
                let rest = inner.strip_prefix("if")?;
                if !rest.starts_with(char::is_whitespace) {
                    return None;
                }

                let name = rest.trim();
                if is_variable_name(name) {
                    Some(ControlTag::If(name))
                } else {
                    None
                }
            }
        }
    }
}

/// Returns `true` when `name` is a non-empty run of ASCII letters, digits and
/// underscores.
pub(crate) fn is_variable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// State recorded for one open `{{ if }}` scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeFrame {
    /// Whether content in the current branch of this scope is emitted.
    pub active: bool,
    /// Truth value of the `if` condition when the scope was opened.
    pub condition: bool,
    /// Whether the `{{ else }}` of this scope has been seen.
    pub saw_else: bool,
    /// Whether the enclosing scope was active when this scope was opened.
    pub parent_active: bool,
}

/// Scope stack driving the conditional pass.
///
/// Unmatched `else` and `endif` tags on an empty stack are ignored, and
/// frames left open at the end of the text are simply discarded by the
/// caller, so evaluation never fails.
#[derive(Debug, Clone, Default)]
pub struct ConditionalScopes {
    frames: Vec<ScopeFrame>,
}

impl ConditionalScopes {
    /// Creates an empty scope stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new scope for an `{{ if }}` whose condition evaluated to
    /// `condition`.
    pub fn open(&mut self, condition: bool) {
        let parent_active = self.is_emitting();
        self.frames.push(ScopeFrame {
            active: parent_active && condition,
            condition,
            saw_else: false,
            parent_active,
        });
    }

    /// Switches the innermost scope to its `{{ else }}` branch.
    ///
    /// The else branch is taken only when the original condition was false and
    /// the parent scope was active. A repeated `else` in the same scope is
    /// ignored, as is an `else` with no open scope.
    pub fn enter_else(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            if !frame.saw_else {
                frame.saw_else = true;
                frame.active = frame.parent_active && !frame.condition;
            }
        }
    }

    /// Closes the innermost scope. No-op when no scope is open.
    pub fn close(&mut self) {
        self.frames.pop();
    }

    /// Returns `true` when content lines should currently be emitted.
    pub fn is_emitting(&self) -> bool {
        self.frames.iter().all(|frame| frame.active)
    }

    /// Number of scopes currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The innermost open scope, if any.
    pub fn current(&self) -> Option<&ScopeFrame> {
        self.frames.last()
    }

    /// Applies a control tag to the stack.
    ///
    /// `is_truthy` is consulted only for `{{ if }}` tags.
    pub fn apply<F>(&mut self, tag: ControlTag<'_>, is_truthy: F)
    where
        F: FnOnce(&str) -> bool,
    {
        match tag {
            ControlTag::If(name) => self.open(is_truthy(name)),
            ControlTag::Else => self.enter_else(),
            ControlTag::EndIf => self.close(),
        }
    }
}
