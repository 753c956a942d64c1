use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types that can occur while preparing the template renderer.
///
/// Rendering itself never fails: unknown placeholders render as empty text and
/// unbalanced conditional tags are tolerated. The only failure point is
/// compiling the placeholder patterns when a [`TemplateRenderer`] is built.
///
/// [`TemplateRenderer`]: crate::TemplateRenderer
///
/// # Examples
///
/// ```rust,ignore
/// use template_engine::{Error, TemplateRenderer};
///
/// match TemplateRenderer::new() {
///     Ok(renderer) => println!("{}", renderer.render("{repo}", &variables)),
///     Err(Error::InvalidPattern { pattern, .. }) => {
///         eprintln!("Placeholder pattern '{}' failed to compile", pattern);
///     }
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A placeholder pattern could not be compiled.
    ///
    /// This wraps the underlying `regex::Error` together with the pattern
    /// that was being compiled.
    #[error("Invalid placeholder pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that failed to compile
        pattern: String,
        /// The error reported by the regex engine
        #[source]
        source: regex::Error,
    },
}
