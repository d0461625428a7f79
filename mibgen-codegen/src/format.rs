//! Formatting of generated source text.

/// Formats raw generated text into canonical source.
pub trait SourceFormatter {
    /// Error returned for text that is not valid in the target language.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the formatted form of `source`.
    ///
    /// # Errors
    /// Returns an error if `source` does not parse.
    fn format(&self, source: &str) -> Result<String, Self::Error>;
}

/// Formatter for Rust source, backed by `syn` and `prettyplease`.
///
/// Plain comments do not survive the round trip; generated text carries its
/// documentation as doc comments, which do.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFormatter;

impl SourceFormatter for RustFormatter {
    type Error = syn::Error;

    fn format(&self, source: &str) -> Result<String, syn::Error> {
        let file = syn::parse_file(source)?;
        Ok(prettyplease::unparse(&file))
    }
}
