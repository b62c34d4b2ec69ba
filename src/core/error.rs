use thiserror::Error;

/// Errors that abort a catalogue conversion.
///
/// Every variant is fatal: a conversion either returns a complete document or
/// one of these. Blank or missing business terms are never reported here, they
/// simply leave their element out of the output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KatalogError {
    /// The input could not be read as a spreadsheet.
    #[error("not a valid Excel file: {0}")]
    InvalidInputFormat(String),

    /// A required sheet is missing or the line columns were rearranged.
    #[error("template error: {0}")]
    TemplateShape(String),

    /// A field has no configured location, or a configured location is malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// Shorthand for results carrying a [`KatalogError`].
pub type Result<T, E = KatalogError> = std::result::Result<T, E>;
