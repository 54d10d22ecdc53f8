use thiserror::Error;

/// All errors that the crate can generate. Highlighting never fails; these
/// come from layout, font loading, configuration and export.
#[derive(Error, Debug)]
pub enum TextPageError {
    #[error("invalid page geometry: {0}")]
    /// The page geometry leaves no room for content, or a length is not a positive number
    InvalidConfig(String),

    #[error("failed to measure {text:?}")]
    /// The width oracle could not measure a candidate line
    MeasurementFailure {
        text: String,
        #[source]
        source: MeasureError,
    },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// The configuration file is not valid TOML for [crate::config::EditorConfig]
    Toml(#[from] toml::de::Error),
}

/// Raised by a [crate::layout::Measure] implementation that cannot compute a width
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct MeasureError(pub String);

impl MeasureError {
    pub fn new<S: ToString>(message: S) -> MeasureError {
        MeasureError(message.to_string())
    }
}

pub type Result<T, E = TextPageError> = std::result::Result<T, E>;
