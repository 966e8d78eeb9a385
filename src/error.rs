use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ColourError {
    #[error(transparent)]
    /// An I/O error occurred while writing a swatch sheet
    Io(#[from] std::io::Error),

    #[error("invalid hex colour literal `{0}`")]
    /// A `#rgb` / `#rrggbb` literal had the wrong length or a non-hex digit
    InvalidHex(String),

    #[error("unrecognised colour `{0}`, expected `#rrggbb`, `rgb(..)` or `rgba(..)`")]
    /// The input was neither a hex literal nor a functional colour
    UnknownFormat(String),

    #[error("expected {expected} colour components, found {found}")]
    /// A functional colour had the wrong number of components
    ChannelCount { expected: usize, found: usize },

    #[error("invalid colour component `{0}`")]
    /// A component of a functional colour was not a number
    InvalidChannel(String),
}
