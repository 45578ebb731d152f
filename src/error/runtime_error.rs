#[derive(Debug)]
/// Represents all errors that can occur while walking a step sequence.
pub enum RuntimeError {
    /// A step's magnitude could not be read as a number.
    ///
    /// Unreachable for steps produced by the lexer, which only emits digit
    /// runs. A magnitude that fails to parse is a fatal input error, never a
    /// silent zero.
    MagnitudeParseFailure {
        /// The magnitude text that failed to parse.
        magnitude: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MagnitudeParseFailure { magnitude } => {
                write!(f, "Magnitude '{magnitude}' is not a valid number.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
