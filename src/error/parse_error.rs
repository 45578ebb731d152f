#[derive(Debug)]
/// Represents all errors that can occur while tokenizing a route.
pub enum ParseError {
    /// The input was missing entirely or contained only whitespace.
    EmptyInput,
    /// A character outside the allowed set was found.
    InvalidCharacter {
        /// The offending text, exactly as it appeared.
        found:    String,
        /// Description of the characters a route may contain.
        allowed:  &'static str,
        /// Byte position of the offending character.
        position: usize,
    },
    /// A direction letter appeared with no digits in front of it, either at
    /// the start of the route or directly after another direction.
    MissingMagnitude {
        /// The direction character that was encountered.
        direction: char,
        /// Byte position of the direction character.
        position:  usize,
    },
    /// The route ended in digits that were never given a direction.
    DanglingMagnitude {
        /// The trailing digit run.
        digits:   String,
        /// Byte position where the digit run starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "No route given. Enter at least one step, such as 3F.")
            },

            Self::InvalidCharacter { found,
                                     allowed,
                                     position, } => {
                write!(f,
                       "Error at position {position}: Invalid character '{found}'. A route may only contain {allowed}.")
            },

            Self::MissingMagnitude { direction, position } => {
                write!(f,
                       "Error at position {position}: Direction '{direction}' has no step count in front of it.")
            },

            Self::DanglingMagnitude { digits, position } => {
                write!(f,
                       "Error at position {position}: Trailing steps '{digits}' were given no direction.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
