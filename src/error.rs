/// Tokenization errors.
///
/// Defines all error types that can occur while scanning and validating a
/// route script. Parse errors cover empty input, characters outside the
/// allowed set, and structurally broken steps, and are detected before any
/// distance is computed.
pub mod parse_error;
/// Walk errors.
///
/// Contains all error types that can be raised while reducing a validated
/// step sequence to a distance. These are defensive: a well-formed step
/// sequence never triggers them.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
