//! # crowflies
//!
//! crowflies reads compact route scripts such as `3F4R`, validates and
//! tokenizes them, and reports the straight-line distance from the starting
//! point after every step has been walked.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Interactive front-end for measuring routes.
///
/// This module holds everything a terminal session needs: the menu commands,
/// the instructions screen, and the `Console` capability trait that keeps the
/// loop swappable per environment. It is a thin wrapper; all validation and
/// arithmetic live in [`route`].
///
/// # Responsibilities
/// - Defines the `Console` trait and its stdin/stdout implementation.
/// - Parses menu choices and drives the prompt/measure/report loop.
/// - Surfaces rejections as messages and prompts again.
pub mod console;
/// Provides unified error types for tokenizing and walking routes.
///
/// This module defines all errors that can be raised while scanning a route
/// or reducing it to a distance. It standardizes error reporting and carries
/// detailed information about failures, including the offending text and its
/// position, for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, calculator).
/// - Attaches positions and offending text for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the route pipeline: tokenize, then walk.
///
/// This module ties together the lexer and the displacement calculator to
/// provide a complete measurement of a route script. Each measurement
/// operates on independently owned data; nothing persists between calls.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and displacement calculator.
/// - Provides the entry points for tokenizing and measuring routes.
/// - Manages the flow of data and errors between phases.
pub mod route;
/// Defines the structure of a parsed route.
///
/// This module declares the `Step` and `Direction` types that represent a
/// route as an ordered sequence of validated movements. Steps are built by
/// the lexer and consumed by the displacement calculator.
///
/// # Responsibilities
/// - Defines the direction vocabulary and its axis offsets.
/// - Pairs each direction with its magnitude spelling, kept as written.
/// - Enables deterministic diagnostics by preserving order and spelling.
pub mod step;

/// Measures the straight-line distance covered by a route script.
///
/// This is the composed entry point: the route is tokenized and, if every
/// step is valid, reduced to its Euclidean distance from the starting point.
///
/// # Errors
/// Returns an error if tokenization rejects the route, or if a step's
/// magnitude cannot be read as a number.
///
/// # Examples
/// ```
/// use crowflies::measure;
///
/// // A 3-4-5 triangle: three steps forward, four to the right.
/// let distance = measure("3F4R").unwrap();
/// assert_eq!(distance, 5.0);
///
/// // Trailing steps with no direction are rejected.
/// assert!(measure("3F4").is_err());
/// ```
pub fn measure(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let steps = route::lexer::tokenize(source)?;
    let distance = route::displacement::compute_distance(&steps)?;
    Ok(distance)
}
