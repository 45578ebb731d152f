/// The lexer module tokenizes a route script for walking.
///
/// The lexer (tokenizer) reads the raw route text and produces an ordered
/// sequence of validated steps, each pairing a digit-run magnitude with a
/// direction. This is the first stage of a measurement and the only place
/// where input is validated.
///
/// # Responsibilities
/// - Converts the input character stream into steps.
/// - Rejects empty input, characters outside the allowed set, directions
///   without a step count, and trailing step counts without a direction.
/// - Reports each violation with its position in the route.
pub mod lexer;

/// The displacement module reduces a step sequence to a distance.
///
/// It accumulates every step's offset onto a pair of horizontal/vertical
/// totals and produces the straight-line (Euclidean) distance from the
/// starting point. It trusts the lexer's validation and performs no character
/// checks of its own.
///
/// # Responsibilities
/// - Walks validated steps, accumulating net horizontal/vertical offsets.
/// - Produces `sqrt(horizontal² + vertical²)` with no rounding.
/// - Fails loudly on a magnitude that cannot be read as a number.
pub mod displacement;
