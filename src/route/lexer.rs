use logos::Logos;

use crate::{
    error::ParseError,
    step::{Direction, Step},
};

/// Human-readable description of the characters a route may contain.
///
/// Owned by the lexer and embedded into [`ParseError::InvalidCharacter`]
/// diagnostics; never changes after definition.
pub const ALLOWED_CHARACTERS: &str =
    "digits 0-9 and the directions F, B, L and R (either case)";

/// Represents a raw lexical token in a route script.
///
/// A route is scanned left to right with maximal munch, so a digit run
/// directly followed by a direction letter always scans as one [`RawToken::Step`].
/// The two bare variants only appear where a route is malformed, and the
/// driver in [`tokenize`] turns them into the matching rejection.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    /// A complete step: a digit run followed by a direction letter.
    #[regex(r"[0-9]+[FfBbLlRr]", parse_step)]
    Step(Step),
    /// A digit run with no direction after it. Legal only if more of the
    /// step follows; dangling at end of input.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    BareMagnitude(String),
    /// A direction letter with no digits in front of it. Never legal.
    #[regex(r"[FfBbLlRr]", |lex| lex.slice().chars().next())]
    BareDirection(char),
}

/// Splits a complete step token into its magnitude spelling and direction.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Step)`: The step, with the digit run kept as written.
/// - `None`: If the trailing character is not a direction letter; the regex
///   guarantees this cannot happen.
fn parse_step(lex: &logos::Lexer<RawToken>) -> Option<Step> {
    let slice = lex.slice();
    let (digits, direction) = slice.split_at(slice.len() - 1);
    let direction = direction.chars().next().and_then(Direction::from_char)?;
    Some(Step::new(digits, direction))
}

/// Converts a raw route script into an ordered sequence of validated steps.
///
/// The scan is a single left-to-right pass with no backtracking. It fails
/// fast at the first violation and never returns a partial step sequence.
/// Whitespace is trimmed only for the emptiness check; in a non-blank route
/// it is an invalid character like any other.
///
/// # Parameters
/// - `input`: The route script, a concatenation of `{digits}{direction}`
///   groups with no separators.
///
/// # Returns
/// The steps in the order they were written.
///
/// # Errors
/// - `EmptyInput` if `input` is empty or whitespace-only.
/// - `InvalidCharacter` at the first character outside the allowed set.
/// - `MissingMagnitude` at a direction letter with no digits in front of it.
/// - `DanglingMagnitude` if the route ends in digits with no direction.
///
/// # Example
/// ```
/// use crowflies::route::lexer::tokenize;
///
/// let steps = tokenize("3F4R").unwrap();
/// assert_eq!(steps.len(), 2);
///
/// // Two adjacent directions leave the second with no step count.
/// assert!(tokenize("5FF").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Step>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut lexer = RawToken::lexer(input);
    let mut steps = Vec::new();
    // A digit run still waiting for its direction. Maximal munch means only
    // end of input or an invalid character can follow one, and the invalid
    // character is the earlier violation.
    let mut pending: Option<(String, usize)> = None;

    while let Some(token) = lexer.next() {
        match token {
            Ok(RawToken::Step(step)) => steps.push(step),

            Ok(RawToken::BareMagnitude(digits)) => {
                pending = Some((digits, lexer.span().start));
            },

            Ok(RawToken::BareDirection(direction)) => {
                return Err(ParseError::MissingMagnitude { direction,
                                                          position: lexer.span().start });
            },

            Err(()) => {
                return Err(ParseError::InvalidCharacter { found:    lexer.slice().to_string(),
                                                          allowed:  ALLOWED_CHARACTERS,
                                                          position: lexer.span().start, });
            },
        }
    }

    if let Some((digits, position)) = pending {
        return Err(ParseError::DanglingMagnitude { digits, position });
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_steps_in_order() {
        let steps = tokenize("1F2B3L4R").unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], Step::new("1", Direction::Forward));
        assert_eq!(steps[3], Step::new("4", Direction::Right));
    }

    #[test]
    fn lowercase_directions_scan_like_uppercase() {
        assert_eq!(tokenize("9b").unwrap(), vec![Step::new("9", Direction::Back)]);
    }

    #[test]
    fn multi_digit_magnitudes_stay_one_step() {
        assert_eq!(tokenize("120F").unwrap(),
                   vec![Step::new("120", Direction::Forward)]);
    }

    #[test]
    fn a_direction_without_digits_is_missing_its_magnitude() {
        assert!(matches!(tokenize("L1"),
                         Err(ParseError::MissingMagnitude { direction: 'L', position: 0 })));
    }

    #[test]
    fn leftover_digits_at_end_of_scan_are_dangling() {
        assert!(matches!(tokenize("12"), Err(ParseError::DanglingMagnitude { .. })));
    }

    #[test]
    fn an_invalid_character_after_leftover_digits_wins() {
        // The digits are only a violation if nothing follows them.
        assert!(matches!(tokenize("3F4?"), Err(ParseError::InvalidCharacter { .. })));
    }

    #[test]
    fn blank_input_is_empty_not_invalid() {
        assert!(matches!(tokenize(" \t "), Err(ParseError::EmptyInput)));
    }
}
