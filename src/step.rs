/// Represents one of the four relative movement directions.
///
/// Directions map onto the two displacement axes: `Forward`/`Back` move along
/// the vertical axis, `Right`/`Left` along the horizontal axis. Each direction
/// is written as a single letter in a route, in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `F` or `f`: one step along the positive vertical axis.
    Forward,
    /// `B` or `b`: one step along the negative vertical axis.
    Back,
    /// `L` or `l`: one step along the negative horizontal axis.
    Left,
    /// `R` or `r`: one step along the positive horizontal axis.
    Right,
}

impl Direction {
    /// Maps a direction letter to its `Direction`, accepting either case.
    ///
    /// # Returns
    /// - `Some(Direction)` for `F`, `B`, `L`, `R` and their lowercase forms.
    /// - `None` for any other character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'F' | 'f' => Some(Self::Forward),
            'B' | 'b' => Some(Self::Back),
            'L' | 'l' => Some(Self::Left),
            'R' | 'r' => Some(Self::Right),
            _ => None,
        }
    }

    /// Unit `(horizontal, vertical)` offset of a single move in this
    /// direction.
    #[must_use]
    pub const fn delta(self) -> (f64, f64) {
        match self {
            Self::Forward => (0.0, 1.0),
            Self::Back => (0.0, -1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }

    /// The canonical (uppercase) letter for this direction.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Back => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One `{magnitude}{direction}` unit parsed from a route.
///
/// The magnitude is kept as the digit run exactly as written; it is parsed to
/// a number only when the step is walked, so a malformed magnitude fails
/// loudly there instead of being absorbed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The digit run spelling the step count. Non-empty, decimal digits only.
    pub magnitude: String,
    /// Which way the step moves.
    pub direction: Direction,
}

impl Step {
    /// Creates a step from a magnitude spelling and a direction.
    pub fn new(magnitude: impl Into<String>, direction: Direction) -> Self {
        Self { magnitude: magnitude.into(),
               direction }
    }
}

impl From<(u64, Direction)> for Step {
    fn from((magnitude, direction): (u64, Direction)) -> Self {
        Self { magnitude: magnitude.to_string(),
               direction }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.magnitude, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_letters_parse_in_either_case() {
        assert_eq!(Direction::from_char('F'), Some(Direction::Forward));
        assert_eq!(Direction::from_char('b'), Some(Direction::Back));
        assert_eq!(Direction::from_char('x'), None);
    }

    #[test]
    fn deltas_are_unit_offsets_on_one_axis() {
        assert_eq!(Direction::Forward.delta(), (0.0, 1.0));
        assert_eq!(Direction::Left.delta(), (-1.0, 0.0));
    }

    #[test]
    fn steps_spell_back_their_magnitude_and_direction() {
        assert_eq!(Step::new("12", Direction::Right).to_string(), "12R");
        assert_eq!(Step::from((3, Direction::Forward)).to_string(), "3F");
    }
}
