use crate::{
    error::RuntimeError,
    step::{Direction, Step},
};

/// Result type used by the displacement calculator.
///
/// All walking functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type WalkResult<T> = Result<T, RuntimeError>;

/// The net offset from the starting point while walking a route.
///
/// Both accumulators start at zero, are owned by a single computation, and
/// are discarded once the final distance has been produced. No state survives
/// between measurements.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// Net left/right offset. Right is positive.
    pub horizontal: f64,
    /// Net forward/back offset. Forward is positive.
    pub vertical:   f64,
}

impl Displacement {
    /// Moves `magnitude` units in `direction`.
    pub fn advance(&mut self, direction: Direction, magnitude: f64) {
        let (horizontal, vertical) = direction.delta();
        self.horizontal += horizontal * magnitude;
        self.vertical += vertical * magnitude;
    }

    /// Straight-line distance from the starting point,
    /// `sqrt(horizontal² + vertical²)`.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.horizontal * self.horizontal + self.vertical * self.vertical).sqrt()
    }
}

/// Reduces a validated step sequence to the straight-line distance from the
/// starting point.
///
/// Accumulation is commutative, so the element order of `steps` does not
/// change the result. An empty sequence measures `0.0`. Pure function of its
/// input.
///
/// # Parameters
/// - `steps`: Steps as produced by
///   [`tokenize`](crate::route::lexer::tokenize).
///
/// # Returns
/// The non-negative Euclidean distance, with no rounding applied.
///
/// # Errors
/// Returns `RuntimeError::MagnitudeParseFailure` if a step's magnitude cannot
/// be read as a number. Steps produced by the lexer never trigger this.
///
/// # Example
/// ```
/// use crowflies::{
///     route::displacement::compute_distance,
///     step::{Direction, Step},
/// };
///
/// let steps = [Step::new("3", Direction::Forward), Step::new("4", Direction::Right)];
/// assert_eq!(compute_distance(&steps).unwrap(), 5.0);
/// ```
pub fn compute_distance(steps: &[Step]) -> WalkResult<f64> {
    let mut displacement = Displacement::default();

    for step in steps {
        let magnitude: f64 =
            step.magnitude
                .parse()
                .map_err(|_| RuntimeError::MagnitudeParseFailure { magnitude: step.magnitude
                                                                                  .clone(), })?;
        displacement.advance(step.direction, magnitude);
    }

    Ok(displacement.distance())
}
