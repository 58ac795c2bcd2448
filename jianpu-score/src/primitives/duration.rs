use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use fraction::Fraction;
use serde::{
    de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize,
    Serializer,
};

use super::{fraction_to_f64, limit_denominator, LIMIT_DENOMINATOR};
use crate::error::{ScoreError, ScoreResult};

/// Durations offered by the editor, shortest first.
const STEPS: [(u64, u64); 8] = [
    (1, 8),
    (1, 4),
    (1, 2),
    (3, 4),
    (1, 1),
    (2, 1),
    (3, 1),
    (4, 1),
];

/// Length of a chord in quarter notes.
///
/// `Duration::new(1, 2)` is an eighth, `Duration::new(4, 1)` a whole note.
/// On the wire a duration is a plain JSON number; whole values are written
/// as integers.
///
/// # Example
/// ```
/// # use jianpu_score::primitives::Duration;
/// let eighth = Duration::new(1, 2);
/// assert_eq!(eighth + eighth, Duration::quarter());
/// assert_eq!(Duration::new(5, 4).ceil(), Duration::new(2, 1));
/// assert_eq!(Duration::from_quarters(0.75), Some(Duration::new(3, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Duration {
    fraction: Fraction,
}
impl Duration {
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            fraction: Fraction::new(numerator, denominator),
        }
    }
    pub fn zero() -> Self {
        Self::new(0, 1)
    }
    pub fn quarter() -> Self {
        Self::new(1, 1)
    }

    /// Quantized to 1/128 of a quarter. `None` if not finite.
    pub fn from_quarters(quarters: f64) -> Option<Self> {
        limit_denominator(quarters, LIMIT_DENOMINATOR).map(Self::from)
    }

    pub fn get(&self) -> Fraction {
        self.fraction
    }
    pub fn as_f64(&self) -> Option<f64> {
        fraction_to_f64(self.fraction)
    }
    pub fn is_positive(&self) -> bool {
        self.fraction > Fraction::new(0u64, 1u64)
    }
    /// Groups and staves only take durations above zero.
    pub fn positive(self) -> ScoreResult<Self> {
        match self.is_positive() {
            true => Ok(self),
            false => Err(ScoreError::NonPositiveDuration(self)),
        }
    }

    /// Next whole quarter at or after self.
    pub fn ceil(&self) -> Self {
        Self {
            fraction: self.fraction.ceil(),
        }
    }

    /// The editor's duration choices: 1/8, 1/4, 1/2, 3/4, 1, 2, 3, 4.
    pub fn steps() -> impl Iterator<Item = Duration> {
        STEPS.into_iter().map(|(n, d)| Self::new(n, d))
    }

    /// Next longer step, clamped at the longest.
    ///
    /// A duration that is not one of the steps goes to the shortest one.
    pub fn step_up(&self) -> Self {
        let steps: Vec<_> = Self::steps().collect();
        match steps.iter().position(|step| step == self) {
            None => steps[0],
            Some(idx) => steps[(idx + 1).min(steps.len() - 1)],
        }
    }

    /// Next shorter step, clamped at the shortest.
    ///
    /// A duration that is not one of the steps is kept.
    pub fn step_down(&self) -> Self {
        let steps: Vec<_> = Self::steps().collect();
        match steps.iter().position(|step| step == self) {
            None => *self,
            Some(idx) => steps[idx.saturating_sub(1)],
        }
    }
}
impl Default for Duration {
    fn default() -> Self {
        Self::quarter()
    }
}
impl From<Fraction> for Duration {
    fn from(fraction: Fraction) -> Self {
        Self { fraction }
    }
}
impl Add for Duration {
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            fraction: self.fraction + rhs.fraction,
        }
    }
    type Output = Self;
}
impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.fraction += rhs.fraction
    }
}
impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| acc + d)
    }
}
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fraction)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if !self.fraction.is_sign_negative() {
            if let (Some(n), Some(&1)) =
                (self.fraction.numer(), self.fraction.denom())
            {
                return serializer.serialize_u64(*n);
            }
        }
        let value = self.as_f64().ok_or_else(|| {
            S::Error::custom(format!("duration is not finite: {}", self))
        })?;
        serializer.serialize_f64(value)
    }
}
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_quarters(value).ok_or_else(|| {
            D::Error::custom(format!("duration is not finite: {}", value))
        })
    }
}
