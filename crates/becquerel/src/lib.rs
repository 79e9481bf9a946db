//! Alert-level classification of radioactivity measurements.
//!
//! The whole detector is one [`StepFunction`] configured with four
//! breakpoints: measurements below 0 Bq are out of the valid range
//! ([`AlertLevel::Undefined`]), and the level then escalates at 51, 101 and
//! 151 Bq.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use once_cell::sync::Lazy;
use step_function::{Builder, Error, StepFunction};

/// Universal alert levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertLevel {
    /// The measure is not in the valid range.
    Undefined,
    /// Hum, so low it is worrying?
    VeryLow,
    /// Business as usual.
    Low,
    /// Time to invest in a shelter.
    High,
    /// Doomed.
    VeryHigh,
}

impl Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        };
        write!(f, "{name}")
    }
}

/// A radioactivity measurement in becquerels.
///
/// `f32` is only `PartialOrd`; this newtype is totally ordered through
/// [`f32::total_cmp`] so it can be a step-function domain.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Becquerel(pub f32);

impl PartialEq for Becquerel {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Becquerel {}

impl PartialOrd for Becquerel {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Becquerel {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Consistent with `Eq`: `total_cmp` equality is bit equality.
impl Hash for Becquerel {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f32> for Becquerel {
    #[inline]
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl Display for Becquerel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Bq", self.0)
    }
}

fn build_detector() -> Result<StepFunction<Becquerel, AlertLevel>, Error<Becquerel, AlertLevel>> {
    let mut builder = Builder::new(AlertLevel::Undefined);
    builder
        .add(Becquerel(0.0), AlertLevel::VeryLow)?
        .add(Becquerel(51.0), AlertLevel::Low)?
        .add(Becquerel(101.0), AlertLevel::High)?
        .add(Becquerel(151.0), AlertLevel::VeryHigh)?;
    Ok(builder.build())
}

/// The shared detector: maps a measured becquerel level to an [`AlertLevel`].
///
/// ```
/// use becquerel::{alert_detector, AlertLevel, Becquerel};
///
/// assert_eq!(alert_detector().apply(&Becquerel(60.0)), &AlertLevel::Low);
/// ```
pub fn alert_detector() -> &'static StepFunction<Becquerel, AlertLevel> {
    static DETECTOR: Lazy<StepFunction<Becquerel, AlertLevel>> =
        Lazy::new(|| build_detector().expect("the configured limits are distinct"));
    &DETECTOR
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn detects_alert_levels_for_the_reference_measures() {
        let measures = [-10.0, 10.0, 60.0, 120.0, 200.0];
        let alerts = measures
            .into_iter()
            .map(|measure| alert_detector().apply(&Becquerel(measure)))
            .collect_vec();
        assert_eq!(
            alerts,
            [
                &AlertLevel::Undefined,
                &AlertLevel::VeryLow,
                &AlertLevel::Low,
                &AlertLevel::High,
                &AlertLevel::VeryHigh,
            ]
        );
    }

    #[test]
    fn boundaries_belong_to_the_level_they_open() {
        assert_eq!(
            alert_detector().apply(&Becquerel(151.0)),
            &AlertLevel::VeryHigh
        );
        assert_eq!(alert_detector().apply(&Becquerel(0.0)), &AlertLevel::VeryLow);
        assert_eq!(
            alert_detector().apply(&Becquerel(-0.001)),
            &AlertLevel::Undefined
        );
    }

    #[test]
    fn becquerel_is_totally_ordered() {
        assert!(Becquerel(f32::NEG_INFINITY) < Becquerel(0.0));
        assert!(Becquerel(151.0) > Becquerel(101.0));
        assert_eq!(Becquerel(51.0), Becquerel(51.0));
        // NaN sorts above +inf under the IEEE total order, so the detector
        // still answers something sensible instead of panicking
        assert_eq!(
            alert_detector().apply(&Becquerel(f32::NAN)),
            &AlertLevel::VeryHigh
        );
    }
}
