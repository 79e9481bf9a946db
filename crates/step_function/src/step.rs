use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// A single breakpoint of a step function: every input in `[limit, +∞)` is
/// mapped to `value`, unless a breakpoint with a greater limit also covers it.
///
/// Two breakpoints are equal iff both fields are equal. Ordering between
/// breakpoints looks at the limit only, so it is exposed as [`cmp_limit`]
/// rather than an `Ord` impl that would disagree with `Eq`.
///
/// [`cmp_limit`]: Step::cmp_limit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step<IN, OUT> {
    limit: IN,
    value: OUT,
}

impl<IN, OUT> Step<IN, OUT> {
    #[inline]
    pub fn new(limit: IN, value: OUT) -> Self {
        Self { limit, value }
    }

    #[inline]
    pub fn limit(&self) -> &IN {
        &self.limit
    }

    #[inline]
    pub fn value(&self) -> &OUT {
        &self.value
    }

    #[inline]
    pub(crate) fn into_value(self) -> OUT {
        self.value
    }
}

impl<IN: Ord, OUT> Step<IN, OUT> {
    /// True iff `input` falls inside `[limit, +∞)`.
    #[inline]
    pub fn contains(&self, input: &IN) -> bool {
        self.limit <= *input
    }

    /// Three-way comparison by limit, ignoring the values.
    #[inline]
    pub fn cmp_limit(&self, other: &Self) -> Ordering {
        self.limit.cmp(&other.limit)
    }
}

impl<IN: Display, OUT: Display> Display for Step<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}={})", self.limit, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_a_right_closed_lower_bound() {
        let step = Step::new(51, "low");
        assert!(step.contains(&51));
        assert!(step.contains(&60));
        assert!(!step.contains(&50));
    }

    #[test]
    fn equality_looks_at_both_fields() {
        assert_eq!(Step::new(51, "low"), Step::new(51, "low"));
        assert_ne!(Step::new(51, "low"), Step::new(51, "high"));
        assert_ne!(Step::new(51, "low"), Step::new(52, "low"));
        assert_eq!(
            Step::new(51, "low").cmp_limit(&Step::new(51, "high")),
            Ordering::Equal
        );
    }

    #[test]
    fn displays_as_limit_equals_value() {
        assert_eq!(Step::new(51, "low").to_string(), "(51=low)");
    }
}
