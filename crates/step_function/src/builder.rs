use std::fmt::Debug;

use crate::{Error, StepFunction};

/// Staged construction of a [`StepFunction`].
///
/// The builder accumulates breakpoints through [`add`]/[`add_all`] and hands
/// out the finished immutable function with [`build`]. It enforces exactly
/// the same insertion rule as [`StepFunction::add_step`] (both front-ends
/// run the same routine), so breakpoints may come in any order and a limit
/// may only ever be bound to one value.
///
/// When a bulk [`add_all`] fails on a conflicting pair, the pairs before it
/// stay applied: insertion is eager, one pair at a time.
///
/// ```
/// # use step_function::Builder;
/// let mut builder = Builder::new("undefined");
/// builder.add(0, "very-low")?.add(51, "low")?;
/// let function = builder.build();
/// assert_eq!(function.apply(&60), &"low");
/// # Ok::<_, step_function::Error<i32, &str>>(())
/// ```
///
/// [`add`]: Builder::add
/// [`add_all`]: Builder::add_all
/// [`build`]: Builder::build
#[derive(Debug)]
pub struct Builder<IN, OUT> {
    function: StepFunction<IN, OUT>,
}

impl<IN, OUT> Builder<IN, OUT>
where
    IN: Ord + Debug,
    OUT: Eq + Debug,
{
    /// A builder for a function that maps everything to `default_value`.
    pub fn new(default_value: OUT) -> Self {
        Self {
            function: StepFunction::new(default_value),
        }
    }

    /// Records one breakpoint; see [`StepFunction::add_step`] for the rule.
    pub fn add(&mut self, limit: IN, value: OUT) -> Result<&mut Self, Error<IN, OUT>> {
        self.function = self.function.add_step(limit, value)?;
        Ok(self)
    }

    /// Records one breakpoint per `(limit, value)` pair, left to right.
    ///
    /// A length mismatch is rejected before anything is applied; a conflict
    /// leaves the pairs before it in place.
    pub fn add_all(
        &mut self,
        limits: impl IntoIterator<Item = IN>,
        values: impl IntoIterator<Item = OUT>,
    ) -> Result<&mut Self, Error<IN, OUT>> {
        let limits: Vec<_> = limits.into_iter().collect();
        let values: Vec<_> = values.into_iter().collect();
        if limits.len() != values.len() {
            return Err(Error::LengthMismatch {
                limits: limits.len(),
                values: values.len(),
            });
        }
        for (limit, value) in limits.into_iter().zip(values) {
            self.add(limit, value)?;
        }
        Ok(self)
    }

    /// The accumulated immutable function (cheap, shares everything).
    #[must_use]
    pub fn build(&self) -> StepFunction<IN, OUT> {
        self.function.clone()
    }
}

impl<IN, OUT> Clone for Builder<IN, OUT> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::Step;

    #[test]
    fn builds_a_step_function() {
        let mut builder = Builder::new("undefined");
        builder.add(0, "very-low").unwrap();
        builder.add(51, "low").unwrap();
        builder.add(101, "high").unwrap();
        builder.add(151, "very-high").unwrap();
        let function = builder.build();
        let outputs = [-10, 10, 60, 120, 200]
            .iter()
            .map(function.as_fn())
            .collect_vec();
        assert_eq!(
            outputs,
            [&"undefined", &"very-low", &"low", &"high", &"very-high"]
        );
    }

    #[test]
    fn builds_the_same_function_whatever_the_insertion_order() {
        let mut builder = Builder::new("undefined");
        builder.add(151, "very-high").unwrap();
        builder.add(0, "very-low").unwrap();
        builder.add(101, "high").unwrap();
        builder.add(51, "low").unwrap();
        let mut sorted = Builder::new("undefined");
        sorted
            .add_all([0, 51, 101, 151], ["very-low", "low", "high", "very-high"])
            .unwrap();
        assert_eq!(builder.build(), sorted.build());
    }

    #[test]
    fn rejects_a_limit_bound_to_two_values() {
        let mut builder = Builder::new("undefined");
        builder.add(0, "very-low").unwrap();
        builder.add(51, "low").unwrap();
        assert!(builder.add(51, "high").is_err());
    }

    #[test]
    fn accepts_a_limit_bound_twice_to_the_same_value() {
        let mut builder = Builder::new("undefined");
        builder.add(0, "very-low").unwrap();
        builder.add(51, "low").unwrap();
        assert!(builder.add(51, "low").is_ok());
        assert_eq!(builder.build().len(), 2);
    }

    #[test]
    fn bulk_failure_keeps_the_pairs_before_the_conflict() {
        let mut builder = Builder::new(0);
        builder.add(51, 1).unwrap();
        let error = builder.add_all([0, 101, 51, 151], [2, 3, 4, 5]).unwrap_err();
        match error {
            Error::DuplicateLimit { existing, rejected } => {
                assert_eq!(*existing, Step::new(51, 1));
                assert_eq!(rejected, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // 0 and 101 were applied eagerly, 151 never was
        let function = builder.build();
        assert_eq!(function.len(), 3);
        assert_eq!(function.apply(&120), &3);
        assert_eq!(function.apply(&200), &3);
    }

    #[test]
    fn bulk_length_mismatch_applies_nothing() {
        let mut builder = Builder::new(0);
        let error = builder.add_all([0, 51], [1]).unwrap_err();
        assert_eq!(
            error,
            Error::LengthMismatch {
                limits: 2,
                values: 1
            }
        );
        assert!(builder.build().is_constant());
    }

    #[test]
    fn both_protocols_build_equal_functions() {
        let mut builder = Builder::new("undefined");
        builder.add_all([0, 51], ["very-low", "low"]).unwrap();
        let functional = StepFunction::new("undefined")
            .add_steps([0, 51], ["very-low", "low"])
            .unwrap();
        assert_eq!(builder.build(), functional);
    }
}
