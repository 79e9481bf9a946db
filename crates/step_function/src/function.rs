use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    sync::Arc,
};

use cons_list::ConsList;

use crate::{Error, Step};

/// An immutable, right-continuous step function from `IN` to `OUT`.
///
/// The function is built incrementally: [`new`] gives a constant function,
/// and every [`add_step`] returns a new function with one more breakpoint,
/// leaving the receiver untouched. Breakpoints may be added in any order;
/// functions built from the same set of breakpoints are equal whatever the
/// insertion order.
///
/// Evaluation via [`apply`] returns the value of the greatest breakpoint
/// limit that is `<=` the input, or the default value when the input is below
/// every breakpoint.
///
/// `IN` only needs a total order and `OUT` only equality (`Debug` on both is
/// asked for error diagnostics). Derived functions share their breakpoints
/// and default value through [`Arc`], so instances are cheap to clone and
/// safe to evaluate from any number of threads at once.
///
/// [`new`]: StepFunction::new
/// [`add_step`]: StepFunction::add_step
/// [`apply`]: StepFunction::apply
pub struct StepFunction<IN, OUT> {
    default_value: Arc<OUT>,
    /// Strictly descending by limit, greatest limit at the head.
    ordered_steps: ConsList<Arc<Step<IN, OUT>>>,
}

impl<IN, OUT> StepFunction<IN, OUT> {
    /// The constant function: every input maps to `default_value`.
    pub fn new(default_value: OUT) -> Self {
        Self {
            default_value: Arc::new(default_value),
            ordered_steps: ConsList::new(),
        }
    }

    /// The value returned when no breakpoint applies.
    #[inline]
    pub fn default_value(&self) -> &OUT {
        &self.default_value
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.ordered_steps.len()
    }

    /// True iff the function has no breakpoint at all.
    pub fn is_constant(&self) -> bool {
        self.ordered_steps.is_empty()
    }

    /// Breakpoints in descending-limit order (evaluation order).
    pub fn steps(&self) -> impl Iterator<Item = &Step<IN, OUT>> {
        self.ordered_steps.iter().map(Arc::as_ref)
    }
}

impl<IN: Ord, OUT> StepFunction<IN, OUT> {
    /// Evaluates the function at `input`.
    ///
    /// Returns the value of the first breakpoint (scanning limits in
    /// descending order) whose limit is `<= input`, or the default value if
    /// none qualifies. Never mutates; concurrent readers need no
    /// coordination.
    pub fn apply(&self, input: &IN) -> &OUT {
        self.ordered_steps
            .iter()
            .find(|step| step.contains(input))
            .map_or_else(|| self.default_value(), |step| step.value())
    }

    /// The function as an ordinary mapping, for use with combinators such as
    /// `Iterator::map`.
    pub fn as_fn<'f>(&'f self) -> impl Fn(&IN) -> &'f OUT + 'f {
        move |input| self.apply(input)
    }
}

impl<IN, OUT> StepFunction<IN, OUT>
where
    IN: Ord + Debug,
    OUT: Eq + Debug,
{
    /// Returns a new function with `(limit, value)` spliced in at the
    /// position that keeps the breakpoints strictly descending.
    ///
    /// Re-adding an existing breakpoint with an equal value is a no-op and
    /// returns a function equal to `self`. A limit already present with a
    /// *different* value fails with [`Error::DuplicateLimit`].
    pub fn add_step(&self, limit: IN, value: OUT) -> Result<Self, Error<IN, OUT>> {
        Ok(Self {
            default_value: Arc::clone(&self.default_value),
            ordered_steps: self.insert(Step::new(limit, value))?,
        })
    }

    /// Adds one breakpoint per `(limit, value)` pair, left to right.
    ///
    /// Fails with [`Error::LengthMismatch`] (before applying anything) when
    /// the two collections differ in length, and otherwise behaves exactly
    /// like the equivalent chain of [`add_step`] calls, failing on the first
    /// conflicting pair.
    ///
    /// [`add_step`]: StepFunction::add_step
    pub fn add_steps(
        &self,
        limits: impl IntoIterator<Item = IN>,
        values: impl IntoIterator<Item = OUT>,
    ) -> Result<Self, Error<IN, OUT>> {
        let limits: Vec<_> = limits.into_iter().collect();
        let values: Vec<_> = values.into_iter().collect();
        if limits.len() != values.len() {
            return Err(Error::LengthMismatch {
                limits: limits.len(),
                values: values.len(),
            });
        }
        limits
            .into_iter()
            .zip(values)
            .try_fold(self.clone(), |function, (limit, value)| {
                function.add_step(limit, value)
            })
    }

    /// The one insertion routine behind both construction protocols.
    ///
    /// Walks the descending spine with an explicit stack of passed-over
    /// breakpoints, splices the new step in front of the first smaller
    /// limit, then re-links the stacked prefix. The suffix is shared with
    /// `self`; the prefix re-links the existing `Arc`ed breakpoints, so no
    /// breakpoint is ever duplicated.
    fn insert(
        &self,
        new_step: Step<IN, OUT>,
    ) -> Result<ConsList<Arc<Step<IN, OUT>>>, Error<IN, OUT>> {
        let mut passed = Vec::new();
        let mut cursor = &self.ordered_steps;
        let suffix = loop {
            let Some((head, tail)) = cursor.split() else {
                // smaller than every limit so far
                break cursor;
            };
            match head.cmp_limit(&new_step) {
                // the head's limit is below the new one: splice in front
                Ordering::Less => break cursor,
                Ordering::Equal => {
                    return if head.value() == new_step.value() {
                        log::debug!("step {:?} already present, insertion is a no-op", *head);
                        Ok(self.ordered_steps.clone())
                    } else {
                        Err(Error::DuplicateLimit {
                            existing: Arc::clone(head),
                            rejected: new_step.into_value(),
                        })
                    };
                }
                Ordering::Greater => {
                    passed.push(Arc::clone(head));
                    cursor = tail;
                }
            }
        };
        log::trace!("inserting step {:?} at depth {}", new_step, passed.len());
        let mut steps = suffix.prepend(Arc::new(new_step));
        for step in passed.into_iter().rev() {
            steps = steps.prepend(step);
        }
        Ok(steps)
    }
}

/// O(1): both the default value and the breakpoint spine are shared.
impl<IN, OUT> Clone for StepFunction<IN, OUT> {
    fn clone(&self) -> Self {
        Self {
            default_value: Arc::clone(&self.default_value),
            ordered_steps: self.ordered_steps.clone(),
        }
    }
}

impl<IN: Debug, OUT: Debug> Debug for StepFunction<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepFunction")
            .field("default_value", &self.default_value)
            .field("ordered_steps", &self.ordered_steps)
            .finish()
    }
}

/// Equal iff the default values and the breakpoint sequences are equal. With
/// the ordering invariant this means: same default, same set of breakpoints,
/// regardless of construction order.
impl<IN: PartialEq, OUT: PartialEq> PartialEq for StepFunction<IN, OUT> {
    fn eq(&self, other: &Self) -> bool {
        self.default_value == other.default_value && self.ordered_steps == other.ordered_steps
    }
}
impl<IN: Eq, OUT: Eq> Eq for StepFunction<IN, OUT> {}

impl<IN: Hash, OUT: Hash> Hash for StepFunction<IN, OUT> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.default_value.hash(state);
        self.ordered_steps.hash(state);
    }
}

/// `f=[<default>;<steps>]` with the steps in ascending-limit order.
impl<IN: Display, OUT: Display> Display for StepFunction<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f=[{};{}]", self.default_value, self.ordered_steps)
    }
}
