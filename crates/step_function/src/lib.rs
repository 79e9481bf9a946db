//! Immutable step functions built incrementally from breakpoints.
//!
//! A step function is a piecewise-constant mapping from a totally ordered
//! domain to arbitrary values (see <https://en.wikipedia.org/wiki/Step_function>).
//! It starts as a constant function and grows one breakpoint at a time, in
//! any order; each breakpoint `(limit, value)` makes every input in
//! `[limit, +∞)` map to `value` until a greater limit takes over.
//!
//! Two interchangeable construction protocols sit on top of a single
//! insertion routine:
//!
//! - [`StepFunction::add_step`], which returns a new immutable function and
//!   never touches the receiver;
//! - [`Builder`], which accumulates breakpoints and produces the function
//!   with [`Builder::build`].
//!
//! Breakpoints live in a persistent [`cons_list::ConsList`], so derived
//! functions share structure instead of copying it.

mod builder;
mod error;
mod function;
mod step;

pub use builder::Builder;
pub use error::Error;
pub use function::StepFunction;
pub use step::Step;
