//! Merging many outcomes into one.
//!
//! Collecting keeps going after the first failure and gathers every error, in
//! iteration order. Successful values are only assembled when nothing failed.
//!
//! # Examples
//!
//! ```
//! use simple_result::{Outcome, TypedOutcome};
//!
//! let all: TypedOutcome<Vec<i32>> =
//!     vec![TypedOutcome::ok(1), TypedOutcome::ok(2)].into_iter().collect();
//! assert_eq!(all.into_value(), Some(vec![1, 2]));
//!
//! let merged = Outcome::merge([Outcome::fail("a"), Outcome::ok(), Outcome::fail("b")]);
//! assert_eq!(merged.errors().len(), 2);
//! ```

use crate::types::accumulator::Accumulator;
use crate::types::alloc_type::Vec;
use crate::types::{Outcome, TypedOutcome};

impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut acc = Accumulator::new();
        for outcome in iter {
            if let Outcome::Failure(errors) = outcome {
                acc.push(errors);
            }
        }

        match acc.finish() {
            Some(errors) => Outcome::Failure(errors),
            None => Outcome::Success,
        }
    }
}

impl<T, C> FromIterator<TypedOutcome<T>> for TypedOutcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = TypedOutcome<T>>>(iter: I) -> Self {
        let mut acc = Accumulator::new();
        let mut values = Vec::new();

        for outcome in iter {
            match outcome {
                TypedOutcome::Success(value) if acc.is_empty() => values.push(value),
                TypedOutcome::Success(_) => {},
                TypedOutcome::Failure(errors) => {
                    values.clear();
                    acc.push(errors);
                },
            }
        }

        match acc.finish() {
            Some(errors) => TypedOutcome::Failure(errors),
            None => TypedOutcome::Success(values.into_iter().collect()),
        }
    }
}

impl Outcome {
    /// Merges `outcomes` into a single outcome carrying every error.
    #[inline]
    pub fn merge<I>(outcomes: I) -> Outcome
    where
        I: IntoIterator<Item = Outcome>,
    {
        outcomes.into_iter().collect()
    }
}
