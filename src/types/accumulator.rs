use crate::types::{Error, ErrorVec, Errors};

/// Gathers the errors of several failures into one sequence.
///
/// The first failure's [`Errors`] is kept as is; a new allocation is only made
/// once a second failure has to be appended, so merging a single failure
/// preserves its identity.
#[derive(Debug)]
pub(crate) struct Accumulator {
    first: Option<Errors>,
    rest: ErrorVec<Error>,
}

impl Accumulator {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { first: None, rest: ErrorVec::new() }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub(crate) fn push(&mut self, errors: Errors) {
        match self.first {
            None => self.first = Some(errors),
            Some(_) => self.rest.extend(errors.iter().cloned()),
        }
    }

    /// Returns the merged sequence, or `None` if nothing failed.
    pub(crate) fn finish(self) -> Option<Errors> {
        let first = self.first?;
        if self.rest.is_empty() {
            return Some(first);
        }

        let mut items = first.into_vec();
        items.extend(self.rest);
        Errors::try_from_vec(items).ok()
    }
}
