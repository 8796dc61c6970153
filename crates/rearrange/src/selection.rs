use crate::dedup::first_duplicate_sorted;
use crate::{RearrangeContext, RearrangeError};

impl RearrangeContext {
    /// Copies `indices` into the scratch buffer, sorted ascending.
    pub(crate) fn load_indices(
        &mut self,
        len: usize,
        indices: &[usize],
    ) -> Result<&[usize], RearrangeError> {
        self.positions.clear();
        self.positions.reserve(indices.len());
        for &index in indices {
            if index >= len {
                return Err(RearrangeError::SourceOutOfRange { index, len });
            }
            self.positions.push(index);
        }
        self.finish()
    }

    /// Resolves every item to the first position holding an equal value.
    ///
    /// Two equal items resolve to the same position and are reported as a
    /// duplicate selection.
    pub(crate) fn load_values<T: PartialEq>(
        &mut self,
        data: &[T],
        items: &[T],
    ) -> Result<&[usize], RearrangeError> {
        self.positions.clear();
        self.positions.reserve(items.len());
        for (item, value) in items.iter().enumerate() {
            let index = data
                .iter()
                .position(|x| x == value)
                .ok_or(RearrangeError::NotFound { item })?;
            self.positions.push(index);
        }
        self.finish()
    }

    fn finish(&mut self) -> Result<&[usize], RearrangeError> {
        self.positions.sort_unstable();
        if let Some((_, repeated)) = first_duplicate_sorted(&self.positions) {
            return Err(RearrangeError::DuplicateSelection {
                index: self.positions[repeated],
            });
        }
        Ok(&self.positions)
    }
}

/// The block of `selected` elements must fit in the sequence left after removing
/// them, so the largest valid target is `len - selected`.
pub(crate) fn check_target(
    len: usize,
    selected: usize,
    target: usize,
) -> Result<(), RearrangeError> {
    debug_assert!(selected <= len);
    let max = len - selected;
    if target > max {
        return Err(RearrangeError::TargetOutOfRange { target, max });
    }
    Ok(())
}
