use tracing::debug;

use crate::{RearrangeAlgorithm, RearrangeContext, RearrangeError, apply_sorted};

/// Removes the elements at `indices` and returns them in their original order.
///
/// The selection is rearranged to the tail and split off, so the remaining
/// elements keep their order and nothing is removed if validation fails.
pub fn remove_indices<T>(data: &mut Vec<T>, indices: &[usize]) -> Result<Vec<T>, RearrangeError> {
    let mut ctx = RearrangeContext::default();
    let positions = ctx
        .load_indices(data.len(), indices)
        .inspect_err(|err| debug!(%err, "rejected removal"))?;
    split_selection(data, positions)
}

/// Removes the first element equal to each of `items`.
pub fn remove_values<T: PartialEq>(
    data: &mut Vec<T>,
    items: &[T],
) -> Result<Vec<T>, RearrangeError> {
    let mut ctx = RearrangeContext::default();
    let positions = ctx
        .load_values(data, items)
        .inspect_err(|err| debug!(%err, "rejected removal"))?;
    split_selection(data, positions)
}

fn split_selection<T>(data: &mut Vec<T>, positions: &[usize]) -> Result<Vec<T>, RearrangeError> {
    let keep = data.len() - positions.len();
    apply_sorted(RearrangeAlgorithm::ShiftInPlace, data, keep, positions)?;
    Ok(data.split_off(keep))
}
