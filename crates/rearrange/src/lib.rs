//! In-place relocation of a subset of a sequence.
//!
//! A rearrange moves the selected elements into one contiguous block while the
//! relative order of both the moved elements and the rest is preserved. The
//! target is given in post-removal index space: it is the index, in the sequence
//! with the selection taken out, at which the block is reinserted, which is also
//! the final position of the first moved element. Valid targets are
//! `0..=len - selected`.
//!
//! Calls either fully succeed or return a [`RearrangeError`] with the sequence
//! left untouched.

mod algorithms;
mod dedup;
mod error;
mod ext;
mod remove;
mod selection;

use tracing::{debug, trace};

pub use dedup::{first_duplicate, first_duplicate_sorted, has_duplicates};
pub use error::RearrangeError;
pub use ext::Rearrange;
pub use remove::{remove_indices, remove_values};

use selection::check_target;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RearrangeAlgorithm {
    /// Buffers the selection and shifts the crossed elements once. `O(n)` time,
    /// `O(k)` extra space.
    ShiftInPlace,
    /// Gathers the selection with single-step rotations. `O(n * k)` time, no
    /// element buffer.
    GatherRotate,
}

pub const ALL_ALGORITHMS: [RearrangeAlgorithm; 2] = [
    RearrangeAlgorithm::ShiftInPlace,
    RearrangeAlgorithm::GatherRotate,
];

pub fn all_algorithms() -> &'static [RearrangeAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: RearrangeAlgorithm) -> &'static str {
    match algo {
        RearrangeAlgorithm::ShiftInPlace => "shift_in_place",
        RearrangeAlgorithm::GatherRotate => "gather_rotate",
    }
}

/// Reusable scratch space for the sorted selection.
#[derive(Clone, Debug, Default)]
pub struct RearrangeContext {
    positions: Vec<usize>,
}

impl RearrangeContext {
    pub fn with_capacity(selected: usize) -> Self {
        Self {
            positions: Vec::with_capacity(selected),
        }
    }
}

/// Moves the elements at `indices` so the block starts at `target`.
///
/// The order of `indices` does not matter; the block keeps the elements in their
/// original sequence order.
pub fn rearrange_by_index<T>(
    data: &mut [T],
    target: usize,
    indices: &[usize],
) -> Result<(), RearrangeError> {
    let mut ctx = RearrangeContext::default();
    rearrange_with_ctx(RearrangeAlgorithm::ShiftInPlace, data, target, indices, &mut ctx)
}

/// Moves the elements equal to `items` so the block starts at `target`.
///
/// Each item resolves to the first equal element of `data`.
pub fn rearrange_by_value<T: PartialEq>(
    data: &mut [T],
    target: usize,
    items: &[T],
) -> Result<(), RearrangeError> {
    let mut ctx = RearrangeContext::default();
    let positions = ctx
        .load_values(data, items)
        .inspect_err(|err| debug!(%err, "rejected rearrange"))?;
    apply_sorted(RearrangeAlgorithm::ShiftInPlace, data, target, positions)
}

pub fn rearrange_with_ctx<T>(
    algo: RearrangeAlgorithm,
    data: &mut [T],
    target: usize,
    indices: &[usize],
    ctx: &mut RearrangeContext,
) -> Result<(), RearrangeError> {
    let positions = ctx
        .load_indices(data.len(), indices)
        .inspect_err(|err| debug!(%err, "rejected rearrange"))?;
    apply_sorted(algo, data, target, positions)
}

/// Moves `data[index]` to `target`, shifting the elements in between by one.
pub fn move_single<T>(data: &mut [T], target: usize, index: usize) -> Result<(), RearrangeError> {
    let len = data.len();
    if index >= len {
        let err = RearrangeError::SourceOutOfRange { index, len };
        debug!(%err, "rejected move");
        return Err(err);
    }
    check_target(len, 1, target).inspect_err(|err| debug!(%err, "rejected move"))?;
    trace!(len, index, target, "moving single element");
    algorithms::common::shift_move(data, index, target);
    Ok(())
}

/// Moves the first element equal to `item` to `target`.
pub fn move_value<T: PartialEq>(
    data: &mut [T],
    target: usize,
    item: &T,
) -> Result<(), RearrangeError> {
    let Some(index) = data.iter().position(|x| x == item) else {
        let err = RearrangeError::NotFound { item: 0 };
        debug!(%err, "rejected move");
        return Err(err);
    };
    move_single(data, target, index)
}

/// `positions` must come from a successful `load_*` call on the same `data`.
pub(crate) fn apply_sorted<T>(
    algo: RearrangeAlgorithm,
    data: &mut [T],
    target: usize,
    positions: &[usize],
) -> Result<(), RearrangeError> {
    check_target(data.len(), positions.len(), target)
        .inspect_err(|err| debug!(%err, "rejected rearrange"))?;
    trace!(
        len = data.len(),
        selected = positions.len(),
        target,
        algorithm = algorithm_name(algo),
        "rearranging selection"
    );

    match *positions {
        [] => {}
        [from] => algorithms::common::shift_move(data, from, target),
        _ => match algo {
            RearrangeAlgorithm::ShiftInPlace => {
                algorithms::shift_in_place::rearrange(data, target, positions)
            }
            RearrangeAlgorithm::GatherRotate => {
                algorithms::gather_rotate::rearrange(data, target, positions)
            }
        },
    }
    Ok(())
}
