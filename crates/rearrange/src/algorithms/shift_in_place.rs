use std::ptr;

use super::common::{BackwardCursor, ForwardCursor};

/// Buffers the `k` selected elements, slides the unselected elements that have to
/// cross the block toward the gap from both sides, then writes the block back at
/// `target`.
///
/// `positions` is sorted, distinct and in bounds with at least two entries, and
/// `target + positions.len() <= data.len()`.
pub fn rearrange<T>(data: &mut [T], target: usize, positions: &[usize]) {
    let k = positions.len();
    debug_assert!(k >= 2);
    debug_assert!(target + k <= data.len());
    debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(positions[k - 1] < data.len());

    let lo = positions[0];
    let hi = positions[k - 1];

    // Unselected elements with rank below `target` end up left of the block,
    // the rest end up right of it. Only those between the block and their old
    // spot move.
    let mut left = target.saturating_sub(lo);
    let mut right = (hi + 1).saturating_sub(target + k);

    let mut buffer: Vec<T> = Vec::with_capacity(k);
    let ptr = data.as_mut_ptr();
    let buf = buffer.as_mut_ptr();

    // No user code runs between the first read and the final write, so nothing
    // can observe the slots that temporarily hold bitwise copies. `buffer` keeps
    // length 0 and only frees its allocation on drop.
    unsafe {
        for (slot, &index) in positions.iter().enumerate() {
            ptr::copy_nonoverlapping(ptr.add(index), buf.add(slot), 1);
        }

        let mut cursor = ForwardCursor::new(positions);
        let mut read = lo;
        let mut write = lo;
        while left > 0 {
            let index = read;
            read += 1;
            if cursor.is_selected(index) {
                continue;
            }
            // `lo` is selected, so `write < index` from here on.
            ptr::copy_nonoverlapping(ptr.add(index), ptr.add(write), 1);
            write += 1;
            left -= 1;
        }

        let mut cursor = BackwardCursor::new(positions);
        let mut read = hi + 1;
        let mut write = hi + 1;
        while right > 0 {
            read -= 1;
            if cursor.is_selected(read) {
                continue;
            }
            write -= 1;
            ptr::copy_nonoverlapping(ptr.add(read), ptr.add(write), 1);
            right -= 1;
        }

        ptr::copy_nonoverlapping(buf, ptr.add(target), k);
    }
}
