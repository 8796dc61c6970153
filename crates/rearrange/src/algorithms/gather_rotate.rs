/// Pulls every selected element up against the last one with single-step
/// rotations, then rotates the finished block into place. Same preconditions as
/// the shift algorithm.
pub fn rearrange<T>(data: &mut [T], target: usize, positions: &[usize]) {
    let k = positions.len();
    debug_assert!(k >= 2);
    debug_assert!(target + k <= data.len());

    let mut start = positions[k - 1];
    for &index in positions[..k - 1].iter().rev() {
        data[index..start].rotate_left(1);
        start -= 1;
    }

    if target < start {
        data[target..start + k].rotate_right(k);
    } else if target > start {
        data[start..target + k].rotate_left(k);
    }
}
