/// Membership test for an ascending walk over indices, merging against the sorted
/// selection instead of searching it.
pub struct ForwardCursor<'a> {
    positions: &'a [usize],
    next: usize,
}

impl<'a> ForwardCursor<'a> {
    #[inline]
    pub fn new(positions: &'a [usize]) -> Self {
        Self { positions, next: 0 }
    }

    /// Queries must come in strictly increasing order.
    #[inline]
    pub fn is_selected(&mut self, index: usize) -> bool {
        match self.positions.get(self.next) {
            Some(&selected) if selected == index => {
                self.next += 1;
                true
            }
            _ => false,
        }
    }
}

/// Descending counterpart of [`ForwardCursor`].
pub struct BackwardCursor<'a> {
    positions: &'a [usize],
    remaining: usize,
}

impl<'a> BackwardCursor<'a> {
    #[inline]
    pub fn new(positions: &'a [usize]) -> Self {
        Self {
            positions,
            remaining: positions.len(),
        }
    }

    /// Queries must come in strictly decreasing order.
    #[inline]
    pub fn is_selected(&mut self, index: usize) -> bool {
        if self.remaining > 0 && self.positions[self.remaining - 1] == index {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

/// Moves `data[from]` to `to`, shifting everything in between one step toward
/// `from`.
#[inline]
pub fn shift_move<T>(data: &mut [T], from: usize, to: usize) {
    if from > to {
        data[to..=from].rotate_right(1);
    } else if from < to {
        data[from..=to].rotate_left(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_walk_selection() {
        let positions = [1, 3, 4];

        let mut forward = ForwardCursor::new(&positions);
        let hits: Vec<usize> = (0..6).filter(|&i| forward.is_selected(i)).collect();
        assert_eq!(hits, positions);

        let mut backward = BackwardCursor::new(&positions);
        let hits: Vec<usize> = (0..6).rev().filter(|&i| backward.is_selected(i)).collect();
        assert_eq!(hits, [4, 3, 1]);
    }

    #[test]
    fn shift_move_both_directions() {
        let mut data = ['a', 'b', 'c', 'd', 'e'];
        shift_move(&mut data, 1, 3);
        assert_eq!(data, ['a', 'c', 'd', 'b', 'e']);
        shift_move(&mut data, 3, 0);
        assert_eq!(data, ['b', 'a', 'c', 'd', 'e']);
        shift_move(&mut data, 2, 2);
        assert_eq!(data, ['b', 'a', 'c', 'd', 'e']);
    }
}
