use std::collections::VecDeque;

use crate::{RearrangeError, move_single, rearrange_by_index, rearrange_by_value};

/// Method-call form of the rearrange operations.
///
/// Implemented for slices, so arrays and `Vec` get it through deref, and for
/// `VecDeque`, which is made contiguous first.
pub trait Rearrange {
    type Item;

    fn rearrange(&mut self, target: usize, indices: &[usize]) -> Result<(), RearrangeError>;

    fn rearrange_values(
        &mut self,
        target: usize,
        items: &[Self::Item],
    ) -> Result<(), RearrangeError>
    where
        Self::Item: PartialEq;

    fn move_item(&mut self, target: usize, index: usize) -> Result<(), RearrangeError>;
}

impl<T> Rearrange for [T] {
    type Item = T;

    fn rearrange(&mut self, target: usize, indices: &[usize]) -> Result<(), RearrangeError> {
        rearrange_by_index(self, target, indices)
    }

    fn rearrange_values(&mut self, target: usize, items: &[T]) -> Result<(), RearrangeError>
    where
        T: PartialEq,
    {
        rearrange_by_value(self, target, items)
    }

    fn move_item(&mut self, target: usize, index: usize) -> Result<(), RearrangeError> {
        move_single(self, target, index)
    }
}

impl<T> Rearrange for VecDeque<T> {
    type Item = T;

    fn rearrange(&mut self, target: usize, indices: &[usize]) -> Result<(), RearrangeError> {
        rearrange_by_index(self.make_contiguous(), target, indices)
    }

    fn rearrange_values(&mut self, target: usize, items: &[T]) -> Result<(), RearrangeError>
    where
        T: PartialEq,
    {
        rearrange_by_value(self.make_contiguous(), target, items)
    }

    fn move_item(&mut self, target: usize, index: usize) -> Result<(), RearrangeError> {
        move_single(self.make_contiguous(), target, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_and_array_use_slice_impl() {
        let mut data = vec!["a", "b", "c", "d"];
        data.rearrange(1, &[3, 0]).unwrap();
        assert_eq!(data, ["b", "a", "d", "c"]);

        let mut data = [1, 2, 3, 4];
        data.move_item(0, 3).unwrap();
        assert_eq!(data, [4, 1, 2, 3]);
        data.rearrange_values(2, &[1, 4]).unwrap();
        assert_eq!(data, [2, 3, 4, 1]);
    }

    #[test]
    fn wrapped_deque_keeps_logical_order() {
        let mut deque: VecDeque<u32> = VecDeque::with_capacity(6);
        deque.extend([2, 3, 4]);
        deque.push_front(1);
        deque.push_front(0);

        deque.rearrange(3, &[0, 2]).unwrap();
        assert!(deque.iter().copied().eq([1, 3, 4, 0, 2]));

        deque.move_item(0, 4).unwrap();
        assert!(deque.iter().copied().eq([2, 1, 3, 4, 0]));

        assert_eq!(
            deque.rearrange_values(0, &[7]),
            Err(RearrangeError::NotFound { item: 0 })
        );
        assert!(deque.iter().copied().eq([2, 1, 3, 4, 0]));
    }
}
