pub mod common;
pub mod gather_rotate;
pub mod shift_in_place;
