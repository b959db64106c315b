pub mod compare;
pub mod rankings;
pub mod weapons;
