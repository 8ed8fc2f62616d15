pub mod backdrop;
pub mod starfield;
