pub mod emoji;
pub mod index;
pub mod source;
