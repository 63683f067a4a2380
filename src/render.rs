pub mod canvas;
pub mod outline;
pub mod primitive;
