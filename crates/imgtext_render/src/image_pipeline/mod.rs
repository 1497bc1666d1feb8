pub mod adjust;
pub mod loader;
pub mod pixels;
pub mod resize;
