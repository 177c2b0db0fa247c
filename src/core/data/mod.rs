pub mod complex;
pub mod viewport;

pub use complex::Complex;
pub use viewport::{ScreenPoint, Viewport};
