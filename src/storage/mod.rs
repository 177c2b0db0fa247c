pub mod write_png;

pub use write_png::write_png;
