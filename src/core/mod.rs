pub mod data;
pub mod iterations;
pub mod sequence;
pub mod stats;
pub mod view;
