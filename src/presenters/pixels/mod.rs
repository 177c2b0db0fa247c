pub mod factory;
pub mod presenter;

pub use factory::PixelsPresenterFactory;
