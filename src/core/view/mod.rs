pub mod pointer;
pub mod scroll;
pub mod view_state;

pub use pointer::PointerState;
pub use scroll::scroll_zoom_factor;
pub use view_state::{ViewState, ViewTransform};
