pub mod fetch;
pub mod view_state;

pub use fetch::{interpret_response, request_image};
pub use view_state::ViewState;
