pub mod assets;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::html_response;
pub use json::json_response;
pub use assets::{asset_response, content_type_for};
