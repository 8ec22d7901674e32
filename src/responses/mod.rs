pub mod errors;
pub mod html;
pub mod xlsx;

pub use errors::ResultResp;

// Normal HTML / text responses
pub use html::{html_response, text_response};
pub use xlsx::xlsx_response;
