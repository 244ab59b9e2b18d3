pub mod api_reply;

pub use api_reply::{classify_reply, ApiErrorBody, ApiReply};
