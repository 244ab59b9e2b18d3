pub mod common;
pub mod u601_upload_documents;
pub mod u602_ask_question;
