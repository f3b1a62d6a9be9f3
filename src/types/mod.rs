//! Request and response types for the HTTP API

pub mod response;

pub use response::{AskRequest, AskResponse, ContextStatus, UploadResponse};
