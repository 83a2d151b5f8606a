//! File Upload Module
//!
//! Authenticated upload endpoint. The handler acknowledges the upload by
//! echoing the file name; persistence, scanning and type checks are not
//! performed, and only the part headers are read.

/// Upload handler
pub mod handlers;

pub use handlers::{upload_file, UploadResponse};
