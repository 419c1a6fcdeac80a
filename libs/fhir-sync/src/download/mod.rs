//! Paginated download sequencing

pub mod manager;
pub mod request;

pub use manager::{DownloadWorkManager, UrlDownloadWorkManager};
pub use request::DownloadRequest;
