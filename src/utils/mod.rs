// Utils compartidos

pub mod constants;
pub mod content_disposition;
pub mod storage;
pub mod browser_files;

pub use constants::*;
