#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod command;
mod exec;

pub use command::{DEFAULT_DOWNLOADER, DownloaderCommand};
pub use exec::ProcessDownloader;

// Silence unused dev-dependency warnings on non-unix targets
#[cfg(all(test, not(unix)))]
use tempfile as _;
