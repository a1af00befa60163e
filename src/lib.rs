pub mod config;
pub mod describe;
pub mod domain;
pub mod error;
pub mod fs;
pub mod git;
pub mod ui;

pub use describe::{derive_version, derive_version_with};
pub use domain::Version;
pub use error::{GitverError, Result};
