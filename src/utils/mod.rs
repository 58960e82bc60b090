//! Utility modules: platform paths and logging.

pub mod logging;
pub mod persistence;

pub use logging::init_logging;
pub use persistence::{config_dir, data_dir, log_path, prefs_path};
