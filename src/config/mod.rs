//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::OutsetPaths;
pub use settings::Settings;
