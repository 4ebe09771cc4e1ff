pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geo;
pub mod logging;
pub mod market;
pub mod model;
pub mod output;
pub mod quality;
pub mod ranking;

pub use error::AnalysisError;
