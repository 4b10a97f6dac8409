mod config;

pub use config::{Config, MAX_RESULTS_PER_REQUEST};
