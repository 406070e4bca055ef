pub mod cli;
pub mod config;
pub mod logging;
pub mod seed;
pub mod setup;
pub mod shell;
pub mod view;

pub use config::NodeConfig;
