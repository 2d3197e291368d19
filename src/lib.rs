pub mod app;
pub mod config;
pub mod options;
pub mod shared;
