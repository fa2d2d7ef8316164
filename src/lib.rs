pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod report;
