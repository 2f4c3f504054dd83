pub mod config;
pub mod constants;
pub mod control;
pub mod dashboard;
pub mod plotter;
pub mod utils;
