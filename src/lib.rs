pub mod calc;
pub mod config;
pub mod logging;
pub mod ui;
