pub mod app;
pub mod chart;
pub mod config;
pub mod content;
pub mod controller;
pub mod core;
pub mod data;
pub mod input;
pub mod logging;
pub mod ui;
