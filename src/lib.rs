pub mod auth;
pub mod config;
pub mod data;
pub mod demo;
pub mod logging;
pub mod nav;
pub mod ui;
