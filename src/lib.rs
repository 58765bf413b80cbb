pub mod cli;
pub mod config;
pub mod feed;
pub mod logging;
pub mod remote;
pub mod session;
pub mod ui;
