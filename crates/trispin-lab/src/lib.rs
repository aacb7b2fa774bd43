//! The rotating-triangle lab: configuration, key controls, and the app that
//! drives `trispin-engine`.

pub mod app;
pub mod config;
pub mod controls;

pub use app::LabApp;
pub use config::LabConfig;
