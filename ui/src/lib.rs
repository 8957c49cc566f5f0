#![warn(clippy::all, rust_2018_idioms)]
//! egui front end for the live QR generator.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::QrGenApp;
