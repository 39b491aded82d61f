// src/ui/mod.rs - UI module root

pub mod app;
pub mod layout;
pub mod pages;
pub mod router;
pub mod state;

pub use app::App;
