//! HTTP front end for the dwarf URL shortener.
//!
//! Serves redirects for issued codes and a JSON endpoint that shortens a
//! batch of urls. Everything else is delegated to a [`dwarf_core::UrlStore`].

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;
pub mod validate;

pub use app::App;
pub use state::AppState;
