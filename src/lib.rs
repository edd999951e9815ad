//! Menu catalog client and reference catalog server.

pub mod config;
pub mod prefs;
pub mod render;
pub mod server;
