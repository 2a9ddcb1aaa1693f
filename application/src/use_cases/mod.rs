//! Use cases (application services)

pub mod resolve_loader;
pub mod sync_modules;
