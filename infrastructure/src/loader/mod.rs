//! Default modules loader

mod directory;

pub use directory::{DirectoryLoaderFactory, DirectoryModulesLoader};
