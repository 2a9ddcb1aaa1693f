//! Results of a module load and the event that announces them

pub mod event;
pub mod loaded;

pub use event::ModulesLoadedEvent;
pub use loaded::LoadedModules;
