pub mod watcher;

pub use watcher::{CycleReport, WatcherService};
