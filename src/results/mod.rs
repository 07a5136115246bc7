//! Results persistence

mod storage;

pub use storage::{save_output, EnvironmentInfo, ExportFormat, ResultsStorage, StoredRun};
