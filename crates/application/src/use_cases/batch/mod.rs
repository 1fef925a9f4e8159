pub mod run_batch;

pub use run_batch::{BatchOutcome, BatchSummary, RunBatchUseCase};
