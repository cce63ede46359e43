mod batch;
mod persistence;

pub use batch::{load_batch, score_batch, write_batch_results, BatchOutcome, BatchRecord};
pub use persistence::{load_standards, save_result_json, save_standards};
