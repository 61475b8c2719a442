pub mod batch;
mod persistence;

pub use batch::{run_batch, run_batch_files, BatchSummary};
pub use persistence::{load_profile_json, save_profile_json, save_report};
