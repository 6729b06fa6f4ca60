pub mod build_error;
pub mod combiner;
pub mod correlator;
pub mod diagnostics;
pub mod generation_result;
pub mod sync_check;

pub use combiner::combine_documents;
pub use correlator::{build_combined_documents, CorrelationOptions};
pub use diagnostics::DiagnosticKind;
pub use generation_result::GenerationResult;
pub use sync_check::{check_files_sync, SyncState};
