pub mod cancel;
pub mod run;
pub mod sequence;

pub use cancel::CancelHandle;
pub use run::{RunId, RunNotice, RunOptions, RunOutcome};
pub use sequence::Sequence;
