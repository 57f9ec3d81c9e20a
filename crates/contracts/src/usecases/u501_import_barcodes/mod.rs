pub mod progress;
pub mod request;
pub mod response;
pub mod scan;

pub use progress::{BlockReason, ReadTicket, SessionState};
pub use request::IngestionForm;
pub use response::CommitReceipt;
pub use scan::{CellRef, ScanIssue, ScanResult};
