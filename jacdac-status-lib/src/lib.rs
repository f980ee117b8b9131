pub mod constants;
pub mod error;
pub mod flags;
pub mod layout;
pub mod number;
pub mod replay;
pub mod summary;


// Re-export the main types for easy access
pub use constants::{CAPTURED_LOG, CAPTURED_LOG_START, PHYS_STATE_SIZE};
pub use error::{Error, Result};
pub use flags::{Flag, FlagTable, decode};
pub use layout::FlagLayout;
pub use number::parse_status_word;
pub use replay::{Replay, ReplayRecord, replay};
pub use summary::{FlagCount, FlagSummary};
