//! cvsh Core Library
//!
//! Everything behind the terminal surface of the portfolio site: the
//! profile record, the command dispatcher and its edit-distance
//! suggestion engine, the transcript, persistence behind a key-value
//! interface, media import, and the interview-invitation builder.
//! Nothing in this crate touches a terminal; rendering lives in
//! `cvsh_ui`.

// Re-export commonly used types and functions
pub use command::Command;
pub use context::AppContext;
pub use error::{CvshError, CvshResult, ErrorKind};
pub use executor::{CommandOutput, Effect, Executor};
pub use invite::Invitation;
pub use palette::{Palette, PaletteSlot, RgbColor};
pub use profile::{Profile, ProfileField};
pub use storage::{FileStore, KvStore, MemoryStore};
pub use suggest::{levenshtein, suggest, SUGGEST_THRESHOLD};
pub use transcript::{Line, LineKind, Transcript};

// Public modules
pub mod command;
pub mod context;
pub mod error;
pub mod executor;
pub mod invite;
pub mod media;
pub mod palette;
pub mod profile;
pub mod storage;
pub mod suggest;
pub mod transcript;
