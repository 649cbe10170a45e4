//! Quiz session state and result storage for the81.
//!
//! This crate holds the pieces around the codec core: the explicit
//! [`QuizSession`] value tracking an attempt in progress, and the
//! [`ResultStore`] abstraction the UI persists finished results through.
//!
//! # Design Principles
//!
//! - **No ambient state** - A session is a plain value owned by its caller;
//!   there is no process-wide current quiz.
//! - **Storage behind a trait** - Backends vary (browser storage, files,
//!   memory); the core codes against [`ResultStore`] only.
//!
//! # Example
//!
//! ```
//! use prefs::Direction;
//! use quiz::{MemoryStore, QuizSession, ResultStore};
//!
//! let mut session = QuizSession::new();
//! for _ in 0..81 {
//!     session.record_swipe(Direction::Right);
//! }
//!
//! let result = session.finish("weekly", 1_700_000_000_000).unwrap();
//! let mut store = MemoryStore::new();
//! store.save(result).unwrap();
//! assert!(store.has_completed("weekly").unwrap());
//! ```

mod error;
mod session;
mod store;

pub use error::{SessionError, StoreError};
pub use session::QuizSession;
pub use store::{MemoryStore, ResultStore};
