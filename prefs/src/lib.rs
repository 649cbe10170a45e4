//! 2-bit preference packing for the81 quiz results.
//!
//! This crate provides the binary representation of a finished quiz: 81
//! swipe directions packed 2 bits apiece into a fixed 21-byte buffer, plus
//! random-access decode of a single item.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Fixed-size buffers** - Encoding always yields exactly [`PACKED_LEN`] bytes.
//! - **No domain knowledge** - This crate knows nothing about quiz items,
//!   sessions, or share tokens.
//! - **Explicit errors** - Strict decoding returns structured errors, never panics.
//!
//! # Example
//!
//! ```
//! use prefs::{encode_preferences, decode_preferences, Direction, PreferenceMap};
//!
//! let mut map = PreferenceMap::new();
//! map.insert(0, Direction::Up);
//! map.insert(80, Direction::Down);
//!
//! let buffer = encode_preferences(&map);
//! assert_eq!(buffer.len(), 21);
//!
//! let decoded = decode_preferences(&buffer).unwrap();
//! assert_eq!(decoded.get(0), Some(Direction::Up));
//! // Unanswered items decode as the default.
//! assert_eq!(decoded.get(1), Some(Direction::Left));
//! ```

mod direction;
mod error;
mod map;
mod pack;

pub use direction::{Direction, ITEM_COUNT, PACKED_LEN};
pub use error::{PrefsError, PrefsResult};
pub use map::PreferenceMap;
pub use pack::{decode_preferences, encode_preferences, preference_at};
