//! Share-payload framing and token encoding for the81 quiz results.
//!
//! This crate handles the binary wire format: the checksummed 37-byte share
//! frame and the URL-safe base64 token it travels in. It does not know how
//! preferences are compared or where results are stored—only the structure
//! of the payload.
//!
//! # Design Principles
//!
//! - **Stable wire format** - The 37-byte frame is fixed and unversioned.
//! - **Verified decoding** - Every decoded frame passes a CRC-16 check.
//! - **Byte-exact truncation** - Index and timestamp fields keep the wire
//!   width; decoding never widens them.
//!
//! # Example
//!
//! ```
//! use wire::{decode_share_payload, encode_share_payload, QuizResult};
//!
//! let result = QuizResult {
//!     quiz_id: "ABCDEFGH".to_string(),
//!     preferences: [0x55; 21],
//!     favorite_index: 5,
//!     hated_index: 77,
//!     completed_at_ms: 1_700_000_000_000,
//! };
//!
//! let token = encode_share_payload(&result);
//! let decoded = decode_share_payload(&token).unwrap();
//! assert_eq!(decoded, result);
//! ```

mod crc;
mod error;
mod frame;
mod token;

pub use crc::crc16;
pub use error::{WireError, WireResult};
pub use frame::{decode_frame, encode_frame, QuizResult, CHECKSUM_OFFSET, FRAME_LEN, QUIZ_ID_LEN};
pub use token::{decode_share_payload, encode_share_payload};
