//! The 37-byte share frame.
//!
//! Layout (all multi-byte fields big-endian):
//!
//! ```text
//! offset  size  field
//! 0       8     quiz id, UTF-8, truncated / NUL-padded
//! 8       21    packed preferences
//! 29      1     favorite item index
//! 30      1     most-hated item index
//! 31      4     completion time, whole seconds since the epoch
//! 35      2     CRC-16 over bytes 0..35
//! ```
//!
//! The format is fixed and unversioned; it must never change.

use prefs::PACKED_LEN;

use crate::crc::crc16;
use crate::error::{WireError, WireResult};

/// Size in bytes of the quiz id field.
pub const QUIZ_ID_LEN: usize = 8;

/// Total frame size in bytes.
pub const FRAME_LEN: usize = 37;

/// Offset of the trailing checksum; also the number of checksummed bytes.
pub const CHECKSUM_OFFSET: usize = 35;

const PREFS_OFFSET: usize = QUIZ_ID_LEN;
const FAVORITE_OFFSET: usize = PREFS_OFFSET + PACKED_LEN;
const HATED_OFFSET: usize = FAVORITE_OFFSET + 1;
const TIMESTAMP_OFFSET: usize = HATED_OFFSET + 1;

/// A finished quiz as carried on the wire.
///
/// The one-byte index fields and second-granularity timestamp reflect the
/// wire format's width; wider values are truncated before they get here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    /// Short quiz identifier. Only the first 8 UTF-8 bytes survive framing.
    pub quiz_id: String,
    /// Packed preference buffer (see the `prefs` crate).
    pub preferences: [u8; PACKED_LEN],
    /// Index of the item the user swiped up on last.
    pub favorite_index: u8,
    /// Index of the item the user swiped down on last.
    pub hated_index: u8,
    /// Completion time in milliseconds since the epoch. Framing keeps
    /// whole seconds only.
    pub completed_at_ms: u64,
}

/// Builds the 37-byte frame for a quiz result.
///
/// The quiz id is truncated or NUL-padded to exactly 8 bytes, the timestamp
/// is truncated to whole seconds, and the CRC-16 of the first 35 bytes is
/// appended big-endian.
#[must_use]
pub fn encode_frame(result: &QuizResult) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];

    let id_bytes = result.quiz_id.as_bytes();
    let id_len = id_bytes.len().min(QUIZ_ID_LEN);
    frame[..id_len].copy_from_slice(&id_bytes[..id_len]);

    frame[PREFS_OFFSET..PREFS_OFFSET + PACKED_LEN].copy_from_slice(&result.preferences);
    frame[FAVORITE_OFFSET] = result.favorite_index;
    frame[HATED_OFFSET] = result.hated_index;

    let seconds = (result.completed_at_ms / 1000) as u32;
    frame[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 4].copy_from_slice(&seconds.to_be_bytes());

    let checksum = crc16(&frame[..CHECKSUM_OFFSET]);
    frame[CHECKSUM_OFFSET..].copy_from_slice(&checksum.to_be_bytes());

    frame
}

/// Parses a 37-byte frame back into a quiz result.
///
/// # Errors
///
/// Returns [`WireError::InvalidPayloadLength`] unless `bytes` is exactly 37
/// bytes, and [`WireError::ChecksumMismatch`] when the stored checksum
/// disagrees with one recomputed over the first 35 bytes.
pub fn decode_frame(bytes: &[u8]) -> WireResult<QuizResult> {
    if bytes.len() != FRAME_LEN {
        return Err(WireError::InvalidPayloadLength {
            actual: bytes.len(),
        });
    }

    let id_bytes = &bytes[..QUIZ_ID_LEN];
    let id_end = id_bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |pos| pos + 1);
    let quiz_id = String::from_utf8_lossy(&id_bytes[..id_end]).into_owned();

    let mut preferences = [0u8; PACKED_LEN];
    preferences.copy_from_slice(&bytes[PREFS_OFFSET..PREFS_OFFSET + PACKED_LEN]);

    let favorite_index = bytes[FAVORITE_OFFSET];
    let hated_index = bytes[HATED_OFFSET];

    let seconds = u32::from_be_bytes(
        bytes[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 4]
            .try_into()
            .unwrap(),
    );

    let stored = u16::from_be_bytes(bytes[CHECKSUM_OFFSET..].try_into().unwrap());
    let computed = crc16(&bytes[..CHECKSUM_OFFSET]);
    if stored != computed {
        return Err(WireError::ChecksumMismatch { stored, computed });
    }

    Ok(QuizResult {
        quiz_id,
        preferences,
        favorite_index,
        hated_index,
        completed_at_ms: u64::from(seconds) * 1000,
    })
}
