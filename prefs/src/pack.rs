//! Packing and unpacking of preference buffers.
//!
//! Each item takes 2 bits, packed MSB-first: item `i` lives in byte
//! `i * 2 / 8`, shifted left by `6 - (i * 2 % 8)`. Four items per byte,
//! so 81 items fill 20 bytes plus the top 2 bits of byte 20.

use crate::direction::{Direction, ITEM_COUNT, PACKED_LEN};
use crate::error::{PrefsError, PrefsResult};
use crate::map::PreferenceMap;

/// Packs all 81 preferences into a fixed 21-byte buffer.
///
/// Unanswered items encode as [`Direction::Left`]. The output length never
/// varies, regardless of how many preferences were recorded.
#[must_use]
pub fn encode_preferences(map: &PreferenceMap) -> [u8; PACKED_LEN] {
    let mut buffer = [0u8; PACKED_LEN];

    for index in 0..ITEM_COUNT {
        let bits = map.get(index).unwrap_or_default().to_bits();
        let byte_index = index * 2 / 8;
        let bit_offset = index * 2 % 8;
        buffer[byte_index] |= bits << (6 - bit_offset);
    }

    buffer
}

/// Unpacks a buffer into a full 81-entry preference map.
///
/// # Errors
///
/// Returns [`PrefsError::BufferTooShort`] if `buffer` holds fewer than 21
/// bytes. Note that [`preference_at`] deliberately does *not* share this
/// check; see its docs.
pub fn decode_preferences(buffer: &[u8]) -> PrefsResult<PreferenceMap> {
    if buffer.len() < PACKED_LEN {
        return Err(PrefsError::BufferTooShort {
            actual: buffer.len(),
            required: PACKED_LEN,
        });
    }

    let mut map = PreferenceMap::new();
    for index in 0..ITEM_COUNT {
        map.insert(index, extract(buffer, index));
    }
    Ok(map)
}

/// Random-access decode of a single item's preference.
///
/// Unlike [`decode_preferences`], a buffer too short to contain the item is
/// not an error: the answer falls back to [`Direction::Left`]. Comparison
/// walks buffers through this lenient path, so the asymmetry is part of the
/// wire contract and must not be unified with the strict whole-buffer check.
#[must_use]
pub fn preference_at(buffer: &[u8], index: usize) -> Direction {
    if index * 2 / 8 >= buffer.len() {
        return Direction::Left;
    }
    extract(buffer, index)
}

fn extract(buffer: &[u8], index: usize) -> Direction {
    let byte_index = index * 2 / 8;
    let bit_offset = index * 2 % 8;
    let bits = (buffer[byte_index] >> (6 - bit_offset)) & 0b11;
    // A 2-bit mask always yields a valid code.
    Direction::from_bits(bits).unwrap_or_default()
}
