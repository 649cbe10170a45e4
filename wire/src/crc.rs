//! CRC-16 checksum over frame bytes.

/// Initial register value.
const INIT: u16 = 0xFFFF;

/// Generator polynomial (x^16 + x^12 + x^5 + 1).
const POLY: u16 = 0x1021;

/// Computes the CRC-16 of a byte sequence.
///
/// CCITT variant: register starts at `0xFFFF`, bytes are folded into the
/// top 8 bits, MSB-first shifting, no reflection, no final XOR. Stateless;
/// `crc16(&[])` is the untouched initial register, `0xFFFF`.
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = INIT;

    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}
