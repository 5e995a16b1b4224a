//! A module that holds functions related to manipulating data in accordance with BLE specs.

/// Reverse the bit order of a single byte.
///
/// ```
/// use nrf24l01::ble::data_manipulation::swap_bits;
///
/// assert_eq!(swap_bits(0x01), 0x80);
/// assert_eq!(swap_bits(0xC4), 0x23);
/// ```
pub const fn swap_bits(byte: u8) -> u8 {
    byte.reverse_bits()
}

/// Reverse the bit order for each byte in the given `buf`.
///
/// This does not alter the buffer's Endianness.
pub fn reverse_bits(buf: &mut [u8]) {
    for byte in buf {
        *byte = swap_bits(*byte);
    }
}

/// Whiten or de-whiten the given `buf` using the given `coefficient`.
///
/// This is used to avoid transmitting long consecutive repetitions of `0`s and `1`s.
/// The given `coefficient` shall be the BLE channel index (37, 38 or 39) of the
/// radio channel that transmits the data, OR-ed with `0x40`.
/// See [`BleChannels::whitening_coefficient()`](fn@crate::ble::BleChannels::whitening_coefficient).
///
/// Whitening twice with the same `coefficient` restores the original data.
pub fn whiten(buf: &mut [u8], coefficient: u8) {
    // 7 bit LFSR (x^7 + x^4 + 1), bit 0 is the output
    let mut lfsr = coefficient & 0x7F;
    for byte in buf {
        let mut key = 0u8;
        for bit in 0..8u8 {
            let out = lfsr & 1;
            lfsr >>= 1;
            if out == 1 {
                lfsr ^= 0x44;
                key |= 1 << bit;
            }
        }
        *byte ^= key;
    }
}

/// The BLE CRC polynomial `x^24 + x^10 + x^9 + x^6 + x^4 + x^3 + x + 1`, without the `x^24` term.
const CRC_POLYNOMIAL: u32 = 0x00065B;

/// The CRC's initial value on advertising channels.
const CRC_INIT: u32 = 0x555555;

/// Calculate a 24 bit CRC checksum for the given `data`.
///
/// Input bits are consumed least significant bit first.
/// The returned bytes are in transmission order, so they shall be appended
/// to the transmitted payload *before* applying [`whiten()`] and [`reverse_bits()`].
pub fn crc24_ble(data: &[u8]) -> [u8; 3] {
    let mut crc = CRC_INIT;
    for byte in data {
        for bit in 0..8u8 {
            let feedback = ((crc >> 23) as u8 ^ (*byte >> bit)) & 1;
            crc = (crc << 1) & 0xFF_FFFF;
            if feedback == 1 {
                crc ^= CRC_POLYNOMIAL;
            }
        }
    }
    // the most significant bit goes out first
    [
        swap_bits((crc >> 16) as u8),
        swap_bits((crc >> 8) as u8),
        swap_bits(crc as u8),
    ]
}
