//! The fake BLE beaconing codec.
//!
//! The nRF24L01 cannot speak BLE, but its on-air format is close enough to a BLE
//! advertisement that a pre-encoded payload is accepted by BLE scanners when:
//!
//! - the radio uses 1 Mbps, no CRC, no auto-ack and a 4 byte address set to
//!   [`BLE_ADDRESS`] (see
//!   [`Nrf24l01::set_beaconing_mode()`](fn@crate::radio::Nrf24l01::set_beaconing_mode))
//! - the payload is transmitted on one of the 3 advertising channels in [`BLE_CHANNEL`]
//! - the payload carries its own CRC-24, is whitened for the channel in use, and each
//!   byte's bit order is reversed (BLE sends bytes LSB first, the nRF24L01 sends MSB first)
//!
//! The advertisement PDU built by [`build_pdu()`] has this layout:
//!
//! | offset | length | value |
//! |-------:|-------:|:------|
//! | 0 | 1 | [`PDU_HEADER`] (ADV_NONCONN_IND, random TX address) |
//! | 1 | 1 | length of the following PDU payload |
//! | 2 | 6 | advertiser MAC address |
//! | 8 | 3 | flags AD structure `[2, 1, 5]` |
//! | 11 | 2 | complete local name AD header `[len + 1, 0x08]` |
//! | 13 | `len` | message (at most [`MAX_BEACON_MSG_LEN`] bytes) |
//!
//! [`encode_packet()`] then appends the CRC and applies whitening and bit reversal.
pub mod data_manipulation;

use data_manipulation::{crc24_ble, reverse_bits, whiten};

/// The RF channels (on the nRF24L01) that map to the BLE advertising channels 37, 38 and 39.
pub const BLE_CHANNEL: [u8; 3] = [2, 26, 80];

/// The BLE advertising access address `0x8E89BED6` in the nRF24L01's bit order.
pub const BLE_ADDRESS: [u8; 4] = [0x71, 0x91, 0x7d, 0x6b];

/// The advertiser MAC address used by default.
pub const DEFAULT_MAC: [u8; 6] = [0xEF, 0xFF, 0xC0, 0xAA, 0x18, 0x00];

/// The first byte of every advertisement PDU.
pub const PDU_HEADER: u8 = 0x42;

/// The offset of the message in an advertisement PDU.
pub const BEACON_PAYLOAD_OFFSET: usize = 13;

/// The longest message that fits in a beacon.
pub const MAX_BEACON_MSG_LEN: usize = 16;

const PROFILE_FLAGS: [u8; 3] = [2, 1, 5];
const COMPLETE_LOCAL_NAME: u8 = 0x08;

/// A namespace of methods to manage the supported range of BLE channels.
pub struct BleChannels;

impl BleChannels {
    /// Get the index of [`BLE_CHANNEL`] for the given `channel`.
    ///
    /// Returns [`None`] if the given current `channel` is not in [`BLE_CHANNEL`].
    pub fn index_of(channel: u8) -> Option<usize> {
        for (index, ch) in BLE_CHANNEL.iter().enumerate() {
            if *ch == channel {
                return Some(index);
            }
        }
        None
    }

    /// Get the [`whiten()`] coefficient for the given RF `channel`.
    ///
    /// This is the BLE channel index (37 + index in [`BLE_CHANNEL`]) with bit 6 set.
    /// Returns [`None`] if the given `channel` is not in [`BLE_CHANNEL`].
    pub fn whitening_coefficient(channel: u8) -> Option<u8> {
        Self::index_of(channel).map(|index| (index as u8 + 37) | 0x40)
    }
}

/// Write an advertisement PDU for `msg` (sent from `mac`) into `buf`.
///
/// Returns the length of the PDU, or [`None`] if `msg` is longer than
/// [`MAX_BEACON_MSG_LEN`].
pub fn build_pdu(mac: &[u8; 6], msg: &[u8], buf: &mut [u8; 32]) -> Option<usize> {
    let len = msg.len();
    if len > MAX_BEACON_MSG_LEN {
        return None;
    }
    buf[0] = PDU_HEADER;
    // the payload size excludes the header, the size byte and the CRC
    buf[1] = (BEACON_PAYLOAD_OFFSET - 2 + len) as u8;
    buf[2..8].copy_from_slice(mac);
    buf[8..11].copy_from_slice(&PROFILE_FLAGS);
    buf[11] = len as u8 + 1;
    buf[12] = COMPLETE_LOCAL_NAME;
    buf[BEACON_PAYLOAD_OFFSET..BEACON_PAYLOAD_OFFSET + len].copy_from_slice(msg);
    Some(BEACON_PAYLOAD_OFFSET + len)
}

/// Turn the PDU in `buf[..pdu_len]` into the bytes the nRF24L01 transmits
/// on the RF `channel`.
///
/// The CRC is appended, then the PDU and CRC are whitened and bit reversed in place.
/// Returns the length of the encoded packet, or [`None`] if `channel` is not in
/// [`BLE_CHANNEL`] or the CRC does not fit in `buf`.
pub fn encode_packet(buf: &mut [u8; 32], pdu_len: usize, channel: u8) -> Option<usize> {
    let coefficient = BleChannels::whitening_coefficient(channel)?;
    let len = pdu_len + 3;
    if len > buf.len() {
        return None;
    }
    let crc = crc24_ble(&buf[..pdu_len]);
    buf[pdu_len..len].copy_from_slice(&crc);
    whiten(&mut buf[..len], coefficient);
    reverse_bits(&mut buf[..len]);
    Some(len)
}
