use bitfield_struct::bitfield;

use crate::CrcLength;

#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    /// Reserved bit and the three IRQ mask bits.
    ///
    /// All IRQ events stay reflected on the IRQ pin.
    #[bits(4)]
    _padding: u8,

    #[bits(2, access = None, default = 2)]
    pub crc_length: u8,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits())
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_val = self.into_bits() & !CrcLength::MASK | length.into_bits();
        Self::from_bits(new_val)
    }

    pub fn as_rx(self) -> Self {
        Self::from_bits(self.into_bits() | 1)
    }

    pub fn as_tx(self) -> Self {
        Self::from_bits(self.into_bits() & !1)
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::CrcLength;

    #[test]
    fn defaults() {
        let config = Config::default();
        // 8 bit CRC, powered down, PRIM_TX
        assert_eq!(config.into_bits(), 8);
        assert_eq!(config.crc_length(), CrcLength::Bit8);
        assert!(!config.power());
        assert!(!config.is_rx());
    }

    #[test]
    fn crc_bits_only() {
        let config = Config::default().with_power(true).as_rx();
        for crc in [CrcLength::Disabled, CrcLength::Bit16, CrcLength::Bit8] {
            let changed = config.with_crc_length(crc);
            assert_eq!(changed.crc_length(), crc);
            assert!(changed.power());
            assert!(changed.is_rx());
        }
        assert!(!config.as_tx().is_rx());
    }
}
