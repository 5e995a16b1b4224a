use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::{
    radio::{prelude::EsbPayloadLength, Nrf24Error, Nrf24l01},
    Mode,
};

impl<SPI, DO, DELAY> EsbPayloadLength for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::PayloadLengthErrorType> {
        if !(1..=32).contains(&length) {
            return Err(Nrf24Error::InvalidArgument);
        }
        // beacon packets use their own length
        if self._mode == Mode::Beacon {
            self._payload_length = length;
            return Ok(());
        }
        self.set_register(registers::RX_PW_P0, length)?;
        self.set_register(registers::RX_PW_P1, length)?;
        self._payload_length = length;
        Ok(())
    }

    fn get_payload_length(&self) -> u8 {
        self._payload_length
    }
}
