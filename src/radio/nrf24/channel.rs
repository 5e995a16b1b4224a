use super::{mnemonics, registers};
use crate::{
    radio::{prelude::EsbChannel, Nrf24Error, Nrf24l01},
    Mode,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbChannel for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The nRF24L01 support 126 channels. The specified `channel` is
    /// clamped to the range [0, 125].
    ///
    /// The reserved bit of the RF_CH register is preserved.
    ///
    /// In [`Mode::Beacon`], the channel is only remembered for
    /// [`Nrf24l01::set_transceiver_mode()`].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        let channel = channel.min(125);
        if self._mode == Mode::Beacon {
            self._channel = channel;
            return Ok(());
        }
        let rf_ch = self.get_register(registers::RF_CH)?;
        self.set_register(
            registers::RF_CH,
            rf_ch & mnemonics::RF_CH_RESERVED | channel,
        )?;
        self._channel = channel;
        Ok(())
    }

    /// See also [`Nrf24l01::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        Ok(self.get_register(registers::RF_CH)? & !mnemonics::RF_CH_RESERVED)
    }
}
