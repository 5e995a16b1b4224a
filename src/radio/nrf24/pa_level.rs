use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::radio::{prelude::EsbPaLevel, Nrf24Error, Nrf24l01};
use crate::PaLevel;

impl<SPI, DO, DELAY> EsbPaLevel for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        let rf_setup = self.get_register(registers::RF_SETUP)?;
        Ok(PaLevel::from_bits(rf_setup))
    }

    /// Unlike the other settings, this also takes effect immediately while beaconing.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let rf_setup = self.get_register(registers::RF_SETUP)?;
        self.set_register(
            registers::RF_SETUP,
            rf_setup & !PaLevel::MASK | pa_level.into_bits(),
        )?;
        self._pa_level = pa_level;
        Ok(())
    }
}
