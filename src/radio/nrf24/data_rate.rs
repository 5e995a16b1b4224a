use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::radio::{prelude::EsbDataRate, Nrf24Error, Nrf24l01};
use crate::{DataRate, Mode};

impl<SPI, DO, DELAY> EsbDataRate for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let da_bin = self.get_register(registers::RF_SETUP)? & DataRate::MASK;
        if da_bin == DataRate::MASK {
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(DataRate::from_bits(da_bin))
    }

    /// In [`Mode::Beacon`], the radio stays at 1 Mbps and `data_rate` is only
    /// remembered for [`Nrf24l01::set_transceiver_mode()`].
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        if self._mode == Mode::Beacon {
            self._data_rate = data_rate;
            return Ok(());
        }
        let rf_setup = self.get_register(registers::RF_SETUP)?;
        self.set_register(
            registers::RF_SETUP,
            rf_setup & !DataRate::MASK | data_rate.into_bits(),
        )?;
        self._data_rate = data_rate;
        Ok(())
    }
}
