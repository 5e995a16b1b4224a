use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::{
    radio::{prelude::EsbPipe, Nrf24Error, Nrf24l01},
    Address, Mode, RadioState,
};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Write an RX address while the CE pin is inactive.
    ///
    /// The CE pin is reactivated afterward only if the radio was receiving.
    fn write_rx_address(
        &mut self,
        reg: u8,
        address: &Address,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let listening = self._state == RadioState::Receiving;
        if listening {
            self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        }
        self.write_register(reg, address)?;
        if listening {
            self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        }
        Ok(())
    }

    fn read_address(&mut self, reg: u8) -> Result<Address, Nrf24Error<SPI::Error, DO::Error>> {
        let mut address = [0u8; 5];
        self.read_register(reg, &mut address)?;
        Ok(address)
    }
}

impl<SPI, DO, DELAY> EsbPipe for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In [`Mode::Beacon`], the address is only remembered for
    /// [`Nrf24l01::set_transceiver_mode()`]. The same applies to the
    /// destination and broadcast addresses.
    fn set_source_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType> {
        if self._mode == Mode::Beacon {
            self._local_address = *address;
            return Ok(());
        }
        self.write_rx_address(registers::RX_ADDR_P0, address)?;
        self._local_address = *address;
        Ok(())
    }

    fn get_source_address(&mut self) -> Result<Address, Self::PipeErrorType> {
        self.read_address(registers::RX_ADDR_P0)
    }

    fn set_destination_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType> {
        if self._mode == Mode::Beacon {
            self._destination_address = *address;
            return Ok(());
        }
        self.write_register(registers::TX_ADDR, address)?;
        self._destination_address = *address;
        Ok(())
    }

    fn get_destination_address(&mut self) -> Result<Address, Self::PipeErrorType> {
        self.read_address(registers::TX_ADDR)
    }

    fn set_broadcast_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType> {
        if self._mode == Mode::Beacon {
            self._broadcast_address = *address;
            return Ok(());
        }
        self.write_rx_address(registers::RX_ADDR_P1, address)?;
        self._broadcast_address = *address;
        Ok(())
    }

    fn get_broadcast_address(&mut self) -> Result<Address, Self::PipeErrorType> {
        self.read_address(registers::RX_ADDR_P1)
    }
}
