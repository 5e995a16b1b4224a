use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, Nrf24l01},
    types::StatusFlags,
};

use super::{commands, registers};

impl<SPI, DO, DELAY> EsbStatus for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.set_register(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.send_command(commands::NOP)
    }

    fn get_status_flags(&self) -> StatusFlags {
        self._status
    }
}
