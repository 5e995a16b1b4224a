use super::{commands, Nrf24Error, Nrf24l01};
use crate::{
    log,
    radio::{
        prelude::{EsbFifo, EsbPower, EsbRadio, EsbStatus},
        DataReceivedHandler,
    },
    Mode, RadioState, StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Put `buf` in the TX FIFO (as is) and activate the CE pin.
    ///
    /// The radio is switched to TX mode first if it is powered down or listening.
    pub(super) fn upload_payload(
        &mut self,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if self._config_reg.is_rx() || !self._config_reg.power() {
            self.tx_power_up()?;
        }
        self.clear_status_flags(StatusFlags::from_bits(StatusFlags::TX_DONE_MASK))?;
        self.spi_write_buf(commands::W_TX_PAYLOAD, buf)?;
        self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._tx_pending = true;
        self._state = RadioState::Transmitting;
        Ok(())
    }

    /// Blocking transmission of `buf` (as is).
    ///
    /// The STATUS byte is polled at most [`Nrf24l01::tx_timeout`] times.
    pub(super) fn transmit(
        &mut self,
        buf: &[u8],
    ) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.upload_payload(buf)?;
        // CE must be active for at least 10 microseconds
        self._delay_impl.delay_us(10);
        for _ in 0..self.tx_timeout {
            self.update()?;
            if self._status.tx_done() {
                let sent = self._status.tx_ds();
                self.end_transmission()?;
                self.flush_tx()?;
                return Ok(sent);
            }
            self._delay_impl.delay_us(10);
        }
        // the payload stays in the TX FIFO
        self.end_transmission()?;
        log::warning!("transmission timed out after {=u16} polls", self.tx_timeout);
        Err(Nrf24Error::TxTimeout)
    }

    fn end_transmission(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._tx_pending = false;
        self._state = RadioState::Idle;
        Ok(())
    }

    /// Copy `buf` into a zero padded payload of the static payload length.
    fn pad_payload(&self, buf: &[u8]) -> Result<[u8; 32], Nrf24Error<SPI::Error, DO::Error>> {
        if buf.len() > self._payload_length as usize {
            return Err(Nrf24Error::InvalidArgument);
        }
        let mut payload = [0u8; 32];
        payload[..buf.len()].copy_from_slice(buf);
        Ok(payload)
    }
}

impl<SPI, DO, DELAY> EsbRadio for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// See [`EsbRadio::send()`] for implementation-agnostic detail.
    ///
    /// In [`Mode::Beacon`], this is the same as [`Nrf24l01::send_beaconing_msg()`].
    ///
    /// Upon success, the TX FIFO is flushed and the CE pin is left inactive.
    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType> {
        if self._mode == Mode::Beacon {
            return self.send_beaconing_msg(buf);
        }
        let payload = self.pad_payload(buf)?;
        let len = self._payload_length as usize;
        self.transmit(&payload[..len])
    }

    /// See [`EsbRadio::send_tx_buffer()`] for implementation-agnostic detail.
    ///
    /// In [`Mode::Beacon`], the message is the content of [`Nrf24l01::tx_buffer`]
    /// up to (not including) the first NUL byte. A message longer than
    /// [`MAX_BEACON_MSG_LEN`](crate::ble::MAX_BEACON_MSG_LEN) is rejected
    /// by [`Nrf24l01::send_beaconing_msg()`].
    fn send_tx_buffer(&mut self) -> Result<bool, Self::RadioErrorType> {
        let payload = self.tx_buffer;
        if self._mode == Mode::Beacon {
            let len = payload
                .iter()
                .position(|byte| *byte == 0)
                .unwrap_or(payload.len());
            return self.send_beaconing_msg(&payload[..len]);
        }
        let len = self._payload_length as usize;
        self.send(&payload[..len])
    }

    /// See [`EsbRadio::write()`] for implementation-agnostic detail.
    ///
    /// <div class="warning">
    ///
    /// To transmit a payload the radio's CE pin must be active for at least 10 microseconds.
    /// The caller is required to wait that long before calling [`Nrf24l01::data_sending()`].
    ///
    /// </div>
    ///
    /// Beacon messages must be sent on 3 channels, so this returns
    /// [`Nrf24Error::WrongMode`] in [`Mode::Beacon`].
    fn write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        if self._mode == Mode::Beacon {
            return Err(Nrf24Error::WrongMode);
        }
        let payload = self.pad_payload(buf)?;
        let len = self._payload_length as usize;
        self.upload_payload(&payload[..len])
    }

    fn data_sending(&mut self) -> Result<bool, Self::RadioErrorType> {
        if !self._tx_pending {
            return Ok(false);
        }
        self.update()?;
        if self._status.tx_done() {
            self.end_transmission()?;
            return Ok(false);
        }
        Ok(true)
    }

    fn data_ready(&mut self) -> Result<bool, Self::RadioErrorType> {
        Ok(!self.rx_fifo_empty()?)
    }

    /// See [`EsbRadio::get_data()`] for implementation-agnostic detail.
    ///
    /// The RX_DR flag is cleared after the payload is fetched.
    fn get_data(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType> {
        let len = self._payload_length;
        if buf.len() < len as usize {
            return Err(Nrf24Error::InvalidArgument);
        }
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        buf[..len as usize].copy_from_slice(&self._buf[1..=len as usize]);
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        Ok(len)
    }

    fn poll_listener(&mut self) -> Result<bool, Self::RadioErrorType> {
        if !self.data_ready()? {
            return Ok(false);
        }
        let mut payload = [0u8; 32];
        let len = self.get_data(&mut payload)? as usize;
        self.rx_buffer = payload;
        if let Some(handler) = self._handler {
            handler(&self.rx_buffer[..len]);
        }
        Ok(true)
    }

    fn set_data_received_handler(&mut self, handler: Option<DataReceivedHandler>) {
        self._handler = handler;
    }
}
