use super::{registers, Config, Nrf24Error, Nrf24l01};
use crate::{
    ble::{build_pdu, encode_packet, BLE_ADDRESS, BLE_CHANNEL, MAX_BEACON_MSG_LEN},
    log,
    radio::prelude::{EsbFifo, EsbInit, EsbStatus},
    CrcLength, DataRate, Mode, RadioState, StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Reconfigure the radio to transmit fake BLE advertisements.
    ///
    /// This disables the radio's CRC and auto-ack features, uses 1 Mbps,
    /// and uses a 4 byte [`BLE_ADDRESS`] for TX and pipe 0.
    /// The radio is left powered up (as a primary transmitter) on RF channel 2.
    ///
    /// The transceiver settings (channel, data rate, addresses, etc) are remembered
    /// and restored by [`Nrf24l01::set_transceiver_mode()`].
    pub fn set_beaconing_mode(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._tx_pending = false;

        // BLE packets carry their own CRC
        self._config_reg = Config::default().with_crc_length(CrcLength::Disabled);
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;

        self.set_register(registers::EN_AA, 0)?;
        self.set_register(registers::EN_RXADDR, 1)?;
        // 4 byte addresses
        self.set_register(registers::SETUP_AW, 2)?;
        self.set_register(registers::SETUP_RETR, 0)?;

        let rf_setup = self.get_register(registers::RF_SETUP)?;
        self.set_register(
            registers::RF_SETUP,
            rf_setup & !DataRate::MASK | DataRate::Mbps1.into_bits(),
        )?;

        self.clear_status_flags(StatusFlags::new())?;
        self.flush_tx()?;
        self.set_register(registers::DYNPD, 0)?;
        self.set_register(registers::FEATURE, 0)?;
        self.set_register(registers::RX_PW_P0, 32)?;
        self.write_register(registers::TX_ADDR, &BLE_ADDRESS)?;
        self.write_register(registers::RX_ADDR_P0, &BLE_ADDRESS)?;
        self.set_register(registers::RF_CH, BLE_CHANNEL[0])?;

        self._config_reg = self._config_reg.with_power(true);
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;
        // Tpd2stby
        self._delay_impl.delay_us(5000);

        self._mode = Mode::Beacon;
        self._state = RadioState::Configured;
        log::debug!("radio switched to beaconing mode");
        Ok(())
    }

    /// Leave the beaconing mode.
    ///
    /// This rewrites every register with the transceiver settings
    /// (see [`EsbInit::configure()`]).
    pub fn set_transceiver_mode(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.configure()
    }

    /// Broadcast `msg` as the complete local name of a BLE advertisement
    /// on all 3 BLE advertising channels.
    ///
    /// The advertiser address is [`Nrf24l01::mac_address`].
    /// See [`ble`](mod@crate::ble) for the advertisement's layout.
    ///
    /// Returns `true` if all 3 transmissions completed.
    ///
    /// This returns [`Nrf24Error::InvalidArgument`] if `msg` is longer than
    /// [`MAX_BEACON_MSG_LEN`] and [`Nrf24Error::WrongMode`] if
    /// [`Nrf24l01::set_beaconing_mode()`] was not called.
    /// Neither error causes any SPI transaction.
    pub fn send_beaconing_msg(
        &mut self,
        msg: &[u8],
    ) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        if msg.len() > MAX_BEACON_MSG_LEN {
            return Err(Nrf24Error::InvalidArgument);
        }
        if self._mode != Mode::Beacon {
            return Err(Nrf24Error::WrongMode);
        }
        let mac = self.mac_address;
        let mut sent = true;
        for channel in BLE_CHANNEL {
            self.set_register(registers::RF_CH, channel)?;
            let pdu_len =
                build_pdu(&mac, msg, &mut self._ble_buf).ok_or(Nrf24Error::InvalidArgument)?;
            let len = encode_packet(&mut self._ble_buf, pdu_len, channel)
                .ok_or(Nrf24Error::InvalidArgument)?;
            let packet = self._ble_buf;
            sent &= self.transmit(&packet[..len])?;
        }
        Ok(sent)
    }
}
