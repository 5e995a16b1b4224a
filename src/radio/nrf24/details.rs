use super::{Nrf24Error, Nrf24l01};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(feature = "defmt", feature = "std"))]
use super::{mnemonics, registers};
#[cfg(any(feature = "defmt", feature = "std"))]
use crate::radio::prelude::{
    EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbPaLevel, EsbPayloadLength, EsbPipe, EsbPower,
};

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO, DELAY> EsbDetails for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        defmt::println!("Operating mode____________{}", self._mode);
        defmt::println!("Radio state_______________{}", self._state);

        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );

        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("RF Power Amplifier________{}", self.get_pa_level()?);

        let rf_setup = self.get_register(registers::RF_SETUP)?;
        defmt::println!(
            "RF LNA enabled____________{=bool}",
            rf_setup & mnemonics::LNA_HCURR > 0
        );

        defmt::println!("CRC Length________________{}", self.get_crc_length()?);
        defmt::println!(
            "Payload length____________{=u8} bytes",
            self.get_payload_length()
        );

        let observer = self.get_register(registers::OBSERVE_TX)?;
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            observer >> 4
        );

        defmt::println!("    Data Ready triggered__{=bool}", self._status.rx_dr());
        defmt::println!("    Data Sent triggered___{=bool}", self._status.tx_ds());
        defmt::println!("    Data Fail triggered___{=bool}", self._status.max_rt());

        let fifo = self.get_fifo_state(true)?;
        defmt::println!("TX FIFO___________________{}", fifo);
        let fifo = self.get_fifo_state(false)?;
        defmt::println!("RX FIFO___________________{}", fifo);

        let en_aa = self.get_register(registers::EN_AA)?;
        defmt::println!("Auto Acknowledgment_______0b{=0..8}", en_aa);
        let dynpd = self.get_register(registers::DYNPD)?;
        defmt::println!("Dynamic Payloads__________0b{=0..8}", dynpd);

        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if self.is_rx() { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", self.is_powered());

        defmt::println!(
            "TX address________________{=[u8; 5]:02X}",
            self.get_destination_address()?
        );
        defmt::println!(
            "Pipe 0 (source) bound to__{=[u8; 5]:02X}",
            self.get_source_address()?
        );
        defmt::println!(
            "Pipe 1 (broadcast) bound to{=[u8; 5]:02X}",
            self.get_broadcast_address()?
        );
        defmt::println!("Beacon MAC address________{=[u8; 6]:02X}", self.mac_address);
        Ok(())
    }

    #[cfg(not(any(all(feature = "defmt", target_os = "none"), feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(all(feature = "defmt", target_os = "none")))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        std::println!("Operating mode____________{}", self._mode);
        std::println!("Radio state_______________{}", self._state);

        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );

        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("RF Power Amplifier________{}", self.get_pa_level()?);

        let rf_setup = self.get_register(registers::RF_SETUP)?;
        std::println!(
            "RF LNA enabled____________{}",
            rf_setup & mnemonics::LNA_HCURR > 0
        );

        std::println!("CRC Length________________{}", self.get_crc_length()?);
        std::println!(
            "Payload length____________{} bytes",
            self.get_payload_length()
        );

        let observer = self.get_register(registers::OBSERVE_TX)?;
        std::println!("Packets lost\n    on current channel____{}", observer >> 4);

        std::println!("    Data Ready triggered__{}", self._status.rx_dr());
        std::println!("    Data Sent triggered___{}", self._status.tx_ds());
        std::println!("    Data Fail triggered___{}", self._status.max_rt());

        let fifo = self.get_fifo_state(true)?;
        std::println!("TX FIFO___________________{}", fifo);
        let fifo = self.get_fifo_state(false)?;
        std::println!("RX FIFO___________________{}", fifo);

        let en_aa = self.get_register(registers::EN_AA)?;
        std::println!("Auto Acknowledgment_______{:#010b}", en_aa);
        let dynpd = self.get_register(registers::DYNPD)?;
        std::println!("Dynamic Payloads__________{:#010b}", dynpd);

        std::println!(
            "Primary Mode______________{}X",
            if self.is_rx() { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", self.is_powered());

        std::println!(
            "TX address________________{:02X?}",
            self.get_destination_address()?
        );
        std::println!(
            "Pipe 0 (source) bound to__{:02X?}",
            self.get_source_address()?
        );
        std::println!(
            "Pipe 1 (broadcast) bound to{:02X?}",
            self.get_broadcast_address()?
        );
        std::println!("Beacon MAC address________{:02X?}", self.mac_address);
        Ok(())
    }
}
