//! WiFi channel and frequency conversion.
//!
//! All frequencies are in MHz. A return value of `0` means the input has no
//! mapping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// WiFi frequency band
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WiFiBand {
    /// 2.4 GHz band, channels 1 to 14
    Band2_4GHz,
    /// 5 GHz band, including the 4.9 GHz public safety channels
    Band5GHz,
}

const BAND_2400_BASE_MHZ: u16 = 2407;
const BAND_2400_FIRST_MHZ: u16 = 2412;
const CHANNEL_14_MHZ: u16 = 2484;

/// Channel to center frequency for the 5 GHz band plan.
///
/// The regulatory channel spacing is not uniform, so this is a table rather
/// than a formula.
pub const BAND_5000_CHANNELS: [(u8, u16); 42] = [
    (183, 4915),
    (184, 4920),
    (185, 4925),
    (187, 4935),
    (188, 4940),
    (189, 4945),
    (192, 4960),
    (196, 4980),
    (7, 5035),
    (8, 5040),
    (9, 5045),
    (11, 5055),
    (12, 5060),
    (16, 5080),
    (34, 5170),
    (36, 5180),
    (38, 5190),
    (40, 5200),
    (42, 5210),
    (44, 5220),
    (46, 5230),
    (48, 5240),
    (52, 5260),
    (56, 5280),
    (60, 5300),
    (64, 5320),
    (100, 5500),
    (104, 5520),
    (108, 5540),
    (112, 5560),
    (116, 5580),
    (120, 5600),
    (124, 5620),
    (128, 5640),
    (132, 5660),
    (136, 5680),
    (140, 5700),
    (149, 5745),
    (153, 5765),
    (157, 5785),
    (161, 5805),
    (165, 5825),
];

/// Maps a channel in the given band to its center frequency.
pub fn channel_to_frequency(band: WiFiBand, channel: u8) -> u16 {
    match band {
        WiFiBand::Band2_4GHz => map_2400mhz(channel),
        WiFiBand::Band5GHz => map_5000mhz(channel),
    }
}

/// 2.4 GHz channel to frequency. Channels 1-13 are 5 MHz apart, 14 is fixed.
pub fn map_2400mhz(channel: u8) -> u16 {
    match channel {
        1..=13 => BAND_2400_FIRST_MHZ + (channel as u16 - 1) * 5,
        14 => CHANNEL_14_MHZ,
        _ => 0,
    }
}

/// 5 GHz channel to frequency via the band plan table.
pub fn map_5000mhz(channel: u8) -> u16 {
    BAND_5000_CHANNELS
        .iter()
        .find(|(ch, _)| *ch == channel)
        .map(|(_, freq)| *freq)
        .unwrap_or(0)
}

/// Maps a center frequency to a channel number.
///
/// Only the 2.4 GHz band is decoded exactly. Above 2484 MHz the generic
/// `freq / 5 - 1000` rule is applied without consulting the 5 GHz table, and
/// the result is narrowed to 8 bits with wrap-around, so it does not always
/// agree with [`map_5000mhz`] (4.9 GHz channels in particular).
pub fn frequency_to_channel(frequency: u16) -> u8 {
    if frequency < BAND_2400_FIRST_MHZ {
        return 0;
    }
    if frequency < CHANNEL_14_MHZ {
        return ((frequency - BAND_2400_BASE_MHZ) / 5) as u8;
    }
    if frequency == CHANNEL_14_MHZ {
        return 14;
    }
    (i32::from(frequency / 5) - 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2400_round_trip() {
        for channel in 1..=14u8 {
            let freq = channel_to_frequency(WiFiBand::Band2_4GHz, channel);
            assert_ne!(freq, 0);
            assert_eq!(frequency_to_channel(freq), channel);
        }
        assert_eq!(map_2400mhz(1), 2412);
        assert_eq!(map_2400mhz(6), 2437);
        assert_eq!(map_2400mhz(13), 2472);
        assert_eq!(map_2400mhz(14), 2484);
    }

    #[test]
    fn test_2400_out_of_band() {
        assert_eq!(map_2400mhz(0), 0);
        assert_eq!(map_2400mhz(15), 0);
        assert_eq!(map_2400mhz(36), 0);
    }

    #[test]
    fn test_5000_table() {
        for (channel, freq) in BAND_5000_CHANNELS.iter() {
            assert_eq!(channel_to_frequency(WiFiBand::Band5GHz, *channel), *freq);
        }
        assert_eq!(map_5000mhz(165), 5825);
        assert_eq!(map_5000mhz(36), 5180);
        assert_eq!(map_5000mhz(183), 4915);
    }

    #[test]
    fn test_5000_unlisted() {
        for channel in [0u8, 1, 6, 14, 35, 144, 166, 200, 255] {
            assert_eq!(map_5000mhz(channel), 0, "channel {}", channel);
        }
    }

    #[test]
    fn test_frequency_to_channel_bounds() {
        assert_eq!(frequency_to_channel(2484), 14);
        assert_eq!(frequency_to_channel(2412), 1);
        assert_eq!(frequency_to_channel(2400), 0);
        assert_eq!(frequency_to_channel(0), 0);
    }

    #[test]
    fn test_frequency_to_channel_5000_formula() {
        assert_eq!(frequency_to_channel(5180), 36);
        assert_eq!(frequency_to_channel(5825), 165);
        assert_eq!(frequency_to_channel(5035), 7);
        // The generic formula disagrees with the table for 4.9 GHz channels.
        assert_eq!(frequency_to_channel(4915), 239);
        assert_ne!(map_5000mhz(frequency_to_channel(4915)), 4915);
    }
}
