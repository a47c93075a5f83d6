//! WiFi link metrics read through the wireless extension ioctls.
//!
//! Each query opens its own control socket and closes it before returning.

pub mod channel;
pub mod quality;

pub use self::channel::{
    channel_to_frequency, frequency_to_channel, map_2400mhz, map_5000mhz, WiFiBand,
    BAND_5000_CHANNELS,
};
pub use self::quality::{decode_rssi, LevelEncoding, WirelessQuality};

#[cfg(target_os = "linux")]
use crate::error::Result;
#[cfg(target_os = "linux")]
use crate::os::linux::wireless as sys;

/// Current channel number of a WiFi interface, derived from `SIOCGIWFREQ`.
///
/// Fails with `InvalidIntegerValue` if the reported frequency exceeds
/// 65535 MHz.
#[cfg(target_os = "linux")]
pub fn get_channel_number(if_name: &str) -> Result<u16> {
    sys::get_channel_number(if_name)
}

/// Received signal strength in dBm.
///
/// No value is produced when the driver marks the level invalid.
#[cfg(target_os = "linux")]
pub fn get_rssi(if_name: &str) -> Result<i8> {
    sys::get_rssi(if_name)
}

/// Missed beacon counter from the interface statistics.
#[cfg(target_os = "linux")]
pub fn get_beacon_lost_count(if_name: &str) -> Result<u32> {
    sys::get_beacon_lost_count(if_name)
}

/// Current bit rate of the link in bits per second.
#[cfg(target_os = "linux")]
pub fn get_current_max_rate(if_name: &str) -> Result<u64> {
    sys::get_current_max_rate(if_name)
}
