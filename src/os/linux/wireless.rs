use std::mem;

use libc::c_ulong;
use tracing::{debug, error};

use super::binding::{
    iw_point, iw_statistics, iwreq, IW_STATS_CLEAR_UPDATED, SIOCGIWFREQ, SIOCGIWRATE, SIOCGIWSTATS,
};
use super::socket::{ifname_buf, ControlSocket, OpenSocket};
use crate::error::{Error, Result};
use crate::wireless::channel::frequency_to_channel;
use crate::wireless::quality::{decode_rssi, frequency_mhz, WirelessQuality};

fn get_wifi_parameter(if_name: &str, request: c_ulong, open: OpenSocket) -> Result<iwreq> {
    let mut wrq: iwreq = unsafe { mem::zeroed() };
    wrq.ifr_name = ifname_buf(if_name)?;
    let sock = open()?;
    let res = unsafe { sock.ioctl(request, &mut wrq) };
    res.map_err(|err| Error::ReadFailed(format!("ioctl({:#06x}): {}", request, err)))?;
    Ok(wrq)
}

fn get_wifi_stats(if_name: &str, open: OpenSocket) -> Result<iw_statistics> {
    let mut stats = iw_statistics::default();
    let mut wrq: iwreq = unsafe { mem::zeroed() };
    wrq.ifr_name = ifname_buf(if_name)?;
    wrq.u.data = iw_point {
        pointer: &mut stats as *mut iw_statistics as *mut libc::c_void,
        length: mem::size_of::<iw_statistics>() as u16,
        flags: IW_STATS_CLEAR_UPDATED,
    };
    let sock = open()?;
    let res = unsafe { sock.ioctl(SIOCGIWSTATS, &mut wrq) };
    res.map_err(|err| Error::ReadFailed(format!("ioctl(SIOCGIWSTATS): {}", err)))?;
    Ok(stats)
}

pub(crate) fn get_channel_number(if_name: &str) -> Result<u16> {
    let wrq = get_wifi_parameter(if_name, SIOCGIWFREQ, ControlSocket::open).map_err(|err| {
        error!("Failed to get channel/frequency (Hz) for {}: {}", if_name, err);
        err
    })?;
    let freq = unsafe { wrq.u.freq };
    let mhz = frequency_mhz(freq.m, freq.e).map_err(|err| {
        error!("Frequency of {} out of range: {}", if_name, err);
        err
    })?;
    let channel = frequency_to_channel(mhz) as u16;
    debug!("{}: {} MHz, channel {}", if_name, mhz, channel);
    Ok(channel)
}

pub(crate) fn get_rssi(if_name: &str) -> Result<i8> {
    let stats = get_wifi_stats(if_name, ControlSocket::open).map_err(|err| {
        error!("Failed to get wireless stats for {}: {}", if_name, err);
        err
    })?;
    let quality = WirelessQuality {
        qual: stats.qual.qual,
        level: stats.qual.level,
        noise: stats.qual.noise,
        updated: stats.qual.updated,
    };
    decode_rssi(&quality).map_err(|err| {
        error!("Failed to decode signal level for {}: {}", if_name, err);
        err
    })
}

pub(crate) fn get_beacon_lost_count(if_name: &str) -> Result<u32> {
    let stats = get_wifi_stats(if_name, ControlSocket::open).map_err(|err| {
        error!("Failed to get wireless stats for {}: {}", if_name, err);
        err
    })?;
    Ok(stats.miss.beacon)
}

pub(crate) fn get_current_max_rate(if_name: &str) -> Result<u64> {
    let wrq = get_wifi_parameter(if_name, SIOCGIWRATE, ControlSocket::open).map_err(|err| {
        error!("Failed to get bit rate for {}: {}", if_name, err);
        err
    })?;
    let bitrate = unsafe { wrq.u.bitrate };
    u64::try_from(bitrate.value)
        .map_err(|_| Error::InvalidIntegerValue(format!("bit rate {}", bitrate.value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::os::linux::socket::refuse_open;

    // The loopback device has no wireless extensions.
    #[test]
    fn test_loopback_has_no_wireless() {
        assert_eq!(get_channel_number("lo").unwrap_err().kind(), ErrorKind::ReadFailed);
        assert_eq!(get_rssi("lo").unwrap_err().kind(), ErrorKind::ReadFailed);
        assert_eq!(
            get_beacon_lost_count("lo").unwrap_err().kind(),
            ErrorKind::ReadFailed
        );
        assert_eq!(
            get_current_max_rate("lo").unwrap_err().kind(),
            ErrorKind::ReadFailed
        );
    }

    #[test]
    fn test_name_too_long() {
        let err = get_rssi("wlan-name-too-long0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_name_checked_before_socket() {
        let long_name = "wlan-name-too-long0";
        let err = get_wifi_parameter(long_name, SIOCGIWFREQ, refuse_open).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = get_wifi_stats(long_name, refuse_open).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = get_wifi_stats("wlan\0", refuse_open).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // a valid name reaches the socket
        let err = get_wifi_parameter("wlan0", SIOCGIWRATE, refuse_open).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OpenFailed);
    }
}
