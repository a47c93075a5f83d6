#![allow(non_camel_case_types)]

//! Kernel ABI from `linux/wireless.h` and `linux/ethtool.h` that `libc`
//! does not export.

use libc::{c_char, c_ulong, c_void};

pub const IFNAMSIZ: usize = libc::IFNAMSIZ;

// wireless extension requests
pub const SIOCGIWNAME: c_ulong = 0x8B01;
pub const SIOCGIWFREQ: c_ulong = 0x8B05;
pub const SIOCGIWSTATS: c_ulong = 0x8B0F;
pub const SIOCGIWRATE: c_ulong = 0x8B21;

pub const SIOCETHTOOL: c_ulong = 0x8946;
pub const ETHTOOL_GSET: u32 = 0x0000_0001;

/// Set in `iw_point.flags` to clear the driver's updated flags on read
pub const IW_STATS_CLEAR_UPDATED: u16 = 1;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct iw_param {
    pub value: i32,
    pub fixed: u8,
    pub disabled: u8,
    pub flags: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct iw_point {
    pub pointer: *mut c_void,
    pub length: u16,
    pub flags: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct iw_freq {
    pub m: i32,
    pub e: i16,
    pub i: u8,
    pub flags: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct iw_quality {
    pub qual: u8,
    pub level: u8,
    pub noise: u8,
    pub updated: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct iw_discarded {
    pub nwid: u32,
    pub code: u32,
    pub fragment: u32,
    pub retries: u32,
    pub misc: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct iw_missed {
    pub beacon: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct iw_statistics {
    pub status: u16,
    pub qual: iw_quality,
    pub discard: iw_discarded,
    pub miss: iw_missed,
}

/// Subset of `union iwreq_data` used by the readers. `name` keeps the union
/// at its full 16 byte size.
#[repr(C)]
#[derive(Clone, Copy)]
pub union iwreq_data {
    pub name: [c_char; IFNAMSIZ],
    pub freq: iw_freq,
    pub bitrate: iw_param,
    pub data: iw_point,
    pub qual: iw_quality,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct iwreq {
    pub ifr_name: [c_char; IFNAMSIZ],
    pub u: iwreq_data,
}

impl std::fmt::Debug for iwreq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("iwreq")
            .field("ifr_name", &self.ifr_name)
            .finish_non_exhaustive()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ethtool_cmd {
    pub cmd: u32,
    pub supported: u32,
    pub advertising: u32,
    pub speed: u16,
    pub duplex: u8,
    pub port: u8,
    pub phy_address: u8,
    pub transceiver: u8,
    pub autoneg: u8,
    pub mdio_support: u8,
    pub maxtxpkt: u32,
    pub maxrxpkt: u32,
    pub speed_hi: u16,
    pub eth_tp_mdix: u8,
    pub eth_tp_mdix_ctrl: u8,
    pub lp_advertising: u32,
    pub reserved: [u32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_abi_sizes() {
        assert_eq!(mem::size_of::<iw_freq>(), 8);
        assert_eq!(mem::size_of::<iw_param>(), 8);
        assert_eq!(mem::size_of::<iw_quality>(), 4);
        assert_eq!(mem::size_of::<iw_statistics>(), 32);
        assert_eq!(mem::size_of::<iwreq_data>(), 16);
        assert_eq!(mem::size_of::<iwreq>(), 32);
        assert_eq!(mem::size_of::<ethtool_cmd>(), 44);
    }
}
