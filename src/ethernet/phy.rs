use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// `ethtool_cmd.duplex` value for a full duplex link
pub const DUPLEX_FULL: u8 = 0x01;
pub const DUPLEX_HALF: u8 = 0x00;
pub const DUPLEX_UNKNOWN: u8 = 0xff;
/// Speed reported while the link is down
pub const SPEED_UNKNOWN: u32 = u32::MAX;

/// Negotiated physical layer rate of a wired link
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhyRate {
    Rate10M,
    Rate100M,
    Rate1G,
    Rate2_5G,
    Rate5G,
    Rate10G,
    Rate40G,
    Rate100G,
    Rate200G,
    Rate400G,
}

impl PhyRate {
    /// Maps an ethtool speed in Mb/s. Speeds that are not a standard rate
    /// return `None`.
    pub fn from_speed_mbps(speed: u32) -> Option<PhyRate> {
        match speed {
            10 => Some(PhyRate::Rate10M),
            100 => Some(PhyRate::Rate100M),
            1000 => Some(PhyRate::Rate1G),
            2500 => Some(PhyRate::Rate2_5G),
            5000 => Some(PhyRate::Rate5G),
            10000 => Some(PhyRate::Rate10G),
            40000 => Some(PhyRate::Rate40G),
            100000 => Some(PhyRate::Rate100G),
            200000 => Some(PhyRate::Rate200G),
            400000 => Some(PhyRate::Rate400G),
            _ => None,
        }
    }

    /// Link speed in Mb/s
    pub fn speed_mbps(&self) -> u32 {
        match *self {
            PhyRate::Rate10M => 10,
            PhyRate::Rate100M => 100,
            PhyRate::Rate1G => 1000,
            PhyRate::Rate2_5G => 2500,
            PhyRate::Rate5G => 5000,
            PhyRate::Rate10G => 10000,
            PhyRate::Rate40G => 40000,
            PhyRate::Rate100G => 100000,
            PhyRate::Rate200G => 200000,
            PhyRate::Rate400G => 400000,
        }
    }
}

impl fmt::Display for PhyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            PhyRate::Rate10M => "10 Mbit/s",
            PhyRate::Rate100M => "100 Mbit/s",
            PhyRate::Rate1G => "1 Gbit/s",
            PhyRate::Rate2_5G => "2.5 Gbit/s",
            PhyRate::Rate5G => "5 Gbit/s",
            PhyRate::Rate10G => "10 Gbit/s",
            PhyRate::Rate40G => "40 Gbit/s",
            PhyRate::Rate100G => "100 Gbit/s",
            PhyRate::Rate200G => "200 Gbit/s",
            PhyRate::Rate400G => "400 Gbit/s",
        };
        f.write_str(s)
    }
}

/// Decoded reply of one ethtool settings query
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EthLinkSettings {
    /// Link speed in Mb/s
    pub speed: u32,
    /// One of `DUPLEX_HALF`, `DUPLEX_FULL`, `DUPLEX_UNKNOWN`
    pub duplex: u8,
}

impl EthLinkSettings {
    /// Joins the split 16-bit speed fields of `ethtool_cmd`.
    pub fn from_raw(speed_lo: u16, speed_hi: u16, duplex: u8) -> EthLinkSettings {
        EthLinkSettings {
            speed: ((speed_hi as u32) << 16) | speed_lo as u32,
            duplex,
        }
    }

    pub fn phy_rate(&self) -> Result<PhyRate> {
        PhyRate::from_speed_mbps(self.speed)
            .ok_or_else(|| Error::ReadFailed(format!("undefined speed ({})", self.speed)))
    }

    pub fn is_full_duplex(&self) -> bool {
        self.duplex == DUPLEX_FULL
    }
}
