pub mod phy;

pub use self::phy::{EthLinkSettings, PhyRate};

#[cfg(target_os = "linux")]
use tracing::error;

#[cfg(target_os = "linux")]
use crate::error::Result;
#[cfg(target_os = "linux")]
use crate::os::linux::ethernet as sys;

/// Negotiated speed and duplex of a wired interface from one ethtool query.
#[cfg(target_os = "linux")]
pub fn get_eth_link_settings(if_name: &str) -> Result<EthLinkSettings> {
    sys::get_link_settings(if_name)
}

/// Negotiated PHY rate. A speed outside the standard rates fails with
/// `ReadFailed`.
#[cfg(target_os = "linux")]
pub fn get_eth_phy_rate(if_name: &str) -> Result<PhyRate> {
    sys::get_link_settings(if_name)?.phy_rate().map_err(|err| {
        error!("{}: {}", if_name, err);
        err
    })
}

/// Whether the link runs in full duplex mode.
#[cfg(target_os = "linux")]
pub fn get_eth_full_duplex(if_name: &str) -> Result<bool> {
    Ok(sys::get_link_settings(if_name)?.is_full_duplex())
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_has_no_ethtool_settings() {
        assert!(get_eth_phy_rate("lo").is_err());
        assert!(get_eth_full_duplex("lo").is_err());
    }
}
