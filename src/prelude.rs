pub use crate::error::{Error, ErrorKind, Result};
pub use crate::ethernet::phy::{EthLinkSettings, PhyRate};
pub use crate::interface::record::NetworkInterfaceRecord;
pub use crate::interface::types::InterfaceType;
pub use crate::net::mac::MacAddr;
pub use crate::wireless::channel::{channel_to_frequency, frequency_to_channel, WiFiBand};

#[cfg(target_os = "linux")]
pub use crate::ethernet::{get_eth_full_duplex, get_eth_link_settings, get_eth_phy_rate};
#[cfg(target_os = "linux")]
pub use crate::interface::{
    get_eth_interface_name, get_hardware_addr, get_interface_type, get_ipv4_addrs,
    get_ipv6_addrs, get_mac_addr, get_wifi_interface_name,
};
#[cfg(target_os = "linux")]
pub use crate::wireless::{
    get_beacon_lost_count, get_channel_number, get_current_max_rate, get_rssi,
};
