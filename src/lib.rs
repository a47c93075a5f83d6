//! Connectivity introspection for network interfaces.
//!
//! Given an interface name, `ifprobe` reports the connection medium
//! (WiFi, Ethernet or unspecified), the interface's IPv4/IPv6 and hardware
//! addresses, WiFi link metrics (channel, RSSI, missed beacons, bit rate)
//! and wired link metrics (PHY rate, duplex). Every query opens its own
//! kernel handle and releases it before returning; nothing is cached.
//!
//! The channel mapper and the decoders are available on every platform.
//! The kernel queries are implemented for Linux.

mod os;

pub mod error;
pub mod ethernet;
pub mod interface;
pub mod net;
pub mod prelude;
pub mod wireless;

pub use error::{Error, ErrorKind, Result};
pub use ethernet::{EthLinkSettings, PhyRate};
pub use interface::{InterfaceType, NetworkInterfaceRecord};
pub use net::mac::MacAddr;
pub use wireless::WiFiBand;

#[cfg(target_os = "linux")]
pub use ethernet::{get_eth_full_duplex, get_eth_link_settings, get_eth_phy_rate};
#[cfg(target_os = "linux")]
pub use interface::{
    get_eth_interface_name, get_hardware_addr, get_interface_type, get_ipv4_addrs,
    get_ipv6_addrs, get_mac_addr, get_wifi_interface_name,
};
#[cfg(target_os = "linux")]
pub use wireless::{get_beacon_lost_count, get_channel_number, get_current_max_rate, get_rssi};
