pub mod record;
pub mod types;

pub use self::record::{
    NetworkInterfaceRecord, IPV4_ADDR_SIZE, IPV6_ADDR_SIZE, MAX_IPV4_ADDR_COUNT,
    MAX_IPV6_ADDR_COUNT,
};
pub use self::types::InterfaceType;

use tracing::error;

use crate::error::{Error, Result};
use crate::net::mac::MAC_ADDR_SIZE;

#[cfg(target_os = "linux")]
use crate::net::mac::MacAddr;
#[cfg(target_os = "linux")]
use crate::os::linux::interface as sys;

/// Determine the connection medium of an interface.
///
/// An interface that answers a wireless extension name query is WiFi.
/// Otherwise, names starting with `en` or `eth` are probed with ethtool and
/// classified as Ethernet if that succeeds. Everything else, including a
/// failure to open the control socket, is `Unspecified`.
#[cfg(target_os = "linux")]
pub fn get_interface_type(if_name: &str) -> InterfaceType {
    sys::get_interface_type(if_name)
}

/// Copy the IPv4 addresses of `if_name` into `record`.
///
/// Addresses appear in the order the system lists them. At most
/// [`MAX_IPV4_ADDR_COUNT`] are kept; the rest are dropped silently.
/// Returns the number of addresses written, or `ReadFailed` if the address
/// list cannot be read or holds no IPv4 address for this interface.
#[cfg(target_os = "linux")]
pub fn get_ipv4_addrs(if_name: &str, record: &mut NetworkInterfaceRecord) -> Result<usize> {
    sys::get_ipv4_addrs(if_name, record)
}

/// Copy the IPv6 addresses of `if_name` into `record`.
///
/// Same contract as [`get_ipv4_addrs`], capped at [`MAX_IPV6_ADDR_COUNT`].
#[cfg(target_os = "linux")]
pub fn get_ipv6_addrs(if_name: &str, record: &mut NetworkInterfaceRecord) -> Result<usize> {
    sys::get_ipv6_addrs(if_name, record)
}

/// Write the 6 byte hardware address of `if_name` to the front of `buf`.
///
/// On success the whole of `buf` is zeroed before the address is written.
/// `buf` shorter than 6 bytes fails with `BufferTooSmall`, but only once the
/// kernel has answered; a failed query is reported first.
#[cfg(target_os = "linux")]
pub fn get_hardware_addr(if_name: &str, buf: &mut [u8]) -> Result<()> {
    let mac = sys::read_hardware_addr(if_name)?;
    write_hardware_addr(&mac, buf)
}

/// Hardware address of `if_name` as a [`MacAddr`].
#[cfg(target_os = "linux")]
pub fn get_mac_addr(if_name: &str) -> Result<MacAddr> {
    sys::read_hardware_addr(if_name).map(MacAddr::from_octets)
}

/// Name of the first interface that classifies as WiFi.
#[cfg(target_os = "linux")]
pub fn get_wifi_interface_name() -> Result<String> {
    sys::find_interface(InterfaceType::WiFi)
}

/// Name of the first interface that classifies as Ethernet.
#[cfg(target_os = "linux")]
pub fn get_eth_interface_name() -> Result<String> {
    sys::find_interface(InterfaceType::Ethernet)
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) fn write_hardware_addr(mac: &[u8; MAC_ADDR_SIZE], buf: &mut [u8]) -> Result<()> {
    if buf.len() < MAC_ADDR_SIZE {
        error!("Hardware address buffer too small: {} bytes", buf.len());
        return Err(Error::BufferTooSmall {
            needed: MAC_ADDR_SIZE,
            actual: buf.len(),
        });
    }
    buf.fill(0);
    buf[..MAC_ADDR_SIZE].copy_from_slice(mac);
    Ok(())
}
