use std::collections::HashSet;

use tracing::{debug, error};

use super::binding::{ethtool_cmd, iwreq, ETHTOOL_GSET, SIOCETHTOOL, SIOCGIWNAME};
use super::ifaddrs::IfAddrs;
use super::socket::{ifname_buf, ifreq_for, ControlSocket, OpenSocket};
use crate::error::{Error, Result};
use crate::interface::record::NetworkInterfaceRecord;
use crate::interface::types::{has_wired_name_prefix, InterfaceType};
use crate::net::mac::MAC_ADDR_SIZE;

pub(crate) fn get_interface_type(if_name: &str) -> InterfaceType {
    let sock = match ControlSocket::open() {
        Ok(sock) => sock,
        Err(_) => return InterfaceType::Unspecified,
    };
    if probe_wireless(&sock, if_name) {
        debug!("{}: answers wireless extension queries", if_name);
        return InterfaceType::WiFi;
    }
    if has_wired_name_prefix(if_name) && probe_ethtool(&sock, if_name) {
        debug!("{}: answers ethtool queries", if_name);
        return InterfaceType::Ethernet;
    }
    InterfaceType::Unspecified
}

fn probe_wireless(sock: &ControlSocket, if_name: &str) -> bool {
    let mut wrq: iwreq = unsafe { std::mem::zeroed() };
    wrq.ifr_name = match ifname_buf(if_name) {
        Ok(buf) => buf,
        Err(_) => return false,
    };
    let res = unsafe { sock.ioctl(SIOCGIWNAME, &mut wrq) };
    res.is_ok()
}

fn probe_ethtool(sock: &ControlSocket, if_name: &str) -> bool {
    let mut ecmd = ethtool_cmd {
        cmd: ETHTOOL_GSET,
        ..Default::default()
    };
    let mut ifr = match ifreq_for(if_name) {
        Ok(ifr) => ifr,
        Err(_) => return false,
    };
    ifr.ifr_ifru.ifru_data = &mut ecmd as *mut ethtool_cmd as *mut libc::c_char;
    let res = unsafe { sock.ioctl(SIOCETHTOOL, &mut ifr) };
    res.is_ok()
}

fn list_addrs() -> Result<IfAddrs> {
    IfAddrs::get().map_err(|err| {
        error!("Failed to get network interfaces: {}", err);
        Error::ReadFailed(format!("getifaddrs: {}", err))
    })
}

pub(crate) fn get_ipv4_addrs(if_name: &str, record: &mut NetworkInterfaceRecord) -> Result<usize> {
    let addrs = list_addrs()?;
    let count = record.fill_ipv4(
        addrs
            .iter()
            .filter(|entry| entry.name_is(if_name))
            .filter_map(|entry| entry.ipv4()),
    );
    if count == 0 {
        error!("No IPv4 address found for {}", if_name);
        return Err(Error::ReadFailed(format!("no IPv4 address on {}", if_name)));
    }
    Ok(count)
}

pub(crate) fn get_ipv6_addrs(if_name: &str, record: &mut NetworkInterfaceRecord) -> Result<usize> {
    let addrs = list_addrs()?;
    let count = record.fill_ipv6(
        addrs
            .iter()
            .filter(|entry| entry.name_is(if_name))
            .filter_map(|entry| entry.ipv6()),
    );
    if count == 0 {
        error!("No IPv6 address found for {}", if_name);
        return Err(Error::ReadFailed(format!("no IPv6 address on {}", if_name)));
    }
    Ok(count)
}

/// Reads the 6 byte hardware address of `if_name` with `SIOCGIFHWADDR`.
pub(crate) fn read_hardware_addr(if_name: &str) -> Result<[u8; MAC_ADDR_SIZE]> {
    query_hardware_addr(if_name, ControlSocket::open)
}

fn query_hardware_addr(if_name: &str, open: OpenSocket) -> Result<[u8; MAC_ADDR_SIZE]> {
    if if_name.is_empty() {
        error!("Invalid argument for interface name");
        return Err(Error::InvalidArgument("empty interface name"));
    }
    let mut ifr = ifreq_for(if_name)?;
    let sock = open()?;
    if let Err(err) = unsafe { sock.ioctl(libc::SIOCGIFHWADDR as libc::c_ulong, &mut ifr) } {
        error!("ioctl(SIOCGIFHWADDR) failed for {}: {}", if_name, err);
        return Err(Error::ReadFailed(format!("SIOCGIFHWADDR: {}", err)));
    }
    let sa_data = unsafe { ifr.ifr_ifru.ifru_hwaddr.sa_data };
    let mut mac = [0u8; MAC_ADDR_SIZE];
    for (dst, src) in mac.iter_mut().zip(sa_data.iter()) {
        *dst = *src as u8;
    }
    Ok(mac)
}

/// First interface in listing order that classifies as `wanted`.
pub(crate) fn find_interface(wanted: InterfaceType) -> Result<String> {
    let addrs = list_addrs()?;
    let mut probed: HashSet<&[u8]> = HashSet::new();
    for entry in addrs.iter() {
        let raw_name = entry.name.to_bytes();
        if !probed.insert(raw_name) {
            continue;
        }
        let name = match entry.name.to_str() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if get_interface_type(name) == wanted {
            return Ok(name.to_owned());
        }
    }
    Err(Error::ReadFailed(format!("no {} interface found", wanted)))
}
