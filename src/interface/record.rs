use std::net::{Ipv4Addr, Ipv6Addr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of IPv4 addresses kept per interface.
pub const MAX_IPV4_ADDR_COUNT: usize = 4;
/// Maximum number of IPv6 addresses kept per interface.
pub const MAX_IPV6_ADDR_COUNT: usize = 8;
pub const IPV4_ADDR_SIZE: usize = 4;
pub const IPV6_ADDR_SIZE: usize = 16;

/// Caller-owned address storage for one interface.
///
/// Each family has a fixed number of slots. Filling a family beyond its
/// capacity drops the extra addresses; this is a capacity policy and is
/// never reported as an error.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkInterfaceRecord {
    ipv4_buf: [[u8; IPV4_ADDR_SIZE]; MAX_IPV4_ADDR_COUNT],
    ipv4_count: usize,
    ipv6_buf: [[u8; IPV6_ADDR_SIZE]; MAX_IPV6_ADDR_COUNT],
    ipv6_count: usize,
}

impl NetworkInterfaceRecord {
    pub fn new() -> NetworkInterfaceRecord {
        NetworkInterfaceRecord::default()
    }

    /// Occupied IPv4 slots, in the order they were written
    pub fn ipv4_spans(&self) -> &[[u8; IPV4_ADDR_SIZE]] {
        &self.ipv4_buf[..self.ipv4_count]
    }

    /// Occupied IPv6 slots, in the order they were written
    pub fn ipv6_spans(&self) -> &[[u8; IPV6_ADDR_SIZE]] {
        &self.ipv6_buf[..self.ipv6_count]
    }

    pub fn ipv4_addrs(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.ipv4_spans().iter().map(|octets| Ipv4Addr::from(*octets))
    }

    pub fn ipv6_addrs(&self) -> impl Iterator<Item = Ipv6Addr> + '_ {
        self.ipv6_spans().iter().map(|octets| Ipv6Addr::from(*octets))
    }

    pub fn ipv4_count(&self) -> usize {
        self.ipv4_count
    }

    pub fn ipv6_count(&self) -> usize {
        self.ipv6_count
    }

    /// Appends an IPv4 address. Returns false if every slot is taken.
    pub fn push_ipv4(&mut self, addr: Ipv4Addr) -> bool {
        if self.ipv4_count >= MAX_IPV4_ADDR_COUNT {
            return false;
        }
        self.ipv4_buf[self.ipv4_count] = addr.octets();
        self.ipv4_count += 1;
        true
    }

    /// Appends an IPv6 address. Returns false if every slot is taken.
    pub fn push_ipv6(&mut self, addr: Ipv6Addr) -> bool {
        if self.ipv6_count >= MAX_IPV6_ADDR_COUNT {
            return false;
        }
        self.ipv6_buf[self.ipv6_count] = addr.octets();
        self.ipv6_count += 1;
        true
    }

    pub fn clear_ipv4(&mut self) {
        self.ipv4_buf = Default::default();
        self.ipv4_count = 0;
    }

    pub fn clear_ipv6(&mut self) {
        self.ipv6_buf = Default::default();
        self.ipv6_count = 0;
    }

    /// Replaces the IPv4 slots with `addrs`, stopping at capacity.
    ///
    /// The iterator is not advanced past the last address that fits.
    /// Returns the number of slots now in use.
    pub fn fill_ipv4<I>(&mut self, addrs: I) -> usize
    where
        I: IntoIterator<Item = Ipv4Addr>,
    {
        self.clear_ipv4();
        for addr in addrs {
            self.push_ipv4(addr);
            if self.ipv4_count >= MAX_IPV4_ADDR_COUNT {
                break;
            }
        }
        self.ipv4_count
    }

    /// Replaces the IPv6 slots with `addrs`, stopping at capacity.
    ///
    /// The iterator is not advanced past the last address that fits.
    /// Returns the number of slots now in use.
    pub fn fill_ipv6<I>(&mut self, addrs: I) -> usize
    where
        I: IntoIterator<Item = Ipv6Addr>,
    {
        self.clear_ipv6();
        for addr in addrs {
            self.push_ipv6(addr);
            if self.ipv6_count >= MAX_IPV6_ADDR_COUNT {
                break;
            }
        }
        self.ipv6_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut record = NetworkInterfaceRecord::new();
        for i in 0..MAX_IPV4_ADDR_COUNT as u8 {
            assert!(record.push_ipv4(Ipv4Addr::new(10, 0, 0, i)));
        }
        assert!(!record.push_ipv4(Ipv4Addr::new(10, 0, 0, 99)));
        assert_eq!(record.ipv4_count(), MAX_IPV4_ADDR_COUNT);
        assert_eq!(record.ipv4_spans()[3], [10, 0, 0, 3]);
    }

    #[test]
    fn test_fill_truncates_at_capacity() {
        let mut record = NetworkInterfaceRecord::new();
        let mut pulled = 0;
        let addrs = (0..20u8).map(|i| {
            pulled += 1;
            Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, i as u16)
        });
        let count = record.fill_ipv6(addrs);
        assert_eq!(count, MAX_IPV6_ADDR_COUNT);
        assert_eq!(pulled, MAX_IPV6_ADDR_COUNT);
        let last: Vec<Ipv6Addr> = record.ipv6_addrs().collect();
        assert_eq!(last.len(), MAX_IPV6_ADDR_COUNT);
        assert_eq!(last[7], "fe80::7".parse::<Ipv6Addr>().unwrap());
    }

    #[test]
    fn test_fill_replaces_previous() {
        let mut record = NetworkInterfaceRecord::new();
        record.fill_ipv4(vec![
            Ipv4Addr::new(192, 168, 1, 2),
            Ipv4Addr::new(192, 168, 1, 3),
        ]);
        let count = record.fill_ipv4(vec![Ipv4Addr::LOCALHOST]);
        assert_eq!(count, 1);
        assert_eq!(record.ipv4_addrs().collect::<Vec<_>>(), vec![Ipv4Addr::LOCALHOST]);
    }

    #[test]
    fn test_families_independent() {
        let mut record = NetworkInterfaceRecord::new();
        record.fill_ipv4(vec![Ipv4Addr::new(172, 17, 0, 1)]);
        record.fill_ipv6(vec![Ipv6Addr::LOCALHOST]);
        record.clear_ipv4();
        assert_eq!(record.ipv4_count(), 0);
        assert_eq!(record.ipv6_spans(), &[Ipv6Addr::LOCALHOST.octets()]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let mut record = NetworkInterfaceRecord::new();
        record.fill_ipv4(vec![Ipv4Addr::new(10, 1, 2, 3)]);
        let json = serde_json::to_string(&record).unwrap();
        let back: NetworkInterfaceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
