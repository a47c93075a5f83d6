use std::ffi::CStr;
use std::io;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Owned `getifaddrs(3)` list, released with `freeifaddrs(3)` on drop.
pub(crate) struct IfAddrs {
    head: *mut libc::ifaddrs,
}

impl IfAddrs {
    pub(crate) fn get() -> io::Result<IfAddrs> {
        let mut addrs: MaybeUninit<*mut libc::ifaddrs> = MaybeUninit::uninit();
        if unsafe { libc::getifaddrs(addrs.as_mut_ptr()) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(IfAddrs {
            head: unsafe { addrs.assume_init() },
        })
    }

    pub(crate) fn iter(&self) -> IfAddrsIter<'_> {
        IfAddrsIter {
            next: self.head,
            _list: PhantomData,
        }
    }
}

impl Drop for IfAddrs {
    fn drop(&mut self) {
        if !self.head.is_null() {
            unsafe { libc::freeifaddrs(self.head) };
        }
    }
}

/// One entry of the list: an interface name and at most one address.
pub(crate) struct IfAddrEntry<'a> {
    pub(crate) name: &'a CStr,
    pub(crate) addr: Option<IpAddr>,
}

impl<'a> IfAddrEntry<'a> {
    pub(crate) fn name_is(&self, if_name: &str) -> bool {
        self.name.to_bytes() == if_name.as_bytes()
    }

    pub(crate) fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.addr {
            Some(IpAddr::V4(addr)) => Some(addr),
            _ => None,
        }
    }

    pub(crate) fn ipv6(&self) -> Option<Ipv6Addr> {
        match self.addr {
            Some(IpAddr::V6(addr)) => Some(addr),
            _ => None,
        }
    }
}

pub(crate) struct IfAddrsIter<'a> {
    next: *mut libc::ifaddrs,
    _list: PhantomData<&'a IfAddrs>,
}

impl<'a> Iterator for IfAddrsIter<'a> {
    type Item = IfAddrEntry<'a>;

    fn next(&mut self) -> Option<IfAddrEntry<'a>> {
        while !self.next.is_null() {
            let addr_ref: &'a libc::ifaddrs = unsafe { &*self.next };
            self.next = addr_ref.ifa_next;
            if addr_ref.ifa_name.is_null() {
                continue;
            }
            let name = unsafe { CStr::from_ptr(addr_ref.ifa_name) };
            let addr = unsafe { sockaddr_to_ip(addr_ref.ifa_addr) };
            return Some(IfAddrEntry { name, addr });
        }
        None
    }
}

/// # Safety
/// `sa` must be null or point to a socket address whose size matches its
/// `sa_family`, as `getifaddrs` guarantees.
unsafe fn sockaddr_to_ip(sa: *const libc::sockaddr) -> Option<IpAddr> {
    if sa.is_null() {
        return None;
    }
    match unsafe { (*sa).sa_family } as libc::c_int {
        libc::AF_INET => {
            let sin: &libc::sockaddr_in = unsafe { &*(sa as *const libc::sockaddr_in) };
            Some(IpAddr::V4(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr))))
        }
        libc::AF_INET6 => {
            let sin6: &libc::sockaddr_in6 = unsafe { &*(sa as *const libc::sockaddr_in6) };
            Some(IpAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_has_loopback() {
        let addrs = IfAddrs::get().unwrap();
        assert!(addrs.iter().any(|entry| entry.name_is("lo")));
    }

    #[test]
    fn test_sockaddr_v4() {
        let mut sin: libc::sockaddr_in = unsafe { std::mem::zeroed() };
        sin.sin_family = libc::AF_INET as libc::sa_family_t;
        sin.sin_addr.s_addr = u32::from(Ipv4Addr::new(192, 168, 0, 7)).to_be();
        let ip = unsafe { sockaddr_to_ip(&sin as *const _ as *const libc::sockaddr) };
        assert_eq!(ip, Some(IpAddr::V4(Ipv4Addr::new(192, 168, 0, 7))));
    }

    #[test]
    fn test_sockaddr_other_family() {
        let mut sa: libc::sockaddr = unsafe { std::mem::zeroed() };
        sa.sa_family = libc::AF_PACKET as libc::sa_family_t;
        assert_eq!(unsafe { sockaddr_to_ip(&sa) }, None);
        assert_eq!(unsafe { sockaddr_to_ip(std::ptr::null()) }, None);
    }
}
