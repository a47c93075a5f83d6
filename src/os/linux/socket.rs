use std::ffi::CString;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::ptr;

use libc::{c_char, c_ulong};
use tracing::error;

use super::binding::IFNAMSIZ;
use crate::error::{Error, Result};

/// Constructor for the socket a query runs on.
pub(crate) type OpenSocket = fn() -> Result<ControlSocket>;

/// Datagram socket used only as a handle for interface ioctls.
///
/// The descriptor is closed when the value is dropped.
pub(crate) struct ControlSocket {
    fd: OwnedFd,
}

impl ControlSocket {
    pub(crate) fn open() -> Result<ControlSocket> {
        let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM | libc::SOCK_CLOEXEC, 0) };
        if fd < 0 {
            let err = io::Error::last_os_error();
            error!("Failed to create a channel to the NET kernel: {}", err);
            return Err(Error::OpenFailed(err));
        }
        Ok(ControlSocket {
            fd: unsafe { OwnedFd::from_raw_fd(fd) },
        })
    }

    /// Issues `request` with `arg` as the argument structure.
    ///
    /// # Safety
    /// - `arg` must have the layout the kernel expects for `request`.
    /// - Any pointer stored inside `arg` must stay valid for the call.
    pub(crate) unsafe fn ioctl<T>(&self, request: c_ulong, arg: &mut T) -> io::Result<()> {
        let ret = unsafe { libc::ioctl(self.fd.as_raw_fd(), request as _, arg as *mut T) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Copies an interface name into a NUL terminated `IFNAMSIZ` buffer.
pub(crate) fn ifname_buf(if_name: &str) -> Result<[c_char; IFNAMSIZ]> {
    let c_name = CString::new(if_name)
        .map_err(|_| Error::InvalidArgument("interface name contains a NUL byte"))?;
    let bytes = c_name.to_bytes_with_nul();
    if bytes.len() > IFNAMSIZ {
        error!("Interface name too long: {}", if_name);
        return Err(Error::InvalidArgument("interface name too long"));
    }
    let mut buf = [0 as c_char; IFNAMSIZ];
    unsafe {
        ptr::copy_nonoverlapping(
            bytes.as_ptr() as *const c_char,
            buf.as_mut_ptr(),
            bytes.len(),
        );
    }
    Ok(buf)
}

#[cfg(test)]
pub(crate) fn refuse_open() -> Result<ControlSocket> {
    Err(Error::OpenFailed(io::Error::from_raw_os_error(libc::EMFILE)))
}

/// Zeroed `ifreq` addressed to `if_name`.
pub(crate) fn ifreq_for(if_name: &str) -> Result<libc::ifreq> {
    let mut ifr: libc::ifreq = unsafe { std::mem::zeroed() };
    ifr.ifr_name = ifname_buf(if_name)?;
    Ok(ifr)
}
