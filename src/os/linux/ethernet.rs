use tracing::{debug, error};

use super::binding::{ethtool_cmd, ETHTOOL_GSET, SIOCETHTOOL};
use super::socket::{ifreq_for, ControlSocket, OpenSocket};
use crate::error::{Error, Result};
use crate::ethernet::phy::EthLinkSettings;

/// Issues one `ETHTOOL_GSET` request for `if_name`.
pub(crate) fn get_link_settings(if_name: &str) -> Result<EthLinkSettings> {
    query_link_settings(if_name, ControlSocket::open)
}

fn query_link_settings(if_name: &str, open: OpenSocket) -> Result<EthLinkSettings> {
    let mut ecmd = ethtool_cmd {
        cmd: ETHTOOL_GSET,
        ..Default::default()
    };
    let mut ifr = ifreq_for(if_name)?;
    ifr.ifr_ifru.ifru_data = &mut ecmd as *mut ethtool_cmd as *mut libc::c_char;

    let sock = open()?;
    let res = unsafe { sock.ioctl(SIOCETHTOOL, &mut ifr) };
    if let Err(err) = res {
        error!("Cannot get device settings for {}: {}", if_name, err);
        return Err(Error::ReadFailed(format!("ETHTOOL_GSET: {}", err)));
    }
    let settings = EthLinkSettings::from_raw(ecmd.speed, ecmd.speed_hi, ecmd.duplex);
    debug!(
        "{}: speed {} Mb/s, duplex {:#04x}",
        if_name, settings.speed, settings.duplex
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::os::linux::socket::refuse_open;

    #[test]
    fn test_missing_interface() {
        let err = get_link_settings("nosuchif0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReadFailed);
    }

    #[test]
    fn test_name_too_long() {
        let err = get_link_settings("enp0s31f6-too-long").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_name_checked_before_socket() {
        let err = query_link_settings("enp0s31f6-too-long", refuse_open).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = query_link_settings("eth0", refuse_open).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OpenFailed);
    }
}
