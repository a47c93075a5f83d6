use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Connection medium of a network interface
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterfaceType {
    /// Neither wireless extensions nor ethtool answered for the interface
    #[default]
    Unspecified,
    /// The interface answers wireless extension queries
    WiFi,
    /// The interface answers ethtool link settings queries
    Ethernet,
}

impl InterfaceType {
    /// Returns name of InterfaceType
    pub fn name(&self) -> &'static str {
        match *self {
            InterfaceType::Unspecified => "Unspecified",
            InterfaceType::WiFi => "WiFi",
            InterfaceType::Ethernet => "Ethernet",
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true when the name follows common wired adapter naming.
///
/// Only these names are probed with ethtool, which keeps the classifier
/// from issuing ethtool requests against loopback, tunnel or bridge devices.
pub fn has_wired_name_prefix(if_name: &str) -> bool {
    if_name.starts_with("en") || if_name.starts_with("eth")
}
