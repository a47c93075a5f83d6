use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Length of an IEEE 802 MAC address in bytes.
pub const MAC_ADDR_SIZE: usize = 6;

/// IEEE 802 (48-bit) hardware address
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Debug)]
pub struct MacAddr([u8; MAC_ADDR_SIZE]);

impl MacAddr {
    /// Construct a new MacAddr from the given octets
    pub fn from_octets(octets: [u8; MAC_ADDR_SIZE]) -> MacAddr {
        MacAddr(octets)
    }
    /// Returns the octets of the address
    pub fn octets(&self) -> [u8; MAC_ADDR_SIZE] {
        self.0
    }
    /// All-zero address, reported by interfaces without link-layer addressing
    pub fn zero() -> MacAddr {
        MacAddr([0; MAC_ADDR_SIZE])
    }
    pub fn is_zero(&self) -> bool {
        self.0 == [0; MAC_ADDR_SIZE]
    }
}

impl From<[u8; MAC_ADDR_SIZE]> for MacAddr {
    fn from(octets: [u8; MAC_ADDR_SIZE]) -> MacAddr {
        MacAddr(octets)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

/// Error returned when parsing a colon-separated MAC address string
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ParseMacAddrError {
    #[error("too many components in a MAC address string")]
    TooManyComponents,
    #[error("too few components in a MAC address string")]
    TooFewComponents,
    #[error("invalid component in a MAC address string")]
    InvalidComponent,
}

impl FromStr for MacAddr {
    type Err = ParseMacAddrError;

    fn from_str(s: &str) -> Result<MacAddr, ParseMacAddrError> {
        let mut octets = [0u8; MAC_ADDR_SIZE];
        let mut count = 0;
        for part in s.split(':') {
            if count == MAC_ADDR_SIZE {
                return Err(ParseMacAddrError::TooManyComponents);
            }
            if part.is_empty() || part.len() > 2 {
                return Err(ParseMacAddrError::InvalidComponent);
            }
            octets[count] =
                u8::from_str_radix(part, 16).map_err(|_| ParseMacAddrError::InvalidComponent)?;
            count += 1;
        }
        if count < MAC_ADDR_SIZE {
            return Err(ParseMacAddrError::TooFewComponents);
        }
        Ok(MacAddr(octets))
    }
}

#[cfg(feature = "serde")]
impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MacAddrVisitor;
        impl<'de> de::Visitor<'de> for MacAddrVisitor {
            type Value = MacAddr;

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MacAddr, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<MacAddr, E> {
                let octets: [u8; MAC_ADDR_SIZE] = v
                    .try_into()
                    .map_err(|_| E::invalid_length(v.len(), &self))?;
                Ok(MacAddr(octets))
            }

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "either a string representation of a MAC address or 6-element byte array"
                )
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(MacAddrVisitor)
        } else {
            deserializer.deserialize_bytes(MacAddrVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mac = MacAddr::from_octets([0x00, 0x1b, 0x21, 0xaa, 0x0f, 0xff]);
        assert_eq!(mac.to_string(), "00:1b:21:aa:0f:ff");
    }

    #[test]
    fn test_parse() {
        let mac: MacAddr = "de:ad:be:ef:00:01".parse().unwrap();
        assert_eq!(mac.octets(), [0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
        assert_eq!(
            "de:ad:be:ef:00".parse::<MacAddr>(),
            Err(ParseMacAddrError::TooFewComponents)
        );
        assert_eq!(
            "de:ad:be:ef:00:01:02".parse::<MacAddr>(),
            Err(ParseMacAddrError::TooManyComponents)
        );
        assert_eq!(
            "de:ad:be:ef:00:zz".parse::<MacAddr>(),
            Err(ParseMacAddrError::InvalidComponent)
        );
        assert_eq!(
            "de:ad::ef:00:01".parse::<MacAddr>(),
            Err(ParseMacAddrError::InvalidComponent)
        );
    }

    #[test]
    fn test_zero() {
        assert!(MacAddr::zero().is_zero());
        assert!(!MacAddr::from([0, 0, 0, 0, 0, 1]).is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_human_readable() {
        let mac = MacAddr::from_octets([0x02, 0x42, 0xac, 0x11, 0x00, 0x02]);
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"02:42:ac:11:00:02\"");
        let back: MacAddr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mac);
    }
}
