//! Decoding of wireless extension link quality and frequency samples.

use crate::error::{Error, Result};

/// Quality value was updated since the last read.
pub const IW_QUAL_QUAL_UPDATED: u8 = 0x01;
/// Level value was updated since the last read.
pub const IW_QUAL_LEVEL_UPDATED: u8 = 0x02;
/// Noise value was updated since the last read.
pub const IW_QUAL_NOISE_UPDATED: u8 = 0x04;
pub const IW_QUAL_ALL_UPDATED: u8 = 0x07;
/// Level and noise are in dBm.
pub const IW_QUAL_DBM: u8 = 0x08;
pub const IW_QUAL_QUAL_INVALID: u8 = 0x10;
/// The driver has no valid level value.
pub const IW_QUAL_LEVEL_INVALID: u8 = 0x20;
pub const IW_QUAL_NOISE_INVALID: u8 = 0x40;
/// Level and noise are RCPI encoded (IEEE 802.11k).
pub const IW_QUAL_RCPI: u8 = 0x80;

/// One link quality sample as reported by the driver
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct WirelessQuality {
    pub qual: u8,
    pub level: u8,
    pub noise: u8,
    /// `IW_QUAL_*` flags
    pub updated: u8,
}

impl WirelessQuality {
    pub fn level_valid(&self) -> bool {
        self.updated & IW_QUAL_LEVEL_INVALID == 0
    }
}

/// Level encoding selected by the update flags
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum LevelEncoding {
    Rcpi,
    Dbm,
    Plain,
}

type LevelDecoder = fn(u8) -> Result<i8>;

struct RssiRule {
    encoding: LevelEncoding,
    matches: fn(u8) -> bool,
    decode: LevelDecoder,
}

// Evaluated in order, first match wins. A level with neither flag set is
// a plain signed value.
const RSSI_RULES: [RssiRule; 2] = [
    RssiRule {
        encoding: LevelEncoding::Rcpi,
        matches: is_rcpi,
        decode: decode_rcpi,
    },
    RssiRule {
        encoding: LevelEncoding::Dbm,
        matches: is_dbm,
        decode: decode_dbm,
    },
];

fn is_rcpi(updated: u8) -> bool {
    updated & IW_QUAL_RCPI != 0
}

fn is_dbm(updated: u8) -> bool {
    updated & IW_QUAL_DBM != 0
}

fn select_decoder(updated: u8) -> (LevelEncoding, LevelDecoder) {
    RSSI_RULES
        .iter()
        .find(|rule| (rule.matches)(updated))
        .map(|rule| (rule.encoding, rule.decode))
        .unwrap_or((LevelEncoding::Plain, decode_plain))
}

/// Returns the level encoding announced by `updated`.
pub fn level_encoding(updated: u8) -> LevelEncoding {
    select_decoder(updated).0
}

/// Decodes the signal level of a quality sample to dBm.
///
/// The encoding is chosen from the update flags before validity is looked
/// at, so an invalid RCPI level never falls back to another encoding.
pub fn decode_rssi(quality: &WirelessQuality) -> Result<i8> {
    let (encoding, decode) = select_decoder(quality.updated);
    if !quality.level_valid() {
        return Err(Error::ReadFailed(format!(
            "{:?} level marked invalid (flags {:#04x})",
            encoding, quality.updated
        )));
    }
    decode(quality.level)
}

// RCPI = (dBm + 110) * 2 for -110 dBm < power < 0 dBm
fn decode_rcpi(level: u8) -> Result<i8> {
    let dbm = (level as f64 / 2.0) - 110.0;
    if dbm > i8::MAX as f64 || dbm < i8::MIN as f64 {
        return Err(Error::InvalidIntegerValue(format!("RCPI level {} dBm", dbm)));
    }
    Ok(dbm as i8)
}

// dBm in [-192; 63], stored as an unsigned byte
fn decode_dbm(level: u8) -> Result<i8> {
    let mut dbm = level as i32;
    if level >= 64 {
        dbm -= 0x100;
    }
    i8::try_from(dbm).map_err(|_| Error::InvalidIntegerValue(format!("dBm level {}", dbm)))
}

fn decode_plain(level: u8) -> Result<i8> {
    i8::try_from(level).map_err(|_| Error::InvalidIntegerValue(format!("level {}", level)))
}

/// Converts a `mantissa * 10^exponent` frequency to Hz.
///
/// Non-positive exponents leave the mantissa unscaled.
pub fn frequency_hz(mantissa: i32, exponent: i16) -> f64 {
    let mut hz = mantissa as f64;
    for _ in 0..exponent.max(0) {
        hz *= 10.0;
    }
    hz
}

/// Converts an encoded frequency to whole MHz.
pub fn frequency_mhz(mantissa: i32, exponent: i16) -> Result<u16> {
    let mhz = frequency_hz(mantissa, exponent) / 1_000_000.0;
    if mhz > u16::MAX as f64 {
        return Err(Error::InvalidIntegerValue(format!(
            "frequency {} MHz",
            mhz
        )));
    }
    Ok(mhz as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample(level: u8, updated: u8) -> WirelessQuality {
        WirelessQuality {
            qual: 0,
            level,
            noise: 0,
            updated,
        }
    }

    #[test]
    fn test_rcpi() {
        let q = sample(100, IW_QUAL_RCPI | IW_QUAL_LEVEL_UPDATED);
        assert_eq!(decode_rssi(&q).unwrap(), -60);
        // -59.5 truncates toward zero
        let q = sample(101, IW_QUAL_RCPI);
        assert_eq!(decode_rssi(&q).unwrap(), -59);
        let q = sample(255, IW_QUAL_RCPI);
        assert_eq!(decode_rssi(&q).unwrap(), 17);
        let q = sample(0, IW_QUAL_RCPI);
        assert_eq!(decode_rssi(&q).unwrap(), -110);
    }

    #[test]
    fn test_rcpi_takes_priority_over_dbm() {
        let q = sample(100, IW_QUAL_RCPI | IW_QUAL_DBM);
        assert_eq!(level_encoding(q.updated), LevelEncoding::Rcpi);
        assert_eq!(decode_rssi(&q).unwrap(), -60);
    }

    #[test]
    fn test_dbm() {
        let q = sample(220, IW_QUAL_DBM | IW_QUAL_ALL_UPDATED);
        assert_eq!(decode_rssi(&q).unwrap(), -36);
        let q = sample(20, IW_QUAL_DBM);
        assert_eq!(decode_rssi(&q).unwrap(), 20);
        let q = sample(128, IW_QUAL_DBM);
        assert_eq!(decode_rssi(&q).unwrap(), -128);
    }

    #[test]
    fn test_dbm_out_of_range() {
        // 100 - 256 = -156 does not fit an i8
        let q = sample(100, IW_QUAL_DBM);
        assert_eq!(
            decode_rssi(&q).unwrap_err().kind(),
            ErrorKind::InvalidIntegerValue
        );
    }

    #[test]
    fn test_plain() {
        let q = sample(42, IW_QUAL_LEVEL_UPDATED);
        assert_eq!(level_encoding(q.updated), LevelEncoding::Plain);
        assert_eq!(decode_rssi(&q).unwrap(), 42);
        let q = sample(200, 0);
        assert_eq!(
            decode_rssi(&q).unwrap_err().kind(),
            ErrorKind::InvalidIntegerValue
        );
    }

    #[test]
    fn test_plain_without_encoding_flags() {
        for updated in [0, IW_QUAL_ALL_UPDATED, IW_QUAL_QUAL_INVALID | IW_QUAL_NOISE_INVALID] {
            assert_eq!(level_encoding(updated), LevelEncoding::Plain);
        }
        let err = decode_rssi(&sample(42, IW_QUAL_LEVEL_INVALID)).unwrap_err();
        assert!(err.to_string().contains("Plain"));
    }

    #[test]
    fn test_invalid_level_never_defaults() {
        for updated in [IW_QUAL_RCPI, IW_QUAL_DBM, 0] {
            let q = sample(100, updated | IW_QUAL_LEVEL_INVALID);
            assert_eq!(decode_rssi(&q).unwrap_err().kind(), ErrorKind::ReadFailed);
        }
    }

    #[test]
    fn test_other_invalid_flags_ignored() {
        let q = sample(220, IW_QUAL_DBM | IW_QUAL_QUAL_INVALID | IW_QUAL_NOISE_INVALID);
        assert_eq!(decode_rssi(&q).unwrap(), -36);
    }

    #[test]
    fn test_frequency() {
        assert_eq!(frequency_hz(2437, 6), 2_437_000_000.0);
        assert_eq!(frequency_mhz(2437, 6).unwrap(), 2437);
        assert_eq!(frequency_mhz(518_000_000, 1).unwrap(), 5180);
        // channel numbers reported with a zero exponent decode below 1 MHz
        assert_eq!(frequency_mhz(6, 0).unwrap(), 0);
        assert_eq!(frequency_hz(6, -2), 6.0);
    }

    #[test]
    fn test_frequency_overflow() {
        let err = frequency_mhz(70_000, 6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIntegerValue);
        assert_eq!(frequency_mhz(65_535, 6).unwrap(), u16::MAX);
    }
}
