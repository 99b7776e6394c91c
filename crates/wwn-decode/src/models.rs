//! Storage array model database
//!
//! This module maps the two-digit model code found in Hitachi WWNs to a
//! product family, together with the per-generation serial number prefixes
//! needed to rebuild the full serial from the truncated hex field.

use serde::Serialize;

/// Product line of a model code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelFamily {
    /// Enterprise and midrange RAID arrays with cluster/port encoded WWNs
    Raid,
    /// Legacy DF modular arrays (different WWN micro-format, not decoded)
    LegacyDf,
}

/// Information about a storage array model code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelRecord {
    /// Model code as it appears in the WWN
    pub code: u8,
    /// Display name
    pub name: &'static str,
    /// Product line
    pub family: ModelFamily,
    /// Hex digit sitting above the 4-digit serial field, if any
    pub serial_hex_prefix: Option<u8>,
    /// Decimal digits prepended to the decoded serial, if any
    pub serial_decimal_prefix: Option<&'static str>,
}

impl ModelRecord {
    const fn raid(code: u8, name: &'static str) -> Self {
        Self {
            code,
            name,
            family: ModelFamily::Raid,
            serial_hex_prefix: None,
            serial_decimal_prefix: None,
        }
    }

    const fn legacy_df(code: u8) -> Self {
        Self {
            code,
            name: "DF",
            family: ModelFamily::LegacyDf,
            serial_hex_prefix: None,
            serial_decimal_prefix: None,
        }
    }

    const fn hex_prefix(mut self, digit: u8) -> Self {
        self.serial_hex_prefix = Some(digit);
        self
    }

    const fn decimal_prefix(mut self, digits: &'static str) -> Self {
        self.serial_decimal_prefix = Some(digits);
        self
    }

    /// Model code as two uppercase hex digits
    pub fn code_hex(&self) -> String {
        format!("{:02X}", self.code)
    }
}

/// Database of known model codes
pub struct ModelDatabase;

impl ModelDatabase {
    /// Look up a model by its numeric code
    pub fn by_code(code: u8) -> Option<&'static ModelRecord> {
        MODELS.iter().find(|m| m.code == code)
    }

    /// Look up a model by the two hex digits taken from an address
    ///
    /// Codes are compared as numbers, so `0a` and `0A` are the same code.
    pub fn by_hex(code: &str) -> Option<&'static ModelRecord> {
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(code, 16).ok().and_then(Self::by_code)
    }

    /// Get all known model codes, in table order
    pub fn all() -> impl Iterator<Item = &'static ModelRecord> {
        MODELS.iter()
    }

    /// Get all model codes belonging to a product line
    pub fn by_family(family: ModelFamily) -> impl Iterator<Item = &'static ModelRecord> {
        MODELS.iter().filter(move |m| m.family == family)
    }
}

// Model codes 1x/2x/3x are later builds of the 0x generation with a wider
// serial range; those carry a hex prefix for the fifth serial digit.
static MODELS: &[ModelRecord] = &[
    ModelRecord::legacy_df(0x00),
    ModelRecord::raid(0x01, "7700E"),
    ModelRecord::raid(0x02, "9900/RAID400"),
    ModelRecord::raid(0x03, "9900V/RAID450"),
    ModelRecord::raid(0x04, "USP/RAID500"),
    ModelRecord::raid(0x14, "NSC55/RAID500").hex_prefix(1),
    ModelRecord::raid(0x05, "USPV/RAID600"),
    ModelRecord::raid(0x15, "USPV/RAID600").hex_prefix(1),
    ModelRecord::raid(0x06, "VSP"),
    ModelRecord::raid(0x16, "VSP").hex_prefix(1),
    ModelRecord::raid(0x13, "HUSVM").decimal_prefix("2"),
    ModelRecord::raid(0x12, "VSP G/Fxx0/E990").decimal_prefix("4"),
    ModelRecord::raid(0x22, "VSP G/Fxx0/E990")
        .hex_prefix(1)
        .decimal_prefix("4"),
    ModelRecord::raid(0x07, "VSP G1000"),
    ModelRecord::raid(0x17, "VSP G1000").hex_prefix(1),
    ModelRecord::legacy_df(0x10),
    ModelRecord::raid(0x08, "VSP 5000"),
    ModelRecord::raid(0x18, "VSP 5000").hex_prefix(1),
    ModelRecord::raid(0x21, "VSP Ex90").decimal_prefix("6"),
    ModelRecord::raid(0x31, "VSP Ex90")
        .hex_prefix(1)
        .decimal_prefix("6"),
];
