//! Serial number and port arithmetic
//!
//! The WWN only has room for four hex digits of serial number. Later
//! hardware generations have serials that need a fifth hex digit, or a
//! leading decimal digit identifying the product line; both are implied by
//! the model code and restored here from the [`ModelRecord`].

use std::fmt;

use crate::models::ModelRecord;
use crate::vendor::STORAGE_VENDOR;

/// Port letters by port index (no `I` or `O`)
pub const PORT_LETTERS: &[u8; 16] = b"ABCDEFGHJKLMNPQR";

/// Cluster labels by cluster index
pub const CLUSTER_LETTERS: &[u8; 16] = b"123456789ABCDEFG";

/// Placeholder for an index with no letter
pub const UNKNOWN_LETTER: char = '?';

fn parse_hex(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

fn letter(alphabet: &[u8], index: u64) -> char {
    usize::try_from(index)
        .ok()
        .and_then(|i| alphabet.get(i))
        .map_or(UNKNOWN_LETTER, |&b| char::from(b))
}

/// Letter for a port index
pub fn port_letter(index: u64) -> char {
    letter(PORT_LETTERS, index)
}

/// Label for a cluster index
pub fn cluster_letter(index: u64) -> char {
    letter(CLUSTER_LETTERS, index)
}

/// Port label such as `1A` from the cluster and port hex digits
///
/// Anything that does not parse or falls outside an alphabet becomes `?`.
pub fn port_label(cluster_hex: &str, port_hex: &str) -> String {
    let cluster = parse_hex(cluster_hex).map_or(UNKNOWN_LETTER, cluster_letter);
    let port = parse_hex(port_hex).map_or(UNKNOWN_LETTER, port_letter);
    [cluster, port].iter().collect()
}

/// Rebuild the decimal serial number from the hex serial field
///
/// The hex prefix becomes the digit directly above the field, so leading
/// zeros in the field survive: prefix `1` with field `00f3` is `0x100f3`.
pub fn reconstruct_serial(model: &ModelRecord, serial_hex: &str) -> Option<String> {
    let raw = parse_hex(serial_hex)?;
    let value = match model.serial_hex_prefix {
        Some(prefix) => {
            let shift = u32::try_from(4 * serial_hex.len()).ok()?;
            u64::from(prefix).checked_shl(shift)? | raw
        }
        None => raw,
    };
    Some(format!(
        "{}{}",
        model.serial_decimal_prefix.unwrap_or_default(),
        value
    ))
}

/// A decoded storage array port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePort {
    pub model: &'static ModelRecord,
    pub serial: String,
    pub port: String,
}

impl StoragePort {
    /// Decode serial and port from the raw WWN fields
    pub fn new(
        model: &'static ModelRecord,
        serial_hex: &str,
        cluster_hex: &str,
        port_hex: &str,
    ) -> Option<Self> {
        Some(Self {
            model,
            serial: reconstruct_serial(model, serial_hex)?,
            port: port_label(cluster_hex, port_hex),
        })
    }
}

impl fmt::Display for StoragePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} SN:{} Port:{}",
            STORAGE_VENDOR, self.model.name, self.serial, self.port
        )
    }
}
