//! Field layouts of the supported address formats
//!
//! Each layout is a fixed list of field widths following the leading type
//! digit. Classification is purely structural: the token's type digit and
//! width pick the layout, and the digits are cut into borrowed sub-fields.
//!
//! # Type 5 (port WWN)
//! ```text
//! 5 0060E8 0 16 00F3 0 0
//! | |      | |  |    | +- port index
//! | |      | |  |    +--- cluster index
//! | |      | |  +-------- serial (hex, partial on some models)
//! | |      | +----------- model code
//! | |      +------------- reserved, usually 0
//! | +-------------------- OUI
//! +---------------------- type
//! ```
//!
//! # Type 6 (logical unit NAA id, 32 digits)
//! ```text
//! 6 0060E8 007 D E8C0 0003 0DE8C 0000 0113
//! | |      |   | |    |    |     |    +- LDEV (CU + LDEV)
//! | |      |   | |    |    |     +------ skipped
//! | |      |   | |    |    +------------ serial (hex)
//! | |      |   | |    +----------------- midrange serial prefix
//! | |      |   | +---------------------- skipped
//! | |      |   +------------------------ midrange type
//! | |      +---------------------------- model code (right two digits used)
//! | +----------------------------------- OUI
//! +------------------------------------- type
//! ```
//!
//! Types 1 and 2 carry no array identity and have no layout here; the
//! classifier drops them.

use crate::address::{AddressToken, AddressType, ADDRESS_DIGITS, EXTENDED_ADDRESS_DIGITS};

/// Field widths after the type digit of a type-5 WWN
pub const WWN_FIELD_WIDTHS: [usize; 6] = [6, 1, 2, 4, 1, 1];

/// Field widths after the type digit of a type-6 NAA id
pub const NAA_FIELD_WIDTHS: [usize; 8] = [6, 3, 1, 4, 4, 5, 4, 4];

/// Raw sub-fields of a type-5 WWN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WwnFields<'a> {
    /// Organizationally unique identifier (6 hex digits)
    pub oui: &'a str,
    /// Reserved digit, usually `0`
    pub reserved: &'a str,
    /// Model code (2 hex digits)
    pub model: &'a str,
    /// Serial number, low 4 hex digits
    pub serial_hex: &'a str,
    /// Cluster index (1 hex digit)
    pub cluster: &'a str,
    /// Port index (1 hex digit)
    pub port: &'a str,
}

/// Raw sub-fields of a type-6 NAA id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaaFields<'a> {
    /// Organizationally unique identifier (6 hex digits)
    pub oui: &'a str,
    /// Combined model field (3 hex digits)
    pub model: &'a str,
    /// Midrange type (1 hex digit)
    pub midrange_type: &'a str,
    /// Midrange serial prefix (4 hex digits)
    pub midrange_serial_prefix: &'a str,
    /// Serial number (5 hex digits)
    pub serial_hex: &'a str,
    /// LDEV id (4 hex digits, CU then LDEV)
    pub ldev: &'a str,
}

impl<'a> NaaFields<'a> {
    /// The two-digit model code carried in the right of the model field
    pub fn model_code(&self) -> &'a str {
        &self.model[1..]
    }
}

/// Sub-fields of a recognised address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedFields<'a> {
    /// Type-5 port WWN
    Wwn(WwnFields<'a>),
    /// Type-6 logical unit NAA id
    Naa(NaaFields<'a>),
}

impl<'a> DecodedFields<'a> {
    /// Match a token against the known layouts
    ///
    /// Returns `None` for tokens that fit no layout: type-1 and type-2
    /// addresses, and 16-digit addresses with type digit 6.
    pub fn classify(token: AddressToken<'a>) -> Option<Self> {
        let digits = token.as_str();
        let body = &digits[1..];
        match (token.address_type(), digits.len()) {
            (AddressType::Registered, ADDRESS_DIGITS) => {
                let [oui, reserved, model, serial_hex, cluster, port] =
                    split_fields(body, WWN_FIELD_WIDTHS);
                Some(Self::Wwn(WwnFields {
                    oui,
                    reserved,
                    model,
                    serial_hex,
                    cluster,
                    port,
                }))
            }
            (AddressType::RegisteredExtended, EXTENDED_ADDRESS_DIGITS) => {
                let [oui, model, midrange_type, _, midrange_serial_prefix, serial_hex, _, ldev] =
                    split_fields(body, NAA_FIELD_WIDTHS);
                Some(Self::Naa(NaaFields {
                    oui,
                    model,
                    midrange_type,
                    midrange_serial_prefix,
                    serial_hex,
                    ldev,
                }))
            }
            _ => None,
        }
    }

    /// The organizationally unique identifier of any layout
    pub fn oui(&self) -> &'a str {
        match self {
            Self::Wwn(f) => f.oui,
            Self::Naa(f) => f.oui,
        }
    }
}

/// Cut `digits` into consecutive fields of the given widths
///
/// `digits` must be exactly as long as the widths add up to.
fn split_fields<const N: usize>(digits: &str, widths: [usize; N]) -> [&str; N] {
    debug_assert_eq!(digits.len(), widths.iter().sum::<usize>());
    let mut rest = digits;
    widths.map(|width| {
        let (field, tail) = rest.split_at(width);
        rest = tail;
        field
    })
}
