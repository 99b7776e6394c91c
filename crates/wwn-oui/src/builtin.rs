//! Built-in OUI table for common SAN vendors
//!
//! Covers the HBA, switch and array vendors that show up next to storage
//! WWNs. A full IEEE registry file can be loaded on top of it with
//! [`OuiDatabase::from_path`](crate::OuiDatabase::from_path).

/// (OUI, vendor) pairs, OUIs as six uppercase hex digits
pub static SAN_VENDORS: &[(&str, &str)] = &[
    ("0060E8", "Hitachi, Ltd."),
    ("0000C9", "Emulex Corporation"),
    ("00E08B", "QLogic Corporation"),
    ("001B32", "QLogic Corporation"),
    ("0024FF", "QLogic Corporation"),
    ("00051E", "Brocade Communications Systems, Inc."),
    ("0027F8", "Brocade Communications Systems, Inc."),
    ("00A098", "NetApp"),
    ("006016", "EMC Corporation"),
    ("005076", "IBM"),
    ("0002AC", "3PAR Inc."),
    ("24A937", "Pure Storage"),
];
