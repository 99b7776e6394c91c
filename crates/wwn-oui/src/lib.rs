//! OUI Vendor Registry
//!
//! This crate resolves IEEE organizationally unique identifiers to vendor
//! names for addresses the storage decoder does not handle itself (HBA
//! ports, switches, other arrays).
//!
//! # Example
//!
//! ```rust
//! use wwn_oui::OuiDatabase;
//!
//! let db = OuiDatabase::builtin();
//! assert_eq!(db.lookup("00-00-C9"), Some("Emulex Corporation"));
//! assert_eq!(db.lookup("123456"), None);
//! ```

pub mod builtin;
pub mod error;
pub mod registry;

pub use error::OuiError;
pub use registry::{normalize_oui, OuiDatabase};
