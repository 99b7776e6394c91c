//! Storage WWN Decoding Library
//!
//! This crate finds IEEE/NAA addresses in free-form text and turns Hitachi
//! storage array addresses into model, serial number and port:
//!
//! - **Type 5** port WWNs: model code, serial, cluster and port
//! - **Type 6** NAA logical unit ids (32 digits): classified, but only
//!   non-Hitachi ones produce anything (their vendor)
//! - Non-Hitachi addresses: OUI handed to a vendor lookup
//!
//! Type 1 and 2 addresses (host bus adapter WWPNs) are skipped.
//!
//! # Architecture
//!
//! Each stage is a module of its own:
//! - [`address`] scans text for candidate addresses
//! - [`layout`] cuts an address into the fields of its format
//! - [`vendor`] routes storage OUIs locally and everything else to a
//!   [`VendorLookup`]
//! - [`models`] holds the model code tables
//! - [`serial`] rebuilds serial numbers and port letters
//! - [`decoder`] runs the stages for an address or a line
//! - [`annotate`] appends descriptors to whole blocks of text
//!
//! # Example
//!
//! ```rust
//! use wwn_decode::{decode_line, LookupError, VendorRecord};
//!
//! let lookup = |ouis: &str| -> Result<Vec<VendorRecord>, LookupError> {
//!     Ok(ouis.split_whitespace().map(VendorRecord::unresolved).collect())
//! };
//!
//! let descriptors = decode_line("VSP 65779 1A 50060e801600f300", &lookup).unwrap();
//! assert_eq!(
//!     descriptors,
//!     Some(vec!["Hitachi VSP SN:65779 Port:1A".to_string()])
//! );
//! ```

pub mod address;
pub mod annotate;
pub mod config;
pub mod decoder;
pub mod error;
pub mod layout;
pub mod models;
pub mod serial;
pub mod vendor;

pub use address::{scan, AddressToken, AddressType, ScannedText};
pub use annotate::{AnnotatedLine, Annotation, Annotator, Notifier, TracingNotifier};
pub use config::AnnotateConfig;
pub use decoder::{decode_line, decode_text, decode_token, describe, resolve_lines, Decoded};
pub use error::LookupError;
pub use layout::DecodedFields;
pub use models::{ModelDatabase, ModelFamily, ModelRecord};
pub use vendor::{VendorLookup, VendorRecord};
