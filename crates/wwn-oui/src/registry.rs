//! OUI database and IEEE registry loader

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use wwn_decode::{LookupError, VendorLookup, VendorRecord};

use crate::builtin::SAN_VENDORS;
use crate::error::OuiError;

/// Registry name of 24-bit OUI assignments in the IEEE CSV export
const MA_L_REGISTRY: &str = "MA-L";

/// Number of hex digits in an OUI
const OUI_DIGITS: usize = 6;

/// Normalize an OUI to six uppercase hex digits
///
/// Accepts `0060e8`, `00-60-E8`, `00:60:e8` and `00.60.e8`.
pub fn normalize_oui(text: &str) -> Option<String> {
    let digits: String = text
        .chars()
        .filter(|c| !matches!(c, '-' | ':' | '.'))
        .collect();
    if digits.len() != OUI_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(digits.to_ascii_uppercase())
}

/// One row of the IEEE MA-L CSV export
#[derive(Debug, Deserialize)]
struct RegistryRow {
    #[serde(rename = "Registry")]
    registry: String,
    #[serde(rename = "Assignment")]
    assignment: String,
    #[serde(rename = "Organization Name")]
    organization: String,
}

/// In-memory OUI to vendor name table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OuiDatabase {
    vendors: HashMap<String, String>,
}

impl OuiDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Database of the built-in SAN vendors
    pub fn builtin() -> Self {
        let mut db = Self::new();
        for (oui, vendor) in SAN_VENDORS {
            db.insert(oui, vendor);
        }
        db
    }

    /// Load an IEEE registry CSV export
    ///
    /// Rows from registries other than MA-L and rows with a malformed
    /// assignment are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, OuiError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut db = Self::new();
        for row in csv.deserialize::<RegistryRow>() {
            let row = row?;
            if row.registry != MA_L_REGISTRY {
                continue;
            }
            if !db.insert(&row.assignment, &row.organization) {
                tracing::warn!(
                    assignment = %row.assignment,
                    "Skipping registry row with invalid assignment"
                );
            }
        }

        tracing::debug!(entries = db.len(), "Loaded OUI registry");
        Ok(db)
    }

    /// Load an IEEE registry CSV export from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OuiError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| OuiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Add or replace an entry
    ///
    /// Returns false (and adds nothing) when `oui` is not a valid OUI.
    pub fn insert(&mut self, oui: &str, vendor: &str) -> bool {
        match normalize_oui(oui) {
            Some(key) => {
                self.vendors.insert(key, vendor.to_string());
                true
            }
            None => false,
        }
    }

    /// Merge another database into this one, its entries taking precedence
    pub fn merge(&mut self, other: OuiDatabase) {
        self.vendors.extend(other.vendors);
    }

    /// Look up the vendor name for an OUI
    ///
    /// Returns `None` for unknown or malformed OUIs.
    pub fn lookup(&self, oui: &str) -> Option<&str> {
        let key = normalize_oui(oui)?;
        self.vendors.get(&key).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Whether the database has no entries
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

impl VendorLookup for OuiDatabase {
    fn query(&self, ouis: &str) -> Result<Vec<VendorRecord>, LookupError> {
        Ok(ouis
            .split_whitespace()
            .map(|oui| VendorRecord {
                oui: oui.to_string(),
                vendor: self.lookup(oui).map(str::to_string),
            })
            .collect())
    }
}
