//! Vendor gate and the generic vendor lookup seam
//!
//! Only addresses carrying the storage vendor's OUI are decoded locally.
//! Everything else is resolved by a [`VendorLookup`] implementation, which
//! is queried once per batch with every pending OUI.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::layout::DecodedFields;

/// OUI of the storage vendor whose WWNs are decoded
pub const STORAGE_OUI: &str = "0060E8";

/// Vendor name used in decoded descriptors
pub const STORAGE_VENDOR: &str = "Hitachi";

/// Whether an OUI belongs to the storage vendor (case-insensitive)
pub fn is_storage_vendor(oui: &str) -> bool {
    oui.eq_ignore_ascii_case(STORAGE_OUI)
}

/// Where a classified address goes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    /// Storage vendor layout, decode locally
    Storage(DecodedFields<'a>),
    /// Anything else, resolve the OUI through the vendor lookup
    Lookup(&'a str),
}

impl<'a> Gate<'a> {
    /// Route classified fields by vendor
    pub fn route(fields: DecodedFields<'a>) -> Self {
        if is_storage_vendor(fields.oui()) {
            Self::Storage(fields)
        } else {
            Self::Lookup(fields.oui())
        }
    }
}

/// One answer from a vendor lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// The OUI that was queried
    pub oui: String,
    /// Vendor display name, `None` when the OUI is not registered
    pub vendor: Option<String>,
}

impl VendorRecord {
    /// A record for a known vendor
    pub fn resolved(oui: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            oui: oui.into(),
            vendor: Some(vendor.into()),
        }
    }

    /// A record for an OUI the lookup does not know
    pub fn unresolved(oui: impl Into<String>) -> Self {
        Self {
            oui: oui.into(),
            vendor: None,
        }
    }
}

/// Generic OUI to vendor name resolution
///
/// `query` receives a whitespace-joined list of OUIs and answers with a
/// record per OUI it knows about, normally one per OUI in the same order.
/// Records are matched back by OUI, so missing or reordered records only
/// leave those OUIs unresolved. Failures are returned to the caller as-is;
/// no retry happens on this side.
pub trait VendorLookup {
    fn query(&self, ouis: &str) -> Result<Vec<VendorRecord>, LookupError>;
}

impl<F> VendorLookup for F
where
    F: Fn(&str) -> Result<Vec<VendorRecord>, LookupError>,
{
    fn query(&self, ouis: &str) -> Result<Vec<VendorRecord>, LookupError> {
        self(ouis)
    }
}

/// Resolve a batch of OUIs with a single lookup call
///
/// Returns one entry per input OUI, `None` where the lookup had no name.
/// An empty batch does not call the lookup at all.
pub fn resolve_batch(
    lookup: &dyn VendorLookup,
    ouis: &[&str],
) -> Result<Vec<Option<String>>, LookupError> {
    if ouis.is_empty() {
        return Ok(Vec::new());
    }

    let records = lookup.query(&ouis.join(" "))?;
    if records.len() != ouis.len() {
        tracing::debug!(
            queried = ouis.len(),
            answered = records.len(),
            "vendor lookup answered a different number of ids"
        );
    }

    let mut names: HashMap<String, String> = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(vendor) = record.vendor {
            names
                .entry(record.oui.to_ascii_uppercase())
                .or_insert(vendor);
        }
    }

    Ok(ouis
        .iter()
        .map(|oui| names.get(&oui.to_ascii_uppercase()).cloned())
        .collect())
}
