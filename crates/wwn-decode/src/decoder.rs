//! Address decoding pipeline
//!
//! Ties the stages together for a single address and for a line of text:
//! classify, route by vendor, resolve the model, rebuild serial and port.
//! OUIs that cannot be decoded locally are carried as
//! [`Decoded::Vendor`] until a caller resolves them in one batch.

use crate::address::{AddressToken, ScannedText};
use crate::error::LookupError;
use crate::layout::{DecodedFields, WwnFields};
use crate::models::{ModelDatabase, ModelFamily};
use crate::serial::StoragePort;
use crate::vendor::{resolve_batch, Gate, VendorLookup, STORAGE_VENDOR};

/// Tag used by [`describe`] when none is given
pub const DEFAULT_DESCRIBE_TAG: &str = "#";

/// Outcome of decoding one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Storage array port, fully described
    Descriptor(String),
    /// OUI awaiting the vendor lookup
    Vendor(String),
}

/// Descriptor reported for the legacy DF product line
pub fn unsupported_df_descriptor() -> String {
    format!("{STORAGE_VENDOR} Unsupported DF system")
}

/// Decode a single candidate address
///
/// Returns `None` when the address fits no known layout, and for storage
/// logical unit ids, which name no port.
pub fn decode_token(token: AddressToken<'_>) -> Option<Decoded> {
    let fields = DecodedFields::classify(token)?;
    match Gate::route(fields) {
        Gate::Lookup(oui) => Some(Decoded::Vendor(oui.to_string())),
        Gate::Storage(DecodedFields::Wwn(f)) => Some(decode_port(f)),
        Gate::Storage(DecodedFields::Naa(f)) => {
            tracing::debug!(model = f.model_code(), "skipping storage logical unit id");
            None
        }
    }
}

fn decode_port(fields: WwnFields<'_>) -> Decoded {
    let Some(model) = ModelDatabase::by_hex(fields.model) else {
        tracing::debug!(model = fields.model, "unknown model code, deferring to vendor lookup");
        return Decoded::Vendor(fields.oui.to_string());
    };

    if model.family == ModelFamily::LegacyDf {
        return Decoded::Descriptor(unsupported_df_descriptor());
    }

    StoragePort::new(model, fields.serial_hex, fields.cluster, fields.port).map_or_else(
        || Decoded::Vendor(fields.oui.to_string()),
        |port| Decoded::Descriptor(port.to_string()),
    )
}

/// Decode every address in a line of text, in order of appearance
///
/// Returns `None` for empty or whitespace-only input.
pub fn decode_text(text: &str) -> Option<Vec<Decoded>> {
    let scanned = ScannedText::new(text)?;
    Some(scanned.addresses().filter_map(decode_token).collect())
}

/// Resolve pending vendors across many lines with a single lookup call
///
/// Each line keeps its discovery order; OUIs the lookup cannot name are
/// left out.
pub fn resolve_lines(
    lines: &[Vec<Decoded>],
    lookup: &dyn VendorLookup,
) -> Result<Vec<Vec<String>>, LookupError> {
    let pending: Vec<&str> = lines
        .iter()
        .flatten()
        .filter_map(|d| match d {
            Decoded::Vendor(oui) => Some(oui.as_str()),
            Decoded::Descriptor(_) => None,
        })
        .collect();

    let mut names = resolve_batch(lookup, &pending)?.into_iter();

    Ok(lines
        .iter()
        .map(|decodes| {
            decodes
                .iter()
                .filter_map(|d| match d {
                    Decoded::Descriptor(text) => Some(text.clone()),
                    Decoded::Vendor(_) => names.next().flatten(),
                })
                .collect()
        })
        .collect())
}

/// Decode one line into its descriptors
///
/// `Ok(None)` means the input was empty; `Ok(Some(vec![]))` means it was
/// looked at and nothing decoded.
pub fn decode_line(
    text: &str,
    lookup: &dyn VendorLookup,
) -> Result<Option<Vec<String>>, LookupError> {
    let Some(decodes) = decode_text(text) else {
        return Ok(None);
    };
    let mut resolved = resolve_lines(&[decodes], lookup)?;
    Ok(resolved.pop())
}

/// Decode one line into a single tagged string such as `# a # b`
///
/// Returns `None` when nothing in the line decoded.
pub fn describe(
    text: &str,
    lookup: &dyn VendorLookup,
    tag: Option<&str>,
) -> Result<Option<String>, LookupError> {
    let tag = tag.unwrap_or(DEFAULT_DESCRIBE_TAG);
    let descriptors = decode_line(text, lookup)?.unwrap_or_default();
    if descriptors.is_empty() {
        return Ok(None);
    }
    Ok(Some(format!(
        "{tag} {}",
        descriptors.join(&format!(" {tag} "))
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::VendorRecord;

    fn offline(_: &str) -> Result<Vec<VendorRecord>, LookupError> {
        Err(LookupError::Unavailable("offline".into()))
    }

    fn registry(ouis: &str) -> Result<Vec<VendorRecord>, LookupError> {
        Ok(ouis
            .split_whitespace()
            .map(|oui| match oui.to_ascii_uppercase().as_str() {
                "0060E8" => VendorRecord::resolved(oui, "Hitachi, Ltd."),
                "0000C9" => VendorRecord::resolved(oui, "Emulex Corporation"),
                "00A098" => VendorRecord::resolved(oui, "NetApp"),
                _ => VendorRecord::unresolved(oui),
            })
            .collect())
    }

    fn decode(address: &str) -> Option<Decoded> {
        decode_token(AddressToken::new(address)?)
    }

    #[test]
    fn test_decode_vsp() {
        assert_eq!(
            decode("50060e801600f300"),
            Some(Decoded::Descriptor("Hitachi VSP SN:65779 Port:1A".into()))
        );
    }

    #[test]
    fn test_decode_legacy_df() {
        assert_eq!(
            decode("50060e8010253050"),
            Some(Decoded::Descriptor("Hitachi Unsupported DF system".into()))
        );
    }

    #[test]
    fn test_unknown_model_goes_to_lookup() {
        assert_eq!(
            decode("50060e8099001234"),
            Some(Decoded::Vendor("0060e8".into()))
        );
    }

    #[test]
    fn test_other_vendor_goes_to_lookup() {
        assert_eq!(
            decode("500a098188a8b7c4"),
            Some(Decoded::Vendor("00a098".into()))
        );
    }

    #[test]
    fn test_unclassified_token_is_dropped() {
        assert_eq!(decode("60060e801600f300"), None);
    }

    #[test]
    fn test_storage_naa_is_dropped() {
        assert_eq!(decode("60060e8007de8c000030de8c00000113"), None);
    }

    #[test]
    fn test_other_vendor_naa_goes_to_lookup() {
        assert_eq!(
            decode("600a098038303053453f463045727a51"),
            Some(Decoded::Vendor("00a098".into()))
        );
    }

    #[test]
    fn test_hba_addresses_are_dropped() {
        assert_eq!(decode("10000000c9a1b2c3"), None);
        assert_eq!(decode("21000024ff3a4b5c"), None);
    }

    #[test]
    fn test_decode_text_empty() {
        assert_eq!(decode_text(""), None);
        assert_eq!(decode_text("  "), None);
        assert_eq!(decode_text("no addresses"), Some(vec![]));
    }

    #[test]
    fn test_decode_line_without_vendors_skips_lookup() {
        let result = decode_line("VSP 65779 1A 50060e801600f300", &offline).unwrap();
        assert_eq!(result, Some(vec!["Hitachi VSP SN:65779 Port:1A".to_string()]));
    }

    #[test]
    fn test_decode_line_keeps_discovery_order() {
        let result = decode_line("500a098188a8b7c4 50060e801600f300", &registry).unwrap();
        assert_eq!(
            result,
            Some(vec![
                "NetApp".to_string(),
                "Hitachi VSP SN:65779 Port:1A".to_string(),
            ])
        );
    }

    #[test]
    fn test_decode_line_omits_unresolved_vendor() {
        let result = decode_line("50123456789abcde", &registry).unwrap();
        assert_eq!(result, Some(vec![]));
    }

    #[test]
    fn test_decode_line_propagates_lookup_failure() {
        assert_eq!(
            decode_line("500a098188a8b7c4", &offline),
            Err(LookupError::Unavailable("offline".into()))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe("50060e801600f300 500a098188a8b7c4", &registry, None).unwrap(),
            Some("# Hitachi VSP SN:65779 Port:1A # NetApp".to_string())
        );
        assert_eq!(
            describe("50060e801600f300", &registry, Some("|")).unwrap(),
            Some("| Hitachi VSP SN:65779 Port:1A".to_string())
        );
        assert_eq!(describe("nothing", &registry, None).unwrap(), None);
        assert_eq!(describe("", &registry, None).unwrap(), None);
    }

    #[test]
    fn test_resolve_lines_single_batch() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let lookup = |ouis: &str| {
            calls.set(calls.get() + 1);
            registry(ouis)
        };
        let lines = vec![
            decode_text("50000000c9a1b2c3").unwrap(),
            decode_text("50060e801600f300 10000000c9a1b2c3").unwrap(),
            decode_text("500a098188a8b7c4").unwrap(),
        ];
        let resolved = resolve_lines(&lines, &lookup).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(
            resolved,
            vec![
                vec!["Emulex Corporation".to_string()],
                vec!["Hitachi VSP SN:65779 Port:1A".to_string()],
                vec!["NetApp".to_string()],
            ]
        );
    }
}
