//! Address extraction from free-form text
//!
//! Addresses are picked out of pasted tables, CLI output and log lines, so
//! the extractor is deliberately narrow: a candidate must be a whole
//! alphanumeric run (nothing alphanumeric touching it on either side), made
//! only of hex digits, of exactly the right width, with a known IEEE
//! address type as its first digit.
//!
//! Separators are removed before scanning so that `50:06:0e:80:16:00:f3:00`
//! and `50-06-0e-80-16-00-f3-00` are found as well as the bare form.

use std::fmt;

/// Characters stripped from the text before scanning
const SEPARATORS: [char; 2] = ['-', ':'];

/// Width of an IEEE 64-bit address (types 1, 2 and 5)
pub const ADDRESS_DIGITS: usize = 16;

/// Width of an NAA registered-extended (type 6) address
pub const EXTENDED_ADDRESS_DIGITS: usize = 32;

/// IEEE/NAA address type, taken from the leading hex digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Type 1: IEEE 48-bit address behind three reserved digits
    IeeeStandard,
    /// Type 2: IEEE 48-bit address behind three vendor-specific digits
    IeeeExtended,
    /// Type 5: IEEE registered name (storage port WWN)
    Registered,
    /// Type 6: IEEE registered-extended name (logical unit NAA id)
    RegisteredExtended,
}

impl AddressType {
    /// Map a leading digit to an address type
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'1' => Some(Self::IeeeStandard),
            b'2' => Some(Self::IeeeExtended),
            b'5' => Some(Self::Registered),
            b'6' => Some(Self::RegisteredExtended),
            _ => None,
        }
    }

    /// The leading digit for this type
    pub fn digit(&self) -> char {
        match self {
            Self::IeeeStandard => '1',
            Self::IeeeExtended => '2',
            Self::Registered => '5',
            Self::RegisteredExtended => '6',
        }
    }
}

/// A candidate address borrowed from scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressToken<'a>(&'a str);

impl<'a> AddressToken<'a> {
    /// Wrap a string if it is a well-formed candidate address
    pub fn new(text: &'a str) -> Option<Self> {
        is_candidate(text).then_some(Self(text))
    }

    /// The hex digits of the address, as they appeared in the text
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Number of hex digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a token has at least [`ADDRESS_DIGITS`] digits
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Address type from the leading digit
    pub fn address_type(&self) -> AddressType {
        // Construction guarantees a valid type digit
        match AddressType::from_digit(self.0.as_bytes()[0]) {
            Some(t) => t,
            None => unreachable!("token without a type digit: {}", self.0),
        }
    }
}

impl fmt::Display for AddressToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn is_candidate(run: &str) -> bool {
    let bytes = run.as_bytes();
    let width_ok = match bytes.len() {
        ADDRESS_DIGITS => true,
        EXTENDED_ADDRESS_DIGITS => bytes[0] == b'6',
        _ => false,
    };
    width_ok
        && AddressType::from_digit(bytes[0]).is_some()
        && bytes.iter().all(u8::is_ascii_hexdigit)
}

/// Text prepared for address scanning
///
/// Holds the separator-stripped text so that [`ScannedText::addresses`] can
/// be called any number of times, each call starting a fresh scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedText {
    normalized: String,
}

impl ScannedText {
    /// Prepare a line for scanning
    ///
    /// Returns `None` for empty or whitespace-only input so callers can tell
    /// "nothing to look at" apart from "looked, found nothing".
    pub fn new(text: &str) -> Option<Self> {
        let normalized: String = text.chars().filter(|c| !SEPARATORS.contains(c)).collect();
        if normalized.trim().is_empty() {
            return None;
        }
        Some(Self { normalized })
    }

    /// Lazily iterate over the candidate addresses, left to right
    pub fn addresses(&self) -> Addresses<'_> {
        Addresses {
            text: &self.normalized,
            pos: 0,
        }
    }
}

/// Iterator over candidate addresses in a [`ScannedText`]
#[derive(Debug, Clone)]
pub struct Addresses<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Addresses<'a> {
    type Item = AddressToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        loop {
            while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphanumeric() {
                self.pos += 1;
            }
            if self.pos >= bytes.len() {
                return None;
            }

            let start = self.pos;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphanumeric() {
                self.pos += 1;
            }

            // Both ends sit next to ASCII bytes, so they are char boundaries
            if let Some(token) = AddressToken::new(&self.text[start..self.pos]) {
                return Some(token);
            }
        }
    }
}

/// Scan a line of text for candidate addresses
///
/// Convenience wrapper around [`ScannedText::new`].
pub fn scan(text: &str) -> Option<ScannedText> {
    ScannedText::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        scan(text)
            .map(|s| s.addresses().map(|t| t.as_str().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_input_is_no_result() {
        assert!(scan("").is_none());
        assert!(scan("   \t ").is_none());
        // Only separators left after stripping
        assert!(scan(" -:- ").is_none());
    }

    #[test]
    fn test_no_addresses_is_empty_success() {
        let scanned = scan("nothing to see here").unwrap();
        assert_eq!(scanned.addresses().count(), 0);
    }

    #[test]
    fn test_bare_address() {
        assert_eq!(
            tokens("G800 412575 port 8D 50060e8012311f73"),
            vec!["50060e8012311f73"]
        );
    }

    #[test]
    fn test_separators_are_stripped() {
        assert_eq!(tokens("50:06:0e:80:07:dc:88:a0"), vec!["50060e8007dc88a0"]);
        assert_eq!(tokens("50-06-0E-80-07-DC-88-A0"), vec!["50060E8007DC88A0"]);
    }

    #[test]
    fn test_tab_separated_columns() {
        assert_eq!(
            tokens("50060e801600f300\tHitachi\tVSP\t65779\t1A"),
            vec!["50060e801600f300"]
        );
    }

    #[test]
    fn test_wrong_width_rejected() {
        assert!(tokens("50060e801600f30").is_empty());
        assert!(tokens("50060e801600f3000").is_empty());
    }

    #[test]
    fn test_alphanumeric_neighbours_rejected() {
        assert!(tokens("x50060e801600f300").is_empty());
        assert!(tokens("50060e801600f300g").is_empty());
        assert!(tokens("Z50060e801600f300").is_empty());
    }

    #[test]
    fn test_punctuation_neighbours_accepted() {
        assert_eq!(tokens("(50060e801600f300)"), vec!["50060e801600f300"]);
        assert_eq!(tokens("wwn=50060e801600f300,"), vec!["50060e801600f300"]);
    }

    #[test]
    fn test_unknown_type_digit_rejected() {
        assert!(tokens("30060e801600f300").is_empty());
        assert!(tokens("a0060e801600f300").is_empty());
    }

    #[test]
    fn test_non_hex_run_rejected() {
        assert!(tokens("50060e801600g300").is_empty());
    }

    #[test]
    fn test_extended_width_only_for_type_6() {
        let naa = "60060e8007de8c000030de8c00000113";
        assert_eq!(tokens(naa), vec![naa]);
        assert!(tokens("50060e8007de8c000030de8c00000113").is_empty());
    }

    #[test]
    fn test_multiple_addresses_in_order() {
        assert_eq!(
            tokens("10000000c9a1b2c3 50060e801600f300 21000024ff3a4b5c"),
            vec!["10000000c9a1b2c3", "50060e801600f300", "21000024ff3a4b5c"]
        );
    }

    #[test]
    fn test_scan_is_restartable() {
        let scanned = scan("50060e801600f300 50060e8012311f73").unwrap();
        let first: Vec<_> = scanned.addresses().collect();
        let second: Vec<_> = scanned.addresses().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_non_ascii_neighbours() {
        assert_eq!(tokens("→50060e801600f300←"), vec!["50060e801600f300"]);
    }

    #[test]
    fn test_address_type() {
        let token = AddressToken::new("50060e801600f300").unwrap();
        assert_eq!(token.address_type(), AddressType::Registered);
        assert_eq!(token.address_type().digit(), '5');
        let token = AddressToken::new("10000000c9a1b2c3").unwrap();
        assert_eq!(token.address_type(), AddressType::IeeeStandard);
    }
}
