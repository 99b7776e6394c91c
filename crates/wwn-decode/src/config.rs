//! Annotation configuration

use serde::{Deserialize, Serialize};

/// Tag placed before each descriptor appended to a line
pub const DEFAULT_TAG: &str = "   #";

/// Options controlling how decoded descriptors are added to text
///
/// Passed explicitly to the [`Annotator`](crate::annotate::Annotator);
/// nothing in this crate reads configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnnotateConfig {
    /// Drop lines that produced no descriptor
    #[serde(alias = "extract-WWN")]
    pub extract_only: bool,
    /// Text joining the line and each descriptor
    #[serde(alias = "separator")]
    pub tag: String,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            extract_only: false,
            tag: DEFAULT_TAG.to_string(),
        }
    }
}
