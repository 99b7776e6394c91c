//! Line annotation
//!
//! Decodes a whole block of text, resolves every non-storage OUI with one
//! vendor lookup, and appends the descriptors to the lines they came from.

use std::fmt;

use serde::Serialize;

use crate::config::AnnotateConfig;
use crate::decoder::{decode_text, resolve_lines};
use crate::error::LookupError;
use crate::vendor::VendorLookup;

/// Receiver for user-facing status messages
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Notifier that logs messages at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// One input line with the descriptors decoded from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    /// The line as given
    pub line: String,
    /// Descriptors in discovery order
    pub descriptors: Vec<String>,
}

impl AnnotatedLine {
    /// The line followed by `tag` before each descriptor
    pub fn render(&self, tag: &str) -> String {
        let mut out = self.line.clone();
        for descriptor in &self.descriptors {
            out.push_str(tag);
            out.push_str(descriptor);
        }
        out
    }
}

/// Result of annotating a block of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Output lines (without dropped lines in extract-only mode)
    pub lines: Vec<AnnotatedLine>,
    /// Total number of descriptors appended
    pub decoded: usize,
    tag: String,
}

impl Annotation {
    /// Status message reported to the notifier
    pub fn summary(&self) -> String {
        format!("{} OUI converted", self.decoded)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.render(&self.tag))?;
        }
        Ok(())
    }
}

/// Annotates text with decoded WWN descriptors
pub struct Annotator<'a> {
    config: &'a AnnotateConfig,
    lookup: &'a dyn VendorLookup,
    notifier: &'a dyn Notifier,
}

impl<'a> Annotator<'a> {
    /// Create an annotator
    pub fn new(
        config: &'a AnnotateConfig,
        lookup: &'a dyn VendorLookup,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            config,
            lookup,
            notifier,
        }
    }

    /// Annotate a sequence of lines
    ///
    /// The vendor lookup is called at most once, with the OUIs of every
    /// line. A lookup failure aborts the whole batch.
    pub fn annotate_lines<I, S>(&self, lines: I) -> Result<Annotation, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let decodes: Vec<_> = lines
            .iter()
            .map(|line| decode_text(line).unwrap_or_default())
            .collect();
        let resolved = resolve_lines(&decodes, self.lookup)?;

        let mut decoded = 0;
        let mut output = Vec::with_capacity(lines.len());
        for (line, descriptors) in lines.into_iter().zip(resolved) {
            decoded += descriptors.len();
            if self.config.extract_only && descriptors.is_empty() {
                continue;
            }
            output.push(AnnotatedLine { line, descriptors });
        }

        let annotation = Annotation {
            lines: output,
            decoded,
            tag: self.config.tag.clone(),
        };
        tracing::debug!(lines = annotation.lines.len(), decoded, "annotated input");
        self.notifier.notify(&annotation.summary());
        Ok(annotation)
    }

    /// Annotate a block of text, one line at a time
    pub fn annotate(&self, text: &str) -> Result<Annotation, LookupError> {
        self.annotate_lines(text.lines())
    }
}
