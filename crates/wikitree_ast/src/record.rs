//! Diagnostic records attached to nodes.

use serde::{Deserialize, Serialize};

use crate::{Language, NodeId};

/// Severity level for records.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Extraction failed for the subject.
    Error,
    /// Extraction produced a questionable result.
    Warning,
    /// Informational message.
    #[default]
    Info,
    /// Detailed trace output.
    Debug,
}

/// What a record is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum RecordSubject {
    /// A node of a syntax tree.
    Node { id: NodeId },
    /// Not bound to anything yet; adopted by whichever node stores it.
    Default,
    /// Some other entity (a page title, a dataset, ...).
    Foreign { name: String },
}

/// A diagnostic record produced while processing a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub subject: RecordSubject,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    pub message: String,

    /// Whether the record reports an error.
    #[serde(default)]
    pub is_error: bool,

    #[serde(default)]
    pub severity: Severity,
}

impl RecordEntry {
    /// Creates an informational record.
    pub fn new(subject: RecordSubject, message: impl Into<String>) -> Self {
        Self {
            subject,
            language: None,
            message: message.into(),
            is_error: false,
            severity: Severity::Info,
        }
    }

    /// Creates a record without a subject.
    pub fn unbound(message: impl Into<String>) -> Self {
        Self::new(RecordSubject::Default, message)
    }

    /// Marks the record as an error with the given severity.
    pub fn with_error(mut self, severity: Severity) -> Self {
        self.is_error = true;
        self.severity = severity;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Decides whether `node` keeps this record.
    ///
    /// Node-subject records are kept as they are, default-subject records are
    /// rebound to `node` with a language filled in, anything else is dropped.
    pub fn adopt_for(self, node: NodeId) -> Option<RecordEntry> {
        match self.subject {
            RecordSubject::Node { .. } => Some(self),
            RecordSubject::Default => Some(RecordEntry {
                subject: RecordSubject::Node { id: node },
                language: Some(self.language.unwrap_or_default()),
                ..self
            }),
            RecordSubject::Foreign { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_defaults() {
        let entry = RecordEntry::unbound("no infobox");
        assert_eq!(entry.subject, RecordSubject::Default);
        assert_eq!(entry.severity, Severity::Info);
        assert!(!entry.is_error);
        assert!(entry.language.is_none());
    }

    #[test]
    fn test_adopt_node_subject_unchanged() {
        let entry = RecordEntry::new(RecordSubject::Node { id: NodeId::new(4) }, "msg")
            .with_severity(Severity::Warning);
        let adopted = entry.clone().adopt_for(NodeId::new(9));
        assert_eq!(adopted, Some(entry));
    }

    #[test]
    fn test_adopt_default_subject_rebinds() {
        let entry = RecordEntry::unbound("bad date").with_error(Severity::Error);
        let adopted = entry.adopt_for(NodeId::new(2)).unwrap();

        assert_eq!(adopted.subject, RecordSubject::Node { id: NodeId::new(2) });
        assert_eq!(adopted.language, Some(Language::ENGLISH));
        assert_eq!(adopted.message, "bad date");
        assert!(adopted.is_error);
        assert_eq!(adopted.severity, Severity::Error);
    }

    #[test]
    fn test_adopt_keeps_explicit_language() {
        let entry = RecordEntry::unbound("x").with_language(Language::FRENCH);
        let adopted = entry.adopt_for(NodeId::new(0)).unwrap();
        assert_eq!(adopted.language, Some(Language::FRENCH));
    }

    #[test]
    fn test_adopt_foreign_subject_dropped() {
        let entry = RecordEntry::new(
            RecordSubject::Foreign {
                name: "dataset".into(),
            },
            "x",
        );
        assert!(entry.adopt_for(NodeId::new(0)).is_none());
    }

    #[test]
    fn test_record_serialization() {
        let entry = RecordEntry::new(RecordSubject::Node { id: NodeId::new(3) }, "hello");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["subject"]["kind"], "node");
        assert_eq!(json["subject"]["id"], 3);
        assert_eq!(json["severity"], "info");
        assert!(json.get("language").is_none());
    }
}
