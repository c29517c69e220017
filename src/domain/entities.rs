//! Domain entities: flat hierarchy records

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One edge of a hierarchy, expressed as a parent reference.
///
/// `parent == None` is the root sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchyRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl HierarchyRecord {
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
        }
    }

    pub fn child(id: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent.into()),
        }
    }
}

/// An ordered, read-only collection of hierarchy records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(rename = "record", default)]
    records: Vec<HierarchyRecord>,
}

impl From<Vec<HierarchyRecord>> for RecordSet {
    fn from(records: Vec<HierarchyRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<HierarchyRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = HierarchyRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl RecordSet {
    /// Parse records from TOML.
    ///
    /// Expects an array of tables named `record`, each with an `id` and an
    /// optional `parent`:
    ///
    /// ```toml
    /// [[record]]
    /// id = "a"
    ///
    /// [[record]]
    /// id = "b"
    /// parent = "a"
    /// ```
    pub fn parse(content: &str) -> Result<Self, RecordParseError> {
        toml::from_str(content).map_err(|e| RecordParseError {
            message: e.to_string(),
        })
    }

    pub fn records(&self) -> &[HierarchyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HierarchyRecord> {
        self.records.iter()
    }

    /// Records that start a hierarchy: parent is the root sentinel, or
    /// references an id not present in the set.
    pub fn roots(&self) -> Vec<&HierarchyRecord> {
        let ids: HashSet<&str> = self.records.iter().map(|r| r.id.as_str()).collect();
        self.records
            .iter()
            .filter(|r| match r.parent.as_deref() {
                None => true,
                Some(parent) => !ids.contains(parent),
            })
            .collect()
    }

    /// Report out-of-contract input. Issues are listed in record order.
    pub fn validate(&self) -> Vec<RecordIssue> {
        let mut issues = Vec::new();
        let ids: HashSet<&str> = self.records.iter().map(|r| r.id.as_str()).collect();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for record in &self.records {
            let count = seen.entry(record.id.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                issues.push(RecordIssue::DuplicateId(record.id.clone()));
            }

            match record.parent.as_deref() {
                Some(parent) if parent == record.id => {
                    issues.push(RecordIssue::SelfParent(record.id.clone()));
                }
                Some(parent) if !ids.contains(parent) => {
                    issues.push(RecordIssue::DanglingParent {
                        id: record.id.clone(),
                        parent: parent.to_string(),
                    });
                }
                _ => {}
            }
        }
        issues
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a HierarchyRecord;
    type IntoIter = std::slice::Iter<'a, HierarchyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Malformed-but-parseable input found by [`RecordSet::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    /// The id occurs more than once; later records overwrite earlier ones in a tree.
    DuplicateId(String),
    /// The parent references no record in the set.
    DanglingParent { id: String, parent: String },
    /// The record is its own parent.
    SelfParent(String),
}

impl std::fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordIssue::DuplicateId(id) => write!(f, "duplicate id: {id}"),
            RecordIssue::DanglingParent { id, parent } => {
                write!(f, "dangling parent: {id} -> {parent}")
            }
            RecordIssue::SelfParent(id) => write!(f, "self parent: {id}"),
        }
    }
}

/// Error parsing a record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordParseError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_toml_with_optional_parent_when_parsing_then_keeps_file_order() {
        let content = r#"
[[record]]
id = "a"

[[record]]
id = "b"
parent = "a"
"#;
        let set = RecordSet::parse(content).unwrap();

        assert_eq!(
            set.records(),
            &[HierarchyRecord::root("a"), HierarchyRecord::child("b", "a")]
        );
    }

    #[test]
    fn given_empty_content_when_parsing_then_returns_empty_set() {
        let set = RecordSet::parse("").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn given_record_without_id_when_parsing_then_errors() {
        let result = RecordSet::parse("[[record]]\nparent = \"a\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn given_dangling_parent_when_finding_roots_then_treats_it_as_root() {
        let set = RecordSet::from(vec![
            HierarchyRecord::root("a"),
            HierarchyRecord::child("b", "missing"),
            HierarchyRecord::child("c", "a"),
        ]);

        let roots: Vec<&str> = set.roots().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(roots, vec!["a", "b"]);
    }

    #[test]
    fn given_malformed_records_when_validating_then_reports_each_issue() {
        let set = RecordSet::from(vec![
            HierarchyRecord::root("a"),
            HierarchyRecord::child("a", "x"),
            HierarchyRecord::child("s", "s"),
            HierarchyRecord::root("a"),
        ]);

        assert_eq!(
            set.validate(),
            vec![
                RecordIssue::DuplicateId("a".into()),
                RecordIssue::DanglingParent {
                    id: "a".into(),
                    parent: "x".into()
                },
                RecordIssue::SelfParent("s".into()),
            ]
        );
    }

    #[test]
    fn given_well_formed_records_when_validating_then_no_issues() {
        let set = RecordSet::from(vec![
            HierarchyRecord::root("a"),
            HierarchyRecord::child("b", "a"),
        ]);
        assert!(set.validate().is_empty());
    }
}
