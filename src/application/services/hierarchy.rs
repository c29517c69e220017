//! Hierarchy service
//!
//! Loads flat record files and builds nested trees from them.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{RecordIssue, RecordSet, Tree, TreeBuilder};
use crate::infrastructure::traits::FileSystem;

/// Output from building a hierarchy.
#[derive(Debug, Clone)]
pub struct HierarchyOutput {
    /// Records as loaded, in file order
    pub records: RecordSet,
    /// Advisory issues found in the records
    pub issues: Vec<RecordIssue>,
    /// Parent id the tree was built from (`None` = root sentinel)
    pub root: Option<String>,
    /// The built tree
    pub tree: Tree,
}

/// Service for loading record files and building trees.
pub struct HierarchyService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl HierarchyService {
    /// Create a new hierarchy service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read and parse a record file.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<RecordSet> {
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("file not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read records", path)?;

        let records = RecordSet::parse(&content).map_err(|e| ApplicationError::InvalidRecords {
            path: path.to_path_buf(),
            message: e.message,
        })?;
        debug!("load: {} records", records.len());
        Ok(records)
    }

    /// Load a record file and report its issues.
    pub fn check(&self, path: &Path) -> ApplicationResult<Vec<RecordIssue>> {
        let records = self.load(path)?;
        Ok(records.validate())
    }

    /// Load a record file and build the tree below `root`.
    ///
    /// `root` overrides the configured root; pass `None` to use the setting.
    /// With `strict` configured, any validation issue aborts the build.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, path: &Path, root: Option<&str>) -> ApplicationResult<HierarchyOutput> {
        let records = self.load(path)?;
        let issues = records.validate();

        if !issues.is_empty() {
            if self.settings.strict {
                return Err(ApplicationError::MalformedHierarchy {
                    path: path.to_path_buf(),
                    issues,
                });
            }
            for issue in &issues {
                warn!("{}: {}", path.display(), issue);
            }
        }

        let root = root.or(self.settings.root.as_deref()).map(str::to_string);
        let tree = TreeBuilder::from_set(&records).build(root.as_deref())?;
        debug!("build: {} nodes, depth {}", tree.node_count(), tree.depth());

        Ok(HierarchyOutput {
            records,
            issues,
            root,
            tree,
        })
    }
}
