//! Service container: settings and filesystem wired into the hierarchy service.

use std::sync::Arc;

use crate::application::services::HierarchyService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Services a single CLI invocation runs against.
pub struct ServiceContainer {
    /// Effective settings after layering
    pub settings: Arc<Settings>,

    /// Record loading and tree building
    pub hierarchy: HierarchyService,
}

impl ServiceContainer {
    /// Container reading record files from disk.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Container over an arbitrary [`FileSystem`].
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let hierarchy = HierarchyService::new(fs, Arc::clone(&settings));

        Self {
            settings,
            hierarchy,
        }
    }
}
