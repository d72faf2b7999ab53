use crate::domain::storage::Storage;
use crate::domain::SiteConfig;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed storage for the configuration artifact and sitemap.
/// The config is kept as pretty-printed JSON so manual diffs against
/// backups stay readable.
#[derive(Clone)]
pub struct FileSystemStore {
    config_path: PathBuf,
    public_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(config_path: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            public_dir: public_dir.into(),
        }
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    fn sitemap_path(&self) -> PathBuf {
        self.public_dir.join("sitemap.xml")
    }

    fn load_site_config(&self) -> Result<Option<SiteConfig>> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }

    fn save_site_config(&self, config: &SiteConfig) -> Result<()> {
        Self::ensure_parent(&self.config_path)?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }

    fn read_sitemap(&self) -> Result<Option<String>> {
        let path = self.sitemap_path();
        if path.exists() {
            Ok(Some(fs::read_to_string(path)?))
        } else {
            Ok(None)
        }
    }

    fn write_sitemap(&self, content: &str) -> Result<()> {
        let path = self.sitemap_path();
        Self::ensure_parent(&path)?;
        fs::write(path, content)?;
        Ok(())
    }
}
