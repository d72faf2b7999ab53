use super::SiteConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Access to the persisted artifacts a switch reads and mutates: the site
/// configuration and the public sitemap.
pub trait Storage: Send + Sync {
    fn config_path(&self) -> &Path;
    fn public_dir(&self) -> &Path;
    fn sitemap_path(&self) -> PathBuf;

    fn load_site_config(&self) -> Result<Option<SiteConfig>>;
    fn save_site_config(&self, config: &SiteConfig) -> Result<()>;

    fn read_sitemap(&self) -> Result<Option<String>>;
    fn write_sitemap(&self, content: &str) -> Result<()>;
}
