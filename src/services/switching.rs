use crate::domain::storage::Storage;
use crate::domain::{GameRecord, SiteConfig};
use crate::error::{Result, SwitchError};
use crate::services::backup::BackupService;
use crate::services::{builder, content, sitemap};
use crate::services::builder::SwitchOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs a switch as a strictly ordered pipeline: validate, backup, copy
/// assets, write config, then the advisory sitemap and SEO content steps.
/// The first failing mutation stage aborts the whole operation; manual
/// recovery goes through `restore`.
pub struct SwitchService {
    store: Arc<dyn Storage>,
    backups: BackupService,
}

impl SwitchService {
    pub fn new(store: Arc<dyn Storage>, backups: BackupService) -> Self {
        Self { store, backups }
    }

    pub async fn switch(&self, options: &SwitchOptions) -> Result<SiteConfig> {
        info!("Starting main game switch");

        if let Some(upload_dir) = &options.upload_dir {
            if !upload_dir.exists() {
                return Err(SwitchError::Validation(format!(
                    "upload directory does not exist: {}",
                    upload_dir.display()
                )));
            }
        }

        let config = builder::build(options)?;

        if options.dry_run {
            info!("Dry run - changes to be made:");
            println!("{}", serde_json::to_string_pretty(&config)?);
            println!("{}", content::simple_content(&config.main_game));
            return Ok(config);
        }

        if options.backup {
            self.backups.create().await?;
        }

        if let Some(upload_dir) = &options.upload_dir {
            self.copy_game_assets(upload_dir, &config.main_game.slug)?;
        }

        self.store.save_site_config(&config)?;
        info!("Configuration file updated");

        // Advisory stages: a failure here degrades to a warning, the
        // switch itself already succeeded.
        if let Err(error) = self.regenerate_sitemap(&config) {
            warn!("Sitemap regeneration failed: {error}");
        }
        self.report_seo_content(&config.main_game);

        info!("Game switch completed: {}", config.main_game.name);
        info!("Domain: {}", config.seo.canonical_base);
        Ok(config)
    }

    fn copy_game_assets(&self, upload_dir: &Path, slug: &str) -> Result<()> {
        let target = self.store.public_dir().join("game").join(slug);
        info!(
            "Copying game files from {} to {}",
            upload_dir.display(),
            target.display()
        );

        copy_dir_recursive(upload_dir, &target)?;

        if !target.join("index.html").exists() {
            warn!("index.html not found in {}", target.display());
        }
        Ok(())
    }

    fn regenerate_sitemap(&self, config: &SiteConfig) -> Result<()> {
        let xml = sitemap::render(config);
        self.store.write_sitemap(&xml)?;
        info!("Sitemap regenerated");
        Ok(())
    }

    fn report_seo_content(&self, game: &GameRecord) {
        let generated = content::generate(game);
        info!(
            "SEO content stats: {} words, {:.2}% keyword density",
            generated.word_count, generated.keyword_density
        );
    }
}

fn copy_dir_recursive(source: &Path, target: &Path) -> Result<()> {
    std::fs::create_dir_all(target)?;
    let mut pending = vec![(source.to_path_buf(), target.to_path_buf())];

    while let Some((src, dst)) = pending.pop() {
        for entry in std::fs::read_dir(&src)? {
            let entry = entry?;
            let dest = dst.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                std::fs::create_dir_all(&dest)?;
                pending.push((entry.path(), dest));
            } else {
                std::fs::copy(entry.path(), dest)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemStore;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        config_path: PathBuf,
        public_dir: PathBuf,
        backup_dir: PathBuf,
        service: SwitchService,
    }

    fn fixture() -> Fixture {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config/main-game.json");
        let public_dir = tmp.path().join("public");
        let backup_dir = tmp.path().join("backups");

        let store = Arc::new(FileSystemStore::new(&config_path, &public_dir));
        let backups = BackupService::new(&backup_dir, vec![config_path.clone()]);
        let service = SwitchService::new(store, backups);

        Fixture {
            _tmp: tmp,
            config_path,
            public_dir,
            backup_dir,
            service,
        }
    }

    fn options(name: &str) -> SwitchOptions {
        SwitchOptions {
            name: name.to_string(),
            ..SwitchOptions::default()
        }
    }

    #[tokio::test]
    async fn dry_run_mutates_nothing() {
        let fx = fixture();
        let mut opts = options("Test Game");
        opts.dry_run = true;

        let config = fx.service.switch(&opts).await.unwrap();
        assert_eq!(config.main_game.slug, "test-game");
        assert!(!fx.config_path.exists());
        assert!(!fx.backup_dir.exists());
        assert!(!fx.public_dir.join("sitemap.xml").exists());
    }

    #[tokio::test]
    async fn switch_writes_config_sitemap_and_backup() {
        let fx = fixture();
        fs::create_dir_all(fx.config_path.parent().unwrap()).unwrap();
        fs::write(&fx.config_path, b"{\"old\":true}").unwrap();

        fx.service.switch(&options("New Game")).await.unwrap();

        let written = fs::read_to_string(&fx.config_path).unwrap();
        assert!(written.contains("\"slug\": \"new-game\""));

        let sitemap = fs::read_to_string(fx.public_dir.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://example.net/"));

        // The pre-switch config was snapshotted.
        let backups: Vec<_> = fs::read_dir(&fx.backup_dir).unwrap().collect();
        assert_eq!(backups.len(), 1);
    }

    #[tokio::test]
    async fn no_backup_flag_skips_snapshot() {
        let fx = fixture();
        let mut opts = options("New Game");
        opts.backup = false;

        fx.service.switch(&opts).await.unwrap();
        assert!(fx.config_path.exists());
        assert!(!fx.backup_dir.exists());
    }

    #[tokio::test]
    async fn upload_dir_is_copied_into_public_game_dir() {
        let fx = fixture();
        let upload = fx._tmp.path().join("upload");
        fs::create_dir_all(upload.join("assets")).unwrap();
        fs::write(upload.join("index.html"), b"<html></html>").unwrap();
        fs::write(upload.join("assets/app.js"), b"//js").unwrap();

        let mut opts = options("Uploaded Game");
        opts.upload_dir = Some(upload);
        fx.service.switch(&opts).await.unwrap();

        let target = fx.public_dir.join("game/uploaded-game");
        assert!(target.join("index.html").exists());
        assert!(target.join("assets/app.js").exists());
    }

    #[tokio::test]
    async fn missing_upload_dir_aborts_before_mutation() {
        let fx = fixture();
        let mut opts = options("Broken");
        opts.upload_dir = Some(fx._tmp.path().join("does-not-exist"));

        let err = fx.service.switch(&opts).await.unwrap_err();
        assert!(matches!(err, SwitchError::Validation(_)));
        assert!(!fx.config_path.exists());
        assert!(!fx.backup_dir.exists());
    }
}
