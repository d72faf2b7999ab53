use crate::domain::storage::Storage;
use crate::domain::{CheckResult, EmbedDescriptor, SiteConfig, ValidationReport};
use crate::error::Result;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Read-only post-switch validation. The loaded [`SiteConfig`] is injected
/// so every check works off the same snapshot; checks share no mutable
/// state and run concurrently.
pub struct ValidationService {
    store: Arc<dyn Storage>,
    config: SiteConfig,
}

impl ValidationService {
    pub fn new(store: Arc<dyn Storage>, config: SiteConfig) -> Self {
        Self { store, config }
    }

    pub async fn validate(&self) -> ValidationReport {
        let (config_file, game_files, seo, thumbnail, sitemap) = tokio::join!(
            self.check_config_file(),
            self.check_game_files(),
            self.check_seo_content(),
            self.check_thumbnail(),
            self.check_sitemap(),
        );

        ValidationReport::new(vec![config_file, game_files, seo, thumbnail, sitemap])
    }

    async fn check_config_file(&self) -> CheckResult {
        let name = "config file";
        if !self.store.config_path().exists() {
            return CheckResult::fail(name, "config file does not exist");
        }

        let required = [
            &self.config.main_game.name,
            &self.config.main_game.description,
            &self.config.seo.default_title,
            &self.config.seo.description,
        ];
        if required.iter().all(|field| !field.is_empty()) {
            CheckResult::pass(
                name,
                format!("game: {}", self.config.main_game.name),
            )
        } else {
            CheckResult::fail(name, "missing required fields")
        }
    }

    async fn check_game_files(&self) -> CheckResult {
        let name = "game files";
        match &self.config.main_game.embed {
            EmbedDescriptor::Local { path } => {
                let asset = self
                    .store
                    .public_dir()
                    .join(path.trim_start_matches('/'));
                let size = std::fs::metadata(&asset).map(|meta| meta.len());
                match size {
                    Ok(size) if size > 0 => CheckResult::pass(
                        name,
                        format!("{} ({:.2} KB)", asset.display(), size as f64 / 1024.0),
                    ),
                    Ok(_) => CheckResult::fail(name, format!("empty file: {}", asset.display())),
                    Err(_) => CheckResult::fail(
                        name,
                        format!("game files do not exist: {}", asset.display()),
                    ),
                }
            }
            EmbedDescriptor::Iframe { src } => match src.parse::<reqwest::Url>() {
                Ok(_) => CheckResult::pass(name, format!("iframe URL: {src}")),
                Err(_) => CheckResult::fail(name, format!("invalid iframe URL: {src}")),
            },
        }
    }

    /// Five sub-checks; the top-level check passes at three or more.
    async fn check_seo_content(&self) -> CheckResult {
        let seo = &self.config.seo;
        let mut score = 0;
        let max_score = 5;
        let mut notes = Vec::new();

        let title_len = seo.default_title.chars().count();
        if (30..=60).contains(&title_len) {
            score += 1;
        } else {
            notes.push(format!("title length {title_len} outside 30-60"));
        }

        let description_len = seo.description.chars().count();
        if (120..=160).contains(&description_len) {
            score += 1;
        } else {
            notes.push(format!("description length {description_len} outside 120-160"));
        }

        if !seo.keywords.is_empty() {
            score += 1;
        } else {
            notes.push("keywords are empty".to_string());
        }

        let open_graph_complete = !seo.open_graph.site_name.is_empty()
            && seo.open_graph.url.as_deref().is_some_and(|url| !url.is_empty());
        if open_graph_complete {
            score += 1;
        } else {
            notes.push("OpenGraph configuration incomplete".to_string());
        }

        if seo.canonical_base.starts_with("https://") {
            score += 1;
        } else {
            notes.push("canonical URL is not https".to_string());
        }

        let detail = if notes.is_empty() {
            format!("SEO score: {score}/{max_score}")
        } else {
            format!("SEO score: {score}/{max_score} ({})", notes.join("; "))
        };

        if score >= 3 {
            CheckResult::pass("seo content", detail)
        } else {
            CheckResult::fail("seo content", detail)
        }
    }

    /// Soft check: the thumbnail is optional, so absence is only noted.
    async fn check_thumbnail(&self) -> CheckResult {
        let name = "thumbnail";
        match &self.config.main_game.thumbnail {
            None => CheckResult::pass(name, "no thumbnail configured"),
            Some(thumbnail) => {
                let path = self
                    .store
                    .public_dir()
                    .join(thumbnail.trim_start_matches('/'));
                if path.exists() {
                    CheckResult::pass(name, format!("{}", path.display()))
                } else {
                    CheckResult::pass(
                        name,
                        format!("thumbnail missing (recommended): {}", path.display()),
                    )
                }
            }
        }
    }

    async fn check_sitemap(&self) -> CheckResult {
        let name = "sitemap";
        match self.store.read_sitemap() {
            Ok(Some(content)) => {
                if content.contains(&self.config.seo.canonical_base) {
                    CheckResult::pass(name, "sitemap contains canonical base")
                } else {
                    CheckResult::fail(name, "sitemap does not reference canonical base")
                }
            }
            Ok(None) => CheckResult::fail(name, "sitemap file does not exist"),
            Err(error) => CheckResult::fail(name, format!("sitemap unreadable: {error}")),
        }
    }

    /// Runs validation and writes a markdown report next to the working
    /// directory. Returns the report and the file it was written to.
    pub async fn write_report(&self) -> Result<(ValidationReport, PathBuf)> {
        let report = self.validate().await;
        let path = PathBuf::from(format!(
            "validation-report-{}.md",
            Utc::now().format("%Y-%m-%dT%H-%M-%S")
        ));

        tokio::fs::write(&path, self.render_report(&report)).await?;
        info!("Detailed report saved: {}", path.display());
        Ok((report, path))
    }

    fn render_report(&self, report: &ValidationReport) -> String {
        let game = &self.config.main_game;
        let seo = &self.config.seo;
        let mut lines = vec![
            "# Game Switch Validation Report".to_string(),
            format!("Generated at: {}", Utc::now().to_rfc3339()),
            String::new(),
            "## Game Configuration".to_string(),
            format!("- Game Name: {}", game.name),
            format!("- Game ID: {}", game.id),
            format!("- Category: {}", game.seo_content.category),
            format!("- Embed Type: {}", embed_kind(&game.embed)),
            format!("- Domain: {}", seo.domain),
            String::new(),
            "## SEO Configuration".to_string(),
            format!("- Page Title: {}", seo.default_title),
            format!("- Title Length: {} characters", seo.default_title.chars().count()),
            format!(
                "- Page Description: {}...",
                seo.description.chars().take(100).collect::<String>()
            ),
            format!(
                "- Description Length: {} characters",
                seo.description.chars().count()
            ),
            format!("- Keywords Count: {}", seo.keywords.len()),
            String::new(),
            "## Validation Results".to_string(),
        ];

        for check in &report.checks {
            let mark = if check.passed { "x" } else { " " };
            lines.push(format!("- [{mark}] {}: {}", check.name, check.detail));
        }
        lines.push(format!(
            "- Overall Status: {} ({}/{})",
            if report.passed() { "PASSED" } else { "FAILED" },
            report.score,
            report.max_score
        ));

        lines.join("\n")
    }

    /// Quick health check: prints the current state without scoring.
    pub fn quick_check(&self) {
        let game = &self.config.main_game;
        info!("Current game: {}", game.name);
        info!("Domain: {}", self.config.seo.canonical_base);
        info!("Embed method: {}", embed_kind(&game.embed));

        if let EmbedDescriptor::Local { path } = &game.embed {
            let asset = self.store.public_dir().join(path.trim_start_matches('/'));
            info!(
                "Game files: {}",
                if asset.exists() { "present" } else { "missing" }
            );
        }
        info!(
            "Config file: {}",
            if self.store.config_path().exists() {
                "present"
            } else {
                "missing"
            }
        );
        info!(
            "Sitemap: {}",
            if self.store.sitemap_path().exists() {
                "present"
            } else {
                "needs generation"
            }
        );
    }
}

fn embed_kind(embed: &EmbedDescriptor) -> &'static str {
    match embed {
        EmbedDescriptor::Iframe { .. } => "iframe",
        EmbedDescriptor::Local { .. } => "local",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::Storage;
    use crate::infrastructure::FileSystemStore;
    use crate::services::builder::{build, SwitchOptions};
    use std::fs;
    use tempfile::TempDir;

    fn sample_config(name: &str) -> SiteConfig {
        build(&SwitchOptions {
            name: name.to_string(),
            ..SwitchOptions::default()
        })
        .unwrap()
    }

    fn service_with(tmp: &TempDir, config: SiteConfig) -> ValidationService {
        let store = Arc::new(FileSystemStore::new(
            tmp.path().join("config/main-game.json"),
            tmp.path().join("public"),
        ));
        ValidationService::new(store, config)
    }

    fn write_full_state(tmp: &TempDir, config: &SiteConfig) {
        let store = FileSystemStore::new(
            tmp.path().join("config/main-game.json"),
            tmp.path().join("public"),
        );
        store.save_site_config(config).unwrap();

        if let EmbedDescriptor::Local { path } = &config.main_game.embed {
            let asset = tmp.path().join("public").join(path.trim_start_matches('/'));
            fs::create_dir_all(asset.parent().unwrap()).unwrap();
            fs::write(asset, b"<html>game</html>").unwrap();
        }
        if let Some(thumbnail) = &config.main_game.thumbnail {
            let image = tmp
                .path()
                .join("public")
                .join(thumbnail.trim_start_matches('/'));
            fs::create_dir_all(image.parent().unwrap()).unwrap();
            fs::write(image, b"jpg").unwrap();
        }

        let sitemap = format!(
            "<?xml version=\"1.0\"?><urlset><url><loc>{}/</loc></url></urlset>",
            config.seo.canonical_base
        );
        store.write_sitemap(&sitemap).unwrap();
    }

    #[tokio::test]
    async fn complete_state_passes_every_check() {
        let tmp = TempDir::new().unwrap();
        let config = sample_config("Validated Game");
        write_full_state(&tmp, &config);

        let report = service_with(&tmp, config).validate().await;
        assert!(report.passed(), "checks: {:?}", report.checks);
        assert_eq!(report.score, 5);
        assert_eq!(report.max_score, 5);
    }

    #[tokio::test]
    async fn seo_subscore_is_five_of_five_for_well_formed_config() {
        let tmp = TempDir::new().unwrap();
        let mut config = sample_config("Game");
        config.seo.default_title = "t".repeat(45);
        config.seo.description = "d".repeat(140);
        // keywords, OpenGraph and https canonical come from the builder.
        write_full_state(&tmp, &config);

        let check = service_with(&tmp, config).check_seo_content().await;
        assert!(check.passed);
        assert!(check.detail.contains("5/5"), "detail: {}", check.detail);
    }

    #[tokio::test]
    async fn seo_check_fails_below_three_subchecks() {
        let tmp = TempDir::new().unwrap();
        let mut config = sample_config("Game");
        config.seo.default_title = "short".to_string();
        config.seo.description = "short".to_string();
        config.seo.keywords.clear();
        config.seo.open_graph.url = None;
        config.seo.canonical_base = "http://insecure.example".to_string();

        let check = service_with(&tmp, config).check_seo_content().await;
        assert!(!check.passed);
        assert!(check.detail.contains("0/5"));
    }

    #[tokio::test]
    async fn missing_sitemap_fails_sitemap_check() {
        let tmp = TempDir::new().unwrap();
        let config = sample_config("Game");
        let check = service_with(&tmp, config).check_sitemap().await;
        assert!(!check.passed);
    }

    #[tokio::test]
    async fn missing_local_asset_fails_game_files_check() {
        let tmp = TempDir::new().unwrap();
        let config = sample_config("Game");
        let check = service_with(&tmp, config).check_game_files().await;
        assert!(!check.passed);
    }

    #[tokio::test]
    async fn iframe_url_only_needs_to_parse() {
        let tmp = TempDir::new().unwrap();
        let mut config = sample_config("Game");
        config.main_game.embed = EmbedDescriptor::Iframe {
            src: "https://games.example.com/embed".to_string(),
        };
        let check = service_with(&tmp, config).check_game_files().await;
        assert!(check.passed);

        let mut broken = sample_config("Game");
        broken.main_game.embed = EmbedDescriptor::Iframe {
            src: "not a url".to_string(),
        };
        let check = service_with(&tmp, broken).check_game_files().await;
        assert!(!check.passed);
    }

    #[tokio::test]
    async fn missing_thumbnail_is_a_soft_pass() {
        let tmp = TempDir::new().unwrap();
        let config = sample_config("Game");
        let check = service_with(&tmp, config).check_thumbnail().await;
        assert!(check.passed);
        assert!(check.detail.contains("missing"));
    }

    #[tokio::test]
    async fn report_lists_every_check_and_overall_status() {
        let tmp = TempDir::new().unwrap();
        let config = sample_config("Reported Game");
        write_full_state(&tmp, &config);

        let service = service_with(&tmp, config);
        let report = service.validate().await;
        let rendered = service.render_report(&report);
        assert!(rendered.contains("# Game Switch Validation Report"));
        assert!(rendered.contains("- Game Name: Reported Game"));
        for check in &report.checks {
            assert!(rendered.contains(&check.name));
        }
        assert!(rendered.contains("Overall Status: PASSED"));
    }
}
