use crate::config::cli::{Command, EmbedArg};
use crate::config::Config;
use crate::domain::storage::Storage;
use crate::error::{Result, SwitchError};
use crate::infrastructure::FileSystemStore;
use crate::services::backup::BackupService;
use crate::services::builder::SwitchOptions;
use crate::services::switching::SwitchService;
use crate::services::validation::ValidationService;
use crate::services::{sitemap, sitemap::SitemapSubmitter};
use std::sync::Arc;
use tracing::{error, info, warn};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let config = Config::new()?;
    let store: Arc<dyn Storage> = Arc::new(FileSystemStore::new(
        config.args.config_path.clone(),
        config.args.public_dir.clone(),
    ));
    let backups = BackupService::new(
        config.args.backup_dir.clone(),
        vec![config.args.config_path.clone()],
    );

    match &config.args.command {
        Command::Switch {
            name,
            description,
            upload,
            embed,
            iframe,
            keywords,
            category,
            domain,
            dry_run,
            no_backup,
        } => {
            let options = SwitchOptions {
                name: name.clone(),
                slug: None,
                description: description.clone(),
                keywords: keywords.clone(),
                upload_dir: upload.clone(),
                iframe_src: iframe.clone(),
                embed_iframe: *embed == EmbedArg::Iframe,
                category: category.clone(),
                domain: domain.clone(),
                dry_run: *dry_run,
                backup: !*no_backup,
            };

            if !options.dry_run {
                config.ensure_directories()?;
            }
            SwitchService::new(store, backups).switch(&options).await?;
            Ok(0)
        }

        Command::ListBackups => {
            let timestamps = backups.list()?;
            if timestamps.is_empty() {
                info!("No backups available");
            } else {
                info!("Available backups:");
                for (index, timestamp) in timestamps.iter().enumerate() {
                    println!("  {}. {timestamp}", index + 1);
                }
            }
            Ok(0)
        }

        Command::Restore { timestamp } => {
            backups.restore(timestamp).await?;
            info!("Backup restoration completed");
            Ok(0)
        }

        Command::Validate { report, quick } => {
            let site_config = store.load_site_config()?.ok_or_else(|| {
                SwitchError::NotFound(format!(
                    "site configuration not found: {}",
                    config.args.config_path.display()
                ))
            })?;
            let validator = ValidationService::new(store.clone(), site_config);

            if *quick {
                validator.quick_check();
                return Ok(0);
            }

            let result = if *report {
                let (result, path) = validator.write_report().await?;
                info!("Report written to {}", path.display());
                result
            } else {
                validator.validate().await
            };

            for check in &result.checks {
                if check.passed {
                    info!("[pass] {}: {}", check.name, check.detail);
                } else {
                    warn!("[fail] {}: {}", check.name, check.detail);
                }
            }

            if result.passed() {
                info!("All validations passed ({}/{})", result.score, result.max_score);
                Ok(0)
            } else {
                warn!(
                    "Some validations failed ({}/{})",
                    result.score, result.max_score
                );
                Ok(1)
            }
        }

        Command::SubmitSitemap { sitemap_path } => {
            let path = sitemap_path
                .clone()
                .unwrap_or_else(|| config.args.public_dir.join("sitemap.xml"));
            if !path.exists() {
                return Err(SwitchError::NotFound(format!(
                    "sitemap file not found: {}",
                    path.display()
                )));
            }

            let content = std::fs::read_to_string(&path)?;
            let url_count = sitemap::validate(&content)?;
            info!("Sitemap validated with {url_count} URLs");

            let site_url = match &config.args.site_url {
                Some(url) => url.clone(),
                None => store
                    .load_site_config()?
                    .map(|site| site.seo.canonical_base)
                    .ok_or_else(|| {
                        SwitchError::Validation("site URL not configured".to_string())
                    })?,
            };
            let sitemap_url = format!("{}/sitemap.xml", site_url.trim_end_matches('/'));
            info!("Submitting {sitemap_url}");

            let submitter = SitemapSubmitter::new(config.http_client.clone());
            let results = submitter.submit_all(&sitemap_url).await;

            let mut failed = 0;
            for result in &results {
                if result.success {
                    info!("{}: {}", result.engine, result.message);
                } else {
                    failed += 1;
                    warn!("{}: {}", result.engine, result.message);
                }
            }
            info!(
                "Submission summary: {} successful, {failed} failed",
                results.len() - failed
            );

            Ok(if failed > 0 { 1 } else { 0 })
        }
    }
}
