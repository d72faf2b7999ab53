use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the site configuration artifact
    #[arg(long, default_value = "config/main-game.json")]
    pub config_path: PathBuf,

    /// Directory with public site assets (game files, sitemap)
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,

    /// Directory where configuration backups are stored
    #[arg(long, default_value = "backups")]
    pub backup_dir: PathBuf,

    /// Public base URL of the site, used for sitemap submission
    #[clap(long, env = "SITE_URL")]
    pub site_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Switch the featured game and regenerate dependent artifacts
    Switch {
        /// Display name of the new game
        name: String,

        /// Game description used for SEO copy
        description: Option<String>,

        /// Directory with uploaded game files to copy into place
        #[arg(long)]
        upload: Option<PathBuf>,

        /// How the game is embedded
        #[arg(long, value_enum, default_value_t = EmbedArg::Local)]
        embed: EmbedArg,

        /// Source URL when embedding via iframe
        #[arg(long)]
        iframe: Option<String>,

        /// Comma-separated SEO keywords
        #[arg(long, value_delimiter = ',')]
        keywords: Option<Vec<String>>,

        /// Game category
        #[arg(long)]
        category: Option<String>,

        /// Custom domain
        #[arg(long)]
        domain: Option<String>,

        /// Preview the new configuration without touching any files
        #[arg(long)]
        dry_run: bool,

        /// Skip creating a backup before mutating state
        #[arg(long)]
        no_backup: bool,
    },

    /// List available backups, most recent first
    ListBackups,

    /// Restore a backup by timestamp
    Restore { timestamp: String },

    /// Validate the current configuration, assets and sitemap
    Validate {
        /// Additionally write a markdown validation report
        #[arg(long)]
        report: bool,

        /// Quick health check without scoring
        #[arg(long)]
        quick: bool,
    },

    /// Validate the sitemap and submit it to search engines
    SubmitSitemap {
        /// Sitemap file to submit (defaults to <public-dir>/sitemap.xml)
        sitemap_path: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum EmbedArg {
    Local,
    Iframe,
}
