use crate::domain::{
    EmbedDescriptor, GameRecord, OpenGraphBlock, SeoBlock, SeoContentSpec, SiteConfig, SiteInfo,
    TwitterBlock,
};
use crate::error::{Result, SwitchError};
use once_cell::sync::OnceCell;
use regex::Regex;
use std::path::PathBuf;

/// User-supplied options for a game switch. Everything except `name` has a
/// default applied by [`build`].
#[derive(Debug, Clone)]
pub struct SwitchOptions {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub upload_dir: Option<PathBuf>,
    pub iframe_src: Option<String>,
    pub embed_iframe: bool,
    pub category: Option<String>,
    pub domain: Option<String>,
    pub dry_run: bool,
    pub backup: bool,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: None,
            description: None,
            keywords: None,
            upload_dir: None,
            iframe_src: None,
            embed_iframe: false,
            category: None,
            domain: None,
            dry_run: false,
            backup: true,
        }
    }
}

static NON_SLUG_PATTERN: OnceCell<Regex> = OnceCell::new();
static SPACE_PATTERN: OnceCell<Regex> = OnceCell::new();
static HYPHEN_RUN_PATTERN: OnceCell<Regex> = OnceCell::new();

/// Lowercases, strips everything outside `[a-z0-9\s-]`, turns space runs
/// into single hyphens, collapses hyphen runs, and trims edge hyphens.
/// Idempotent.
pub fn slugify(name: &str) -> String {
    let non_slug = NON_SLUG_PATTERN.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
    let spaces = SPACE_PATTERN.get_or_init(|| Regex::new(r"\s+").unwrap());
    let hyphen_runs = HYPHEN_RUN_PATTERN.get_or_init(|| Regex::new(r"-+").unwrap());

    let lowered = name.to_lowercase();
    let cleaned = non_slug.replace_all(&lowered, "");
    let hyphenated = spaces.replace_all(cleaned.trim(), "-");
    let collapsed = hyphen_runs.replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}

/// Derives the full [`SiteConfig`] from switch options. Pure: no I/O
/// happens here, the orchestrator performs all filesystem work.
pub fn build(options: &SwitchOptions) -> Result<SiteConfig> {
    let name = options.name.trim();
    if name.is_empty() {
        return Err(SwitchError::Validation("name required".to_string()));
    }

    if options.embed_iframe && options.iframe_src.is_none() {
        return Err(SwitchError::Validation(
            "iframe requires source".to_string(),
        ));
    }

    let slug = options
        .slug
        .clone()
        .unwrap_or_else(|| slugify(name));
    let category = options
        .category
        .clone()
        .unwrap_or_else(|| "Action".to_string());
    let description = options.description.clone().unwrap_or_else(|| {
        format!(
            "Play {name} online for free. {category} game with exciting gameplay. \
             No download required!"
        )
    });
    let keywords = options.keywords.clone().unwrap_or_else(|| {
        vec![
            name.to_string(),
            "free game".to_string(),
            "online game".to_string(),
            "browser game".to_string(),
            "unblocked game".to_string(),
        ]
    });
    // Placeholder domain; production callers pass their own.
    let domain = options
        .domain
        .clone()
        .unwrap_or_else(|| "example.net".to_string());

    let embed = match &options.iframe_src {
        Some(src) if options.embed_iframe => EmbedDescriptor::Iframe { src: src.clone() },
        _ => EmbedDescriptor::Local {
            path: format!("/game/{slug}/index.html"),
        },
    };

    let thumbnail = format!("/assets/{slug}/og-image.jpg");

    Ok(SiteConfig {
        main_game: GameRecord {
            id: slug.clone(),
            name: name.to_string(),
            slug: slug.clone(),
            description: description.clone(),
            keywords: keywords.clone(),
            thumbnail: Some(thumbnail.clone()),
            embed,
            seo_content: SeoContentSpec {
                target_word_count: 800,
                keyword_density: 4.0,
                category: category.clone(),
                features: vec![
                    "Free to play".to_string(),
                    "No download required".to_string(),
                    "Browser-based gaming".to_string(),
                    "High-quality graphics".to_string(),
                    "Engaging gameplay".to_string(),
                    "Mobile friendly".to_string(),
                    "Instant play".to_string(),
                    "Regular updates".to_string(),
                ],
            },
        },
        site: SiteInfo {
            name: name.to_string(),
            domain: domain.clone(),
        },
        seo: SeoBlock {
            site_name: name.to_string(),
            domain: domain.clone(),
            title_template: format!("%s - {name} Official Site"),
            default_title: format!("{name} - Free Online {category} Game"),
            description,
            keywords,
            open_graph: OpenGraphBlock {
                site_name: name.to_string(),
                kind: "website".to_string(),
                image: Some(thumbnail),
                url: Some(format!("https://{domain}")),
            },
            twitter: Some(TwitterBlock {
                card: "summary_large_image".to_string(),
                site: Some("@YourGameStudio".to_string()),
            }),
            canonical_base: format!("https://{domain}"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmbedDescriptor;

    fn options(name: &str) -> SwitchOptions {
        SwitchOptions {
            name: name.to_string(),
            ..SwitchOptions::default()
        }
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Test Game"), "test-game");
        assert_eq!(slugify("Crazy Cattle 3D!"), "crazy-cattle-3d");
    }

    #[test]
    fn slugify_collapses_and_trims_hyphens() {
        assert_eq!(slugify("  --Weird -- Name--  "), "weird-name");
        assert_eq!(slugify("a   b"), "a-b");
    }

    #[test]
    fn slugify_is_idempotent() {
        for input in ["Test Game", "  --Weird -- Name--  ", "über game", "!!!"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn slugify_output_shape() {
        let slug = slugify("My Great Game: Part 2");
        assert!(slug
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric())));
    }

    #[test]
    fn build_applies_defaults() {
        let config = build(&options("Test Game")).unwrap();
        assert_eq!(config.main_game.slug, "test-game");
        assert_eq!(config.main_game.id, "test-game");
        assert_eq!(
            config.main_game.embed,
            EmbedDescriptor::Local {
                path: "/game/test-game/index.html".to_string()
            }
        );
        assert_eq!(config.main_game.keywords.len(), 5);
        assert_eq!(config.main_game.seo_content.category, "Action");
        assert_eq!(config.seo.canonical_base, "https://example.net");
        assert_eq!(
            config.seo.default_title,
            "Test Game - Free Online Action Game"
        );
    }

    #[test]
    fn build_rejects_empty_name() {
        let err = build(&options("   ")).unwrap_err();
        assert!(matches!(err, SwitchError::Validation(message) if message == "name required"));
    }

    #[test]
    fn build_rejects_iframe_without_source() {
        let mut opts = options("X");
        opts.embed_iframe = true;
        let err = build(&opts).unwrap_err();
        assert!(
            matches!(err, SwitchError::Validation(message) if message == "iframe requires source")
        );
    }

    #[test]
    fn build_accepts_iframe_with_source() {
        let mut opts = options("X");
        opts.embed_iframe = true;
        opts.iframe_src = Some("https://e.com".to_string());
        let config = build(&opts).unwrap();
        assert_eq!(
            config.main_game.embed,
            EmbedDescriptor::Iframe {
                src: "https://e.com".to_string()
            }
        );
    }

    #[test]
    fn build_is_deterministic() {
        let opts = options("Determined Game");
        assert_eq!(build(&opts).unwrap(), build(&opts).unwrap());
    }

    #[test]
    fn explicit_options_override_defaults() {
        let mut opts = options("Custom");
        opts.slug = Some("custom-slug".to_string());
        opts.category = Some("Puzzle".to_string());
        opts.domain = Some("games.example.org".to_string());
        opts.keywords = Some(vec!["custom".to_string()]);
        let config = build(&opts).unwrap();
        assert_eq!(config.main_game.slug, "custom-slug");
        assert_eq!(config.main_game.seo_content.category, "Puzzle");
        assert_eq!(config.seo.canonical_base, "https://games.example.org");
        assert_eq!(config.seo.keywords, vec!["custom".to_string()]);
    }
}
