use serde::{Deserialize, Serialize};

/// How the featured game is delivered to the browser: an external iframe
/// URL or a locally served asset under `public/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmbedDescriptor {
    Iframe {
        #[serde(rename = "iframeSrc")]
        src: String,
    },
    Local {
        #[serde(rename = "localPath")]
        path: String,
    },
}

/// Targets for the generated SEO copy of a game page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoContentSpec {
    pub target_word_count: u32,
    pub keyword_density: f64,
    pub category: String,
    pub features: Vec<String>,
}

/// Identity and content descriptor for the featured game.
///
/// `slug` is URL-safe (`[a-z0-9-]`, no edge or repeated hyphens) and
/// `id == slug` by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub embed: EmbedDescriptor,
    pub seo_content: SeoContentSpec,
}

/// Page copy derived from a [`GameRecord`]. Regenerated on demand, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub title: String,
    pub description: String,
    pub content: String,
    pub word_count: usize,
    pub keyword_density: f64,
}
