use crate::domain::GameRecord;
use serde::{Deserialize, Serialize};

/// The persisted configuration artifact: the source of truth the site and
/// all tooling read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub main_game: GameRecord,
    pub site: SiteInfo,
    pub seo: SeoBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoBlock {
    pub site_name: String,
    pub domain: String,
    pub title_template: String,
    pub default_title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub open_graph: OpenGraphBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterBlock>,
    /// Absolute `https://` base for canonical URLs.
    pub canonical_base: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphBlock {
    pub site_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterBlock {
    pub card: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}
