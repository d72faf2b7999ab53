mod game;
mod report;
mod site;
pub(crate) mod storage;

pub use game::{EmbedDescriptor, GameRecord, GeneratedContent, SeoContentSpec};
pub use report::{Backup, CheckResult, ValidationReport};
pub use site::{OpenGraphBlock, SeoBlock, SiteConfig, SiteInfo, TwitterBlock};
