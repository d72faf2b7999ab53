pub mod backup;
pub mod builder;
pub mod content;
pub mod metrics;
pub mod sitemap;
pub mod switching;
pub mod validation;
