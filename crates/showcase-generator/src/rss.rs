//! RSS feed generation.
//!
//! Generates an RSS 2.0 feed of the newest items across all sections.

use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};
use showcase_core::{Config, Item};
use tracing::debug;

/// RSS feed generator.
#[derive(Debug)]
pub struct RssGenerator {
    config: Config,
}

impl RssGenerator {
    /// Create a new RSS generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate RSS feed XML, newest items first.
    ///
    /// The build date is the newest item's date, so the same content always
    /// yields the same feed.
    pub fn generate(&self, items: &[&Item]) -> String {
        let limit = self.config.rss.limit;
        let mut items = items.to_vec();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items.truncate(limit);

        debug!(count = items.len(), limit, "generating RSS feed");

        let site = &self.config.site;
        let description = if site.description.is_empty() {
            &site.name
        } else {
            &site.description
        };

        let channel = ChannelBuilder::default()
            .title(&site.name)
            .link(&site.base_url)
            .description(description)
            .language(Some(site.language.clone()))
            .last_build_date(items.first().map(|item| item.date.to_rfc2822()))
            .items(
                items
                    .iter()
                    .map(|item| self.item_to_rss(item))
                    .collect::<Vec<_>>(),
            )
            .build();

        channel.to_string()
    }

    fn item_to_rss(&self, item: &Item) -> rss::Item {
        let url = self.config.url_for(&item.path());

        let guid = GuidBuilder::default().value(&url).permalink(true).build();

        let mut builder = ItemBuilder::default();
        builder.title(Some(item.title.clone()));
        builder.link(Some(url));
        builder.guid(Some(guid));
        builder.pub_date(Some(item.date.to_rfc2822()));

        if !item.description.is_empty() {
            builder.description(Some(item.description.clone()));
        }

        let categories: Vec<_> = item
            .tags
            .iter()
            .map(|tag| rss::Category {
                name: tag.name().to_string(),
                domain: None,
            })
            .collect();

        if !categories.is_empty() {
            builder.categories(categories);
        }

        builder.build()
    }
}
