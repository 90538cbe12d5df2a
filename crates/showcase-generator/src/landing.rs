//! The landing page theme.
//!
//! Renders a product landing page from whichever capabilities a site
//! provides, plus plain listing, item, page and tag pages for collected
//! content.

use showcase_core::{
    CapabilityKind, Entry, Item, Page, Result, Section, Tag, Website,
    config::ThemeConfig,
    require,
    sections::{Brands, Community, Download, Features, Hero, How, Technology, Why},
};

use crate::{
    collector::SectionContent,
    labeled::LabeledSection,
    node::{Document, Element, Node},
    theme::{RenderContext, Theme, ThemeResource},
};

const LANDING_CSS: &str = include_str!("../theme/landing.css");
const FONTS_CSS: &str = include_str!("../theme/fonts.css");

const RESOURCES: &[ThemeResource] = &[
    ThemeResource {
        path: "theme/css/landing.css",
        contents: LANDING_CSS,
    },
    ThemeResource {
        path: "theme/fonts/stylesheet.css",
        contents: FONTS_CSS,
    },
];

/// Icon font glyph for "chevron right".
const LINK_ARROW: &str = "\u{10012F}";

/// Media query selecting dark artwork.
const DARK_MEDIA: &str = "(prefers-color-scheme: dark)";

/// Landing page theme.
#[derive(Debug, Clone)]
pub struct LandingTheme {
    config: ThemeConfig,
    feed_path: Option<String>,
}

impl LandingTheme {
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            config,
            feed_path: None,
        }
    }

    /// Advertise a feed at `path` in every page head.
    #[must_use]
    pub fn with_feed(mut self, path: Option<String>) -> Self {
        self.feed_path = path;
        self
    }

    fn document(
        &self,
        site: &dyn Website,
        title: Option<&str>,
        description: &str,
        path: &str,
        body: Vec<Node>,
    ) -> Document {
        let metadata = site.metadata();
        let head = self.head(site, title, description, path);
        Document::new(&metadata.language, head, Element::new("body").children(body))
    }

    fn head(
        &self,
        site: &dyn Website,
        title: Option<&str>,
        description: &str,
        path: &str,
    ) -> Element {
        let metadata = site.metadata();
        let title = match title {
            Some(title) if !title.is_empty() => {
                format!("{title}{}{}", self.config.title_separator, metadata.name)
            }
            _ => metadata.name.clone(),
        };
        let description = if description.is_empty() {
            metadata.description.as_str()
        } else {
            description
        };

        let mut head = Element::new("head")
            .child(Element::void("meta").attr("charset", "UTF-8"))
            .child(Element::new("title").text(title))
            .child(meta("description", description));

        if !metadata.keywords.is_empty() {
            head = head.child(meta("keywords", metadata.keywords.join(", ")));
        }

        head = head
            .child(meta("viewport", "width=device-width, initial-scale=1.0"))
            .child(
                Element::void("link")
                    .attr("rel", "canonical")
                    .href(metadata.url_for(path)),
            );

        if let Some(image) = &metadata.image_path {
            head = head.child(
                Element::void("meta")
                    .attr("property", "og:image")
                    .attr("content", metadata.url_for(image)),
            );
        }

        head = head.children(self.config.stylesheets.iter().map(|href| {
            Element::void("link")
                .attr("rel", "stylesheet")
                .href(href.as_str())
        }));

        if let Some(feed) = &self.feed_path {
            head = head.child(
                Element::void("link")
                    .attr("rel", "alternate")
                    .attr("type", "application/rss+xml")
                    .attr("title", metadata.name.as_str())
                    .href(metadata.url_for(feed)),
            );
        }

        head
    }

    /// Navigation header for content pages.
    fn site_header(&self, ctx: &RenderContext<'_>, selected: Option<&str>) -> Element {
        let mut wrapper = Element::new("div").class("wrapper").child(
            Element::new("a")
                .class("site-name")
                .href("/")
                .text(ctx.site.metadata().name.as_str()),
        );

        if ctx.content.sections.len() > 1 {
            let links = ctx.content.sections.values().map(|section| {
                let mut link = Element::new("a")
                    .href(section.path())
                    .text(section.title.as_str());
                if selected == Some(section.id.as_str()) {
                    link = link.class("selected");
                }
                Element::new("li").child(link)
            });
            wrapper = wrapper.child(Element::new("nav").child(Element::new("ul").children(links)));
        }

        Element::new("header").child(wrapper)
    }

    fn footer(&self, site: &dyn Website) -> Element {
        let mut footer = Element::new("footer").child(Element::new("a").href("/").text("Home"));
        for link in &self.config.footer_links {
            footer = footer
                .text(" • ")
                .child(Element::new("a").href(link.href.as_str()).text(link.title.as_str()));
        }

        footer
            .child(Element::void("br"))
            .child(Element::new("small").text(site.metadata().copyright.as_str()))
    }

    /// Standard page frame around content.
    fn content_page(
        &self,
        ctx: &RenderContext<'_>,
        selected: Option<&str>,
        content: impl IntoIterator<Item = Node>,
    ) -> Vec<Node> {
        vec![
            self.site_header(ctx, selected).into(),
            Element::new("div").class("wrapper").children(content).into(),
            self.footer(ctx.site).into(),
        ]
    }
}

impl Theme for LandingTheme {
    fn name(&self) -> &str {
        "landing"
    }

    fn required_capabilities(&self) -> &[CapabilityKind] {
        &[CapabilityKind::Hero]
    }

    fn resources(&self) -> &[ThemeResource] {
        RESOURCES
    }

    fn render_index(&self, ctx: &RenderContext<'_>) -> Result<Document> {
        let site = ctx.site;
        let hero = require(site.hero(), CapabilityKind::Hero)?;

        // Fixed page order, independent of how the site declares its records.
        let main = Element::new("main")
            .child(site.why().map(why))
            .child(site.how().map(how))
            .child(site.technology().map(technology))
            .child(site.features().map(features))
            .child(site.brands().map(brands))
            .child(site.community().map(community))
            .child(site.download().map(download));

        let body: Vec<Node> = vec![
            hero_header(site, hero).into(),
            main.into(),
            self.footer(site).into(),
        ];

        Ok(self.document(site, None, "", "/", body))
    }

    fn render_listing(
        &self,
        section: &SectionContent,
        ctx: &RenderContext<'_>,
    ) -> Result<Document> {
        let mut content = vec![Node::from(Element::new("h1").text(section.title.as_str()))];
        if !section.description.is_empty() {
            content.push(Element::new("p").text(section.description.as_str()).into());
        }
        content.push(item_list(&section.items_by_date()).into());

        let body = self.content_page(ctx, Some(section.id.as_str()), content);
        Ok(self.document(
            ctx.site,
            Some(section.title.as_str()),
            &section.description,
            &section.path(),
            body,
        ))
    }

    fn render_item(&self, item: &Item, ctx: &RenderContext<'_>) -> Result<Document> {
        let article = Element::new("article")
            .child(
                Element::new("div")
                    .class("content")
                    .child(Node::raw(item.body.as_str())),
            )
            .child(Element::new("span").text("Tagged with: "))
            .child(tag_list(&item.tags));

        let body = self.content_page(ctx, Some(item.section.as_str()), [Node::from(article)]);
        Ok(self.document(
            ctx.site,
            Some(item.title.as_str()),
            &item.description,
            &item.path(),
            body,
        ))
    }

    fn render_page(&self, page: &Page, ctx: &RenderContext<'_>) -> Result<Document> {
        let body = self.content_page(ctx, None, [Node::raw(page.body.as_str())]);
        Ok(self.document(
            ctx.site,
            Some(page.title.as_str()),
            &page.description,
            &page.path(),
            body,
        ))
    }

    fn render_tag_list(&self, ctx: &RenderContext<'_>) -> Result<Document> {
        let tags = ctx.content.tags().into_iter().map(|tag| {
            Element::new("li")
                .class("tag")
                .child(Element::new("a").href(tag.path()).text(tag.name()))
        });

        let content: [Node; 2] = [
            Element::new("h1").text("Browse all tags").into(),
            Element::new("ul").class("all-tags").children(tags).into(),
        ];

        let body = self.content_page(ctx, None, content);
        Ok(self.document(ctx.site, Some("Tags"), "", "/tags", body))
    }

    fn render_tag_details(&self, tag: &Tag, ctx: &RenderContext<'_>) -> Result<Document> {
        let content: [Node; 3] = [
            Element::new("h1")
                .text("Tagged with ")
                .child(Element::new("span").class("tag").text(tag.name()))
                .into(),
            Element::new("a")
                .class("browse-all")
                .href("/tags")
                .text("Browse all tags")
                .into(),
            item_list(&ctx.content.items_tagged(tag)).into(),
        ];

        let body = self.content_page(ctx, None, content);
        let title = format!("Tagged with {}", tag.name());
        Ok(self.document(ctx.site, Some(title.as_str()), "", &tag.path(), body))
    }
}

fn meta(name: &str, content: impl Into<String>) -> Element {
    Element::void("meta").attr("name", name).attr("content", content)
}

fn hero_header(site: &dyn Website, hero: &Hero) -> Element {
    let title = if hero.title.is_empty() {
        site.metadata().name.as_str()
    } else {
        hero.title.as_str()
    };

    let mut header = Element::new("header")
        .class("hero hero-background")
        .child(Element::new("h1").text(title));

    if !hero.subtitle.is_empty() {
        header = header.child(Element::new("h4").text(hero.subtitle.as_str()));
    }

    header
        .child(site.download().map(app_store_badge))
        .child(hero.image.as_ref().map(|image| {
            Element::new("div").child(Element::void("img").attr("src", format!("/img/{image}")))
        }))
}

fn why(why: &Why) -> Element {
    LabeledSection::from_section(why)
        .class("why max-section")
        .items(why.items(), |paragraph| {
            Element::new("p").text(paragraph.as_str())
        })
        .build()
}

fn how(how: &How) -> Element {
    LabeledSection::from_section(how)
        .class("how max-section")
        .items(how.items(), |step| {
            Element::new("div")
                .class("well")
                .child(
                    Element::void("img")
                        .class("how-image")
                        .attr("src", format!("/img/{}.svg", step.symbol)),
                )
                .child(
                    Element::new("h4")
                        .text(step.title.as_str())
                        .child(Element::void("br"))
                        .child(Element::new("small").text(step.description.as_str())),
                )
        })
        .build()
}

fn technology(technology: &Technology) -> Element {
    LabeledSection::from_section(technology)
        .class("technology")
        .items(technology.items(), |feature| {
            Element::new("div")
                .class("well")
                .child(
                    Element::new("h2").child(
                        Element::new("mark")
                            .class("span-red icon")
                            .text(feature.symbol.as_str()),
                    ),
                )
                .child(
                    Element::new("p")
                        .child(
                            Element::new("strong")
                                .class("system-red")
                                .text(feature.title.as_str()),
                        )
                        .text(format!(" {}", feature.description)),
                )
        })
        .build()
}

fn features(features: &Features) -> Element {
    LabeledSection::from_section(features)
        .class("features max-section")
        .items(features.items(), |differentiator| {
            let learn_more = differentiator.href.as_ref().map(|href| {
                Element::new("a")
                    .href(href.as_str())
                    .text("Learn More ")
                    .child(Element::new("span").class("icon").text(LINK_ARROW))
            });

            Element::new("div")
                .child(
                    Element::new("h3")
                        .child(
                            Element::new("span")
                                .class("icon")
                                .text(differentiator.symbol.as_str()),
                        )
                        .child(Element::void("br"))
                        .child(Element::new("small").text(differentiator.title.as_str())),
                )
                .child(Element::new("p").text(differentiator.description.as_str()))
                .child(learn_more)
        })
        .build()
}

fn brands(brands: &Brands) -> Element {
    LabeledSection::from_section(brands)
        .class("brands")
        .items(brands.items(), |source| {
            Element::new("div").child(
                Element::new("picture")
                    .child(
                        Element::void("source")
                            .attr("src", format!("/img/dark/source/{source}.png"))
                            .attr("srcset", format!("/img/dark/source/{source}@2x.png 2x"))
                            .attr("media", DARK_MEDIA),
                    )
                    .child(
                        Element::void("img")
                            .class("brand-image")
                            .attr("src", format!("/img/light/source/{source}.png"))
                            .attr("srcset", format!("/img/light/source/{source}@2x.png 2x")),
                    ),
            )
        })
        .build()
}

fn community(community: &Community) -> Element {
    LabeledSection::from_section(community)
        .class("community")
        .items(community.items(), |link| {
            let well = Element::new("div").class("well").child(entry_link(link));
            if link.description.is_empty() {
                well
            } else {
                well.child(Element::new("p").text(link.description.as_str()))
            }
        })
        .build()
}

fn download(download: &Download) -> Element {
    let links = (!download.links.is_empty()).then(|| {
        Element::new("div")
            .class("download-links")
            .children(download.links.iter().map(entry_link))
    });

    LabeledSection::from_section(download)
        .class("downloads")
        .body(Element::new("div").child(app_store_badge(download)))
        .body(links)
        .build()
}

/// Store badge; the artwork follows the release state and the color scheme.
fn app_store_badge(download: &Download) -> Element {
    let artwork = format!(
        "/theme/img/{}-mac-app-store/us-uk",
        download.state.badge()
    );

    Element::new("a").href(download.app_store_url.as_str()).child(
        Element::new("picture")
            .class("download-image")
            .child(
                Element::void("source")
                    .attr("srcset", format!("{artwork}/white.svg"))
                    .attr("media", DARK_MEDIA),
            )
            .child(Element::void("img").attr("src", format!("{artwork}/black.svg"))),
    )
}

/// An entry as a link, or as plain text when it has no target.
fn entry_link(entry: &Entry) -> Element {
    let element = match &entry.href {
        Some(href) => Element::new("a").href(href.as_str()),
        None => Element::new("span"),
    };

    let element = if entry.symbol.is_empty() {
        element
    } else {
        element
            .child(Element::new("span").class("icon").text(entry.symbol.as_str()))
            .text(" ")
    };

    element.text(entry.title.as_str())
}

fn tag_list(tags: &[Tag]) -> Element {
    Element::new("ul").class("tag-list").children(tags.iter().map(|tag| {
        Element::new("li").child(Element::new("a").href(tag.path()).text(tag.name()))
    }))
}

fn item_list(items: &[&Item]) -> Element {
    Element::new("ul").class("item-list").children(items.iter().map(|item| {
        Element::new("li").child(
            Element::new("article")
                .child(
                    Element::new("h1")
                        .child(Element::new("a").href(item.path()).text(item.title.as_str())),
                )
                .child(tag_list(&item.tags))
                .child(Element::new("p").text(item.description.as_str())),
        )
    }))
}
