use crate::portfolio::SeoConfig;

pub const DEFAULT_TITLE: &str = "Portfolio - Full Stack Developer";
pub const DEFAULT_DESCRIPTION: &str =
    "Experienced full stack developer specializing in React, Node.js, and modern web technologies";
pub const DEFAULT_KEYWORDS: &str = "web development, react, nodejs, portfolio";
pub const DEFAULT_OG_IMAGE: &str = "/og-image.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwitterCard {
    Summary,
    SummaryLargeImage,
}

impl TwitterCard {
    pub fn as_str(self) -> &'static str {
        match self {
            TwitterCard::Summary => "summary",
            TwitterCard::SummaryLargeImage => "summary_large_image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterMeta {
    pub card: TwitterCard,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterMeta,
}

fn or_default(value: Option<&String>, default: &str) -> String {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

impl PageMetadata {
    /// Fields missing from the SEO record (or left blank) take the literal defaults.
    pub fn from_seo(seo: Option<&SeoConfig>) -> PageMetadata {
        let title = or_default(seo.and_then(|s| s.title.as_ref()), DEFAULT_TITLE);
        let description = or_default(
            seo.and_then(|s| s.description.as_ref()),
            DEFAULT_DESCRIPTION,
        );
        let keywords = or_default(seo.and_then(|s| s.keywords.as_ref()), DEFAULT_KEYWORDS);
        let image = or_default(seo.and_then(|s| s.og_image.as_ref()), DEFAULT_OG_IMAGE);
        let images = if image.is_empty() {
            Vec::new()
        } else {
            vec![image]
        };
        let card = match seo.and_then(|s| s.twitter_card.as_deref()) {
            Some("summary_large_image") => TwitterCard::SummaryLargeImage,
            _ => TwitterCard::Summary,
        };

        PageMetadata {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                images: images.clone(),
            },
            twitter: TwitterMeta {
                card,
                title: title.clone(),
                description: description.clone(),
                images,
            },
            title,
            description,
            keywords,
        }
    }
}
