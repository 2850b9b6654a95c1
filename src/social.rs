//! Icon, label and link-target resolution for social links.

use crate::portfolio::SocialLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Dribbble,
    Behance,
    BookOpen,
    Code,
    Mail,
    Globe,
    ExternalLink,
    Link,
    Briefcase,
    Menu,
    Close,
    Sun,
    Moon,
}

/// Platform name (lower-cased) to its default icon.
const PLATFORM_ICONS: &[(&str, Icon)] = &[
    ("github", Icon::Github),
    ("linkedin", Icon::Linkedin),
    ("twitter", Icon::Twitter),
    ("instagram", Icon::Instagram),
    ("facebook", Icon::Facebook),
    ("youtube", Icon::Youtube),
    ("dribbble", Icon::Dribbble),
    ("behance", Icon::Behance),
    ("medium", Icon::BookOpen),
    ("dev.to", Icon::Code),
    ("email", Icon::Mail),
    ("website", Icon::Globe),
];

/// Icon names accepted as an explicit override, matched case-insensitively.
const NAMED_ICONS: &[(&str, Icon)] = &[
    ("github", Icon::Github),
    ("linkedin", Icon::Linkedin),
    ("twitter", Icon::Twitter),
    ("instagram", Icon::Instagram),
    ("facebook", Icon::Facebook),
    ("youtube", Icon::Youtube),
    ("dribbble", Icon::Dribbble),
    ("behance", Icon::Behance),
    ("bookopen", Icon::BookOpen),
    ("book-open", Icon::BookOpen),
    ("code", Icon::Code),
    ("mail", Icon::Mail),
    ("globe", Icon::Globe),
    ("externallink", Icon::ExternalLink),
    ("external-link", Icon::ExternalLink),
    ("link", Icon::Link),
    ("briefcase", Icon::Briefcase),
];

/// Platforms whose brand spelling isn't just a capitalized first letter.
const BRAND_LABELS: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("linkedin", "LinkedIn"),
    ("youtube", "YouTube"),
];

impl Icon {
    pub fn from_name(name: &str) -> Option<Icon> {
        let name = name.trim().to_lowercase();
        NAMED_ICONS
            .iter()
            .find_map(|(n, icon)| (*n == name).then_some(*icon))
    }

    pub fn for_platform(platform: &str) -> Icon {
        let platform = platform.trim().to_lowercase();
        PLATFORM_ICONS
            .iter()
            .find_map(|(p, icon)| (*p == platform).then_some(*icon))
            .unwrap_or(Icon::ExternalLink)
    }

    pub fn id(self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Instagram => "instagram",
            Icon::Facebook => "facebook",
            Icon::Youtube => "youtube",
            Icon::Dribbble => "dribbble",
            Icon::Behance => "behance",
            Icon::BookOpen => "book-open",
            Icon::Code => "code",
            Icon::Mail => "mail",
            Icon::Globe => "globe",
            Icon::ExternalLink => "external-link",
            Icon::Link => "link",
            Icon::Briefcase => "briefcase",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::Sun => "sun",
            Icon::Moon => "moon",
        }
    }

    /// Inner markup of a 24x24 stroked SVG (Lucide geometry).
    pub fn svg_body(self) -> &'static str {
        match self {
            Icon::Github => r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            Icon::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            Icon::Twitter => r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
            Icon::Instagram => r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
            Icon::Facebook => r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
            Icon::Youtube => r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><path d="m10 15 5-3-5-3z"/>"#,
            Icon::Dribbble => r#"<circle cx="12" cy="12" r="10"/><path d="M19.13 5.09C15.22 9.14 10 10.44 2.25 10.94"/><path d="M21.75 12.84c-6.62-1.41-12.14 1-16.38 6.32"/><path d="M8.56 2.75c4.37 6 6 9.42 8 17.72"/>"#,
            Icon::Behance => r#"<path d="M2 6h5.5a3 3 0 0 1 0 6H2z"/><path d="M2 12h6.5a3 3 0 0 1 0 6H2z"/><path d="M15 7h5"/><path d="M14 14.5h8a4 4 0 1 0-1 3"/>"#,
            Icon::BookOpen => r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
            Icon::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            Icon::Mail => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            Icon::Globe => r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
            Icon::ExternalLink => r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            Icon::Link => r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/>"#,
            Icon::Briefcase => r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
            Icon::Menu => r#"<line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
            Icon::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Icon::Sun => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
            Icon::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        }
    }
}

/// An explicit override wins when it names a known icon; unknown overrides fall back
/// to the generic link icon. Without an override the platform decides.
pub fn resolve_icon(platform: &str, icon: Option<&str>) -> Icon {
    match icon.filter(|name| !name.trim().is_empty()) {
        Some(name) => Icon::from_name(name).unwrap_or(Icon::Link),
        None => Icon::for_platform(platform),
    }
}

pub fn resolve_label(platform: &str) -> String {
    let platform = platform.trim();
    let lowered = platform.to_lowercase();
    if lowered == "email" {
        return "Contact".to_string();
    }
    if let Some((_, label)) = BRAND_LABELS.iter().find(|(p, _)| *p == lowered) {
        return label.to_string();
    }
    let mut chars = platform.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    SameContext,
    NewTab,
}

impl LinkTarget {
    pub fn for_url(url: &str) -> LinkTarget {
        if url.starts_with("mailto:") {
            LinkTarget::SameContext
        } else {
            LinkTarget::NewTab
        }
    }

    pub fn target(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewTab => Some("_blank"),
        }
    }

    pub fn rel(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewTab => Some("noopener noreferrer"),
        }
    }
}

/// A fully resolved call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialButton {
    pub key: String,
    pub href: String,
    pub label: String,
    pub icon: Icon,
    pub target: LinkTarget,
}

impl From<&SocialLink> for SocialButton {
    fn from(link: &SocialLink) -> Self {
        SocialButton {
            key: link.id.clone(),
            href: link.url.clone(),
            label: resolve_label(&link.platform),
            icon: resolve_icon(&link.platform, link.icon.as_deref()),
            target: LinkTarget::for_url(&link.url),
        }
    }
}

pub fn fallback_buttons() -> Vec<SocialButton> {
    [
        ("github", "https://github.com", "GitHub", Icon::Github),
        ("linkedin", "https://linkedin.com", "LinkedIn", Icon::Linkedin),
        ("contact", "mailto:hello@example.com", "Contact", Icon::Mail),
    ]
    .into_iter()
    .map(|(key, href, label, icon)| SocialButton {
        key: key.to_string(),
        href: href.to_string(),
        label: label.to_string(),
        icon,
        target: LinkTarget::for_url(href),
    })
    .collect()
}

/// One button per link, or the fallback set when there are none.
pub fn social_buttons(links: &[SocialLink]) -> Vec<SocialButton> {
    if links.is_empty() {
        fallback_buttons()
    } else {
        links.iter().map(SocialButton::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(platform: &str, url: &str, icon: Option<&str>) -> SocialLink {
        SocialLink {
            id: platform.to_string(),
            platform: platform.to_string(),
            url: url.to_string(),
            icon: icon.map(str::to_string),
        }
    }

    #[test]
    fn test_platform_icons_are_case_insensitive() {
        assert_eq!(resolve_icon("GitHub", None), Icon::Github);
        assert_eq!(resolve_icon("LINKEDIN", None), Icon::Linkedin);
        assert_eq!(resolve_icon("Medium", None), Icon::BookOpen);
        assert_eq!(resolve_icon("Dev.To", None), Icon::Code);
        assert_eq!(resolve_icon("email", None), Icon::Mail);
        assert_eq!(resolve_icon("website", None), Icon::Globe);
    }

    #[test]
    fn test_unknown_platform_gets_external_link() {
        assert_eq!(resolve_icon("mastodon", None), Icon::ExternalLink);
        // no structured parsing of "dev.to"
        assert_eq!(resolve_icon("devto", None), Icon::ExternalLink);
    }

    #[test]
    fn test_override_wins_when_known() {
        assert_eq!(resolve_icon("github", Some("Globe")), Icon::Globe);
        assert_eq!(resolve_icon("mastodon", Some("BookOpen")), Icon::BookOpen);
        assert_eq!(resolve_icon("website", Some("external-link")), Icon::ExternalLink);
    }

    #[test]
    fn test_unknown_override_falls_back_to_link() {
        assert_eq!(resolve_icon("github", Some("Sparkles")), Icon::Link);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(resolve_icon("github", Some("  ")), Icon::Github);
    }

    #[test]
    fn test_labels() {
        assert_eq!(resolve_label("linkedin"), "LinkedIn");
        assert_eq!(resolve_label("github"), "GitHub");
        assert_eq!(resolve_label("email"), "Contact");
        assert_eq!(resolve_label("Email"), "Contact");
        assert_eq!(resolve_label("twitter"), "Twitter");
        assert_eq!(resolve_label("dev.to"), "Dev.to");
        assert_eq!(resolve_label(""), "");
    }

    #[test]
    fn test_mailto_stays_in_same_context() {
        let target = LinkTarget::for_url("mailto:me@example.com");
        assert_eq!(target, LinkTarget::SameContext);
        assert_eq!(target.target(), None);
        assert_eq!(target.rel(), None);

        let target = LinkTarget::for_url("https://github.com/me");
        assert_eq!(target.target(), Some("_blank"));
        assert_eq!(target.rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn test_no_links_gives_fallback_set() {
        let buttons = social_buttons(&[]);
        let labels = buttons.iter().map(|b| b.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["GitHub", "LinkedIn", "Contact"]);
        assert_eq!(buttons[2].href, "mailto:hello@example.com");
        assert_eq!(buttons[2].target, LinkTarget::SameContext);
        assert_eq!(buttons[0].target, LinkTarget::NewTab);
    }

    #[test]
    fn test_links_map_one_to_one() {
        let links = vec![
            link("github", "https://github.com/me", None),
            link("email", "mailto:me@example.com", None),
            link("mastodon", "https://fosstodon.org/@me", Some("Globe")),
        ];
        let buttons = social_buttons(&links);
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[1].label, "Contact");
        assert_eq!(buttons[1].icon, Icon::Mail);
        assert_eq!(buttons[2].label, "Mastodon");
        assert_eq!(buttons[2].icon, Icon::Globe);
    }

    #[test]
    fn test_padded_platform_is_normalized() {
        assert_eq!(resolve_label(" email "), "Contact");
        assert_eq!(resolve_label("  github"), "GitHub");
        assert_eq!(resolve_label(" mastodon "), "Mastodon");

        let button = SocialButton::from(&link(" email", "mailto:me@example.com", None));
        assert_eq!(button.icon, Icon::Mail);
        assert_eq!(button.label, "Contact");
    }

    #[test]
    fn test_every_icon_has_svg_markup() {
        let all = [
            Icon::Github,
            Icon::Linkedin,
            Icon::Twitter,
            Icon::Instagram,
            Icon::Facebook,
            Icon::Youtube,
            Icon::Dribbble,
            Icon::Behance,
            Icon::BookOpen,
            Icon::Code,
            Icon::Mail,
            Icon::Globe,
            Icon::ExternalLink,
            Icon::Link,
            Icon::Briefcase,
            Icon::Menu,
            Icon::Close,
            Icon::Sun,
            Icon::Moon,
        ];
        for icon in all {
            let body = icon.svg_body();
            assert!(body.starts_with('<'), "{} has no markup", icon.id());
            assert!(!body.contains("<svg"), "{} should only carry inner markup", icon.id());
        }
    }
}
