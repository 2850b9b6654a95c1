use std::path::PathBuf;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTENT_FILE: &str = "portfolio.json";

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Project {
    /// Cards carry a single fixed tag until projects get their own tag lists.
    pub fn tags(&self) -> &'static [&'static str] {
        &["Project"]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutProfile {
    #[serde(default)]
    pub photo_url: Option<String>,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Experience {
    /// "Jan 2021 - Mar 2023", or "Jan 2021 - Present" while the role is ongoing.
    pub fn date_range(&self) -> String {
        let end = self
            .end_date
            .map(format_month)
            .unwrap_or_else(|| "Present".to_string());
        format!("{} - {}", format_month(self.start_date), end)
    }
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub twitter_card: Option<String>,
}

/// Only the presence of a session matters to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session;

#[derive(Debug, Clone, Default, Deserialize)]
struct PortfolioDocument {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    about: Option<AboutProfile>,
    #[serde(default)]
    skills: Vec<Skill>,
    #[serde(default)]
    experiences: Vec<Experience>,
    #[serde(default)]
    social_links: Vec<SocialLink>,
    #[serde(default)]
    seo: Option<SeoConfig>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Portfolio content not found: {0}")]
    NotFound(String),
    #[error("Couldn't read portfolio content from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Couldn't parse portfolio content")]
    Parse(#[from] serde_json::Error),
}

/// The read-only data layer behind the landing page.
pub trait PortfolioSource: Send + Sync {
    fn projects(&self) -> Result<Vec<Project>, ContentError>;
    fn about(&self) -> Result<Option<AboutProfile>, ContentError>;
    fn skills(&self) -> Result<Vec<Skill>, ContentError>;
    fn experiences(&self) -> Result<Vec<Experience>, ContentError>;
    fn social_links(&self) -> Result<Vec<SocialLink>, ContentError>;
    fn seo(&self) -> Result<Option<SeoConfig>, ContentError>;
}

/// Reads `portfolio.json` from disk when a path is configured, otherwise from the
/// embedded `content/` folder. The document is parsed again on every call.
#[derive(Debug, Clone, Default)]
pub struct ContentSource {
    path: Option<PathBuf>,
}

impl ContentSource {
    pub fn embedded() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn load(&self) -> Result<PortfolioDocument, ContentError> {
        let raw = match &self.path {
            Some(path) => std::fs::read(path).map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?,
            None => Assets::get(CONTENT_FILE)
                .ok_or_else(|| ContentError::NotFound(CONTENT_FILE.to_string()))?
                .data
                .into_owned(),
        };
        let doc = serde_json::from_slice(&raw)?;
        Ok(doc)
    }
}

impl PortfolioSource for ContentSource {
    fn projects(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self.load()?.projects)
    }

    fn about(&self) -> Result<Option<AboutProfile>, ContentError> {
        Ok(self.load()?.about)
    }

    fn skills(&self) -> Result<Vec<Skill>, ContentError> {
        Ok(self.load()?.skills)
    }

    fn experiences(&self) -> Result<Vec<Experience>, ContentError> {
        Ok(self.load()?.experiences)
    }

    fn social_links(&self) -> Result<Vec<SocialLink>, ContentError> {
        Ok(self.load()?.social_links)
    }

    fn seo(&self) -> Result<Option<SeoConfig>, ContentError> {
        Ok(self.load()?.seo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // removed when the returned handle drops, even if the test panics
    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_ongoing_role_ends_in_present() {
        let exp = Experience {
            id: "1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: String::new(),
            start_date: date(2021, 1, 15),
            end_date: None,
        };
        assert_eq!(exp.date_range(), "Jan 2021 - Present");
    }

    #[test]
    fn test_finished_role_shows_end_month() {
        let exp = Experience {
            id: "1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: String::new(),
            start_date: date(2019, 9, 1),
            end_date: Some(date(2023, 3, 31)),
        };
        assert_eq!(exp.date_range(), "Sep 2019 - Mar 2023");
    }

    #[test]
    fn test_embedded_content_parses() {
        let source = ContentSource::embedded();
        assert!(source.projects().is_ok());
        assert!(source.social_links().is_ok());
        assert!(source.seo().is_ok());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let file = write_temp(r#"{ "skills": [{ "id": "s1", "name": "Rust" }] }"#);
        let source = ContentSource::from_path(file.path());
        assert!(source.projects().unwrap().is_empty());
        assert!(source.about().unwrap().is_none());
        assert!(source.seo().unwrap().is_none());
        assert_eq!(source.skills().unwrap().len(), 1);
    }

    #[test]
    fn test_content_is_reread_each_call() {
        let file = write_temp(r#"{ "skills": [] }"#);
        let source = ContentSource::from_path(file.path());
        assert!(source.skills().unwrap().is_empty());

        std::fs::write(
            file.path(),
            r#"{ "skills": [{ "id": "s1", "name": "Leptos" }] }"#,
        )
        .unwrap();
        assert_eq!(source.skills().unwrap()[0].name, "Leptos");
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let file = write_temp("{ not json");
        let source = ContentSource::from_path(file.path());
        assert!(matches!(source.projects(), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = ContentSource::from_path("/definitely/not/here/portfolio.json");
        assert!(matches!(source.about(), Err(ContentError::Io { .. })));
    }

    #[test]
    fn test_experience_dates_parse_from_iso() {
        let file = write_temp(
            r#"{ "experiences": [{
                "id": "e1", "title": "Designer", "company": "Studio",
                "description": "UI work", "start_date": "2022-06-01", "end_date": null
            }] }"#,
        );
        let source = ContentSource::from_path(file.path());
        let exps = source.experiences().unwrap();
        assert_eq!(exps[0].start_date, date(2022, 6, 1));
        assert_eq!(exps[0].end_date, None);
    }
}
