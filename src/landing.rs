use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

use crate::portfolio::{
    AboutProfile, Experience, Project, SeoConfig, Skill, SocialLink,
};
use crate::social::{social_buttons, SocialButton};

pub const NO_PROJECTS: &str = "No projects yet. Check back soon!";

/// Everything the landing page renders, fetched fresh for each render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub projects: Vec<Project>,
    pub about: Option<AboutProfile>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub social_links: Vec<SocialLink>,
    pub seo: Option<SeoConfig>,
}

/// A failed accessor degrades to its empty value instead of failing the page.
pub fn or_empty<T: Default, E: std::fmt::Display>(what: &str, res: Result<T, E>) -> T {
    res.unwrap_or_else(|e| {
        log::warn!("couldn't load {what}: {e}");
        T::default()
    })
}

impl PageData {
    pub fn about_section(&self) -> Option<&AboutProfile> {
        self.about.as_ref()
    }

    pub fn skills_section(&self) -> Option<&[Skill]> {
        non_empty(&self.skills)
    }

    pub fn experience_section(&self) -> Option<&[Experience]> {
        non_empty(&self.experiences)
    }

    pub fn projects_section(&self) -> ProjectsView<'_> {
        match non_empty(&self.projects) {
            Some(projects) => ProjectsView::Grid(projects),
            None => ProjectsView::Placeholder(NO_PROJECTS),
        }
    }

    /// Used by both the hero and the contact section.
    pub fn social_buttons(&self) -> Vec<SocialButton> {
        social_buttons(&self.social_links)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectsView<'a> {
    Grid(&'a [Project]),
    Placeholder(&'static str),
}

fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Year of an RFC 3339 timestamp, such as the `BUILD_TIME` recorded by the build script.
pub fn copyright_year(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

/// Initials shown when the about record has no photo.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .take(3)
        .collect()
}
