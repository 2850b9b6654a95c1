//! Navigation bar behavior, kept free of the DOM so it can be driven from tests.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const DASHBOARD_HREF: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Regular navigation to another route.
    Route(&'static str),
    /// Same-page section, addressed by element id.
    Section(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavEntry {
    pub fn href(&self) -> String {
        match self.target {
            NavTarget::Route(path) => path.to_string(),
            NavTarget::Section(id) => format!("#{id}"),
        }
    }
}

pub const NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry {
        label: "Home",
        target: NavTarget::Route("/"),
    },
    NavEntry {
        label: "About",
        target: NavTarget::Section("about"),
    },
    NavEntry {
        label: "Projects",
        target: NavTarget::Section("projects"),
    },
    NavEntry {
        label: "Skills",
        target: NavTarget::Section("skills"),
    },
    NavEntry {
        label: "Experience",
        target: NavTarget::Section("experience"),
    },
    NavEntry {
        label: "Contact",
        target: NavTarget::Section("contact"),
    },
];

/// Finds a section by id and scrolls it into view. Returns false when no such element
/// exists.
pub trait SectionScroller {
    fn scroll_to_section(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Default navigation was suppressed and the section scrolled into view.
    Scrolled,
    /// Default navigation was suppressed but the section isn't on the page.
    Missing,
    /// Let the browser (or router) follow the link.
    Follow,
}

impl Activation {
    pub fn prevents_default(self) -> bool {
        !matches!(self, Activation::Follow)
    }
}

pub fn activate(target: NavTarget, scroller: &impl SectionScroller) -> Activation {
    match target {
        NavTarget::Route(_) => Activation::Follow,
        NavTarget::Section(id) => {
            if scroller.scroll_to_section(id) {
                Activation::Scrolled
            } else {
                Activation::Missing
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A link picked from the open menu activates and then closes the menu.
    pub fn select(&mut self, target: NavTarget, scroller: &impl SectionScroller) -> Activation {
        let activation = activate(target, scroller);
        self.close();
        activation
    }
}

pub fn dashboard_visible(is_authenticated: bool) -> bool {
    is_authenticated
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];

    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::System => "System",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
            ThemeChoice::System => "system",
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeChoice::Light),
            "dark" => Ok(ThemeChoice::Dark),
            "system" | "auto" => Ok(ThemeChoice::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Owner of the page theme. The navigation bar only ever writes through it.
pub trait ThemeController: Send + Sync {
    fn current(&self) -> ThemeChoice;
    fn set(&self, choice: ThemeChoice);
}

/// Shared handle so the controller can travel through component context.
#[derive(Clone)]
pub struct ThemeHandle(Arc<dyn ThemeController>);

impl ThemeHandle {
    pub fn new(controller: impl ThemeController + 'static) -> Self {
        Self(Arc::new(controller))
    }

    pub fn current(&self) -> ThemeChoice {
        self.0.current()
    }

    pub fn set(&self, choice: ThemeChoice) {
        log::debug!("theme set to {choice}");
        self.0.set(choice);
    }
}
