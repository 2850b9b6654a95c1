use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};
use serde::{Deserialize, Serialize};

use super::data::{
    get_about, get_experiences, get_owner, get_projects, get_seo, get_skills, get_social_links,
    get_user,
};
use super::icon::IconSvg;
use super::navbar::Navbar;
use crate::config::DEFAULT_OWNER;
use crate::landing::{copyright_year, initials, or_empty, PageData, ProjectsView};
use crate::portfolio::{AboutProfile, Experience, Project, Skill};
use crate::seo::PageMetadata;
use crate::social::{Icon, SocialButton};

const TAGLINE: &str = "UI/UX Designer & Web Developer";
const STATS: [(&str, &str); 2] = [("10+", "Projects Completed"), ("5+", "Years Experience")];
const BUTTON_CLASS: &str = "inline-flex items-center px-6 py-3 rounded-md bg-gradient-to-r from-primary to-accent text-primary-foreground hover:shadow-lg hover:shadow-primary/50 transition-all duration-300 font-semibold";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LandingData {
    page: PageData,
    is_authenticated: bool,
    owner: String,
}

/// Each accessor is awaited in turn; a failing one only empties its own section.
async fn load_landing() -> LandingData {
    let page = PageData {
        projects: or_empty("projects", get_projects().await),
        about: or_empty("about", get_about().await),
        skills: or_empty("skills", get_skills().await),
        experiences: or_empty("experiences", get_experiences().await),
        social_links: or_empty("social links", get_social_links().await),
        seo: or_empty("seo", get_seo().await),
    };
    let is_authenticated = or_empty("session", get_user().await).is_some();
    let owner = get_owner()
        .await
        .unwrap_or_else(|_| DEFAULT_OWNER.to_string());
    LandingData {
        page,
        is_authenticated,
        owner,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let landing = Resource::new(|| (), |_| load_landing());

    view! {
        <Suspense fallback=move || {
            view! { <div class="min-h-screen loading-skeleton"></div> }
        }>
            {move || Suspend::new(async move {
                let LandingData { page, is_authenticated, owner } = landing.await;
                let metadata = PageMetadata::from_seo(page.seo.as_ref());
                view! {
                    <SeoMeta metadata />
                    <Navbar is_authenticated brand=owner.clone() />
                    <Backdrop />
                    <LandingSections page owner=owner.clone() />
                    <Footer owner />
                }
            })}
        </Suspense>
    }
}

/// Hero through contact, gated on what the page data holds.
#[component]
fn LandingSections(page: PageData, owner: String) -> impl IntoView {
    let buttons = page.social_buttons();
    view! {
        <Hero owner=owner.clone() buttons=buttons.clone() />
        {page
            .about_section()
            .cloned()
            .map(|about| view! { <AboutSection about owner=owner.clone() /> })}
        {page
            .skills_section()
            .map(|skills| view! { <SkillsSection skills=skills.to_vec() /> })}
        {page
            .experience_section()
            .map(|experiences| {
                view! { <ExperienceSection experiences=experiences.to_vec() /> }
            })}
        {match page.projects_section() {
            ProjectsView::Grid(projects) => {
                Either::Left(view! { <ProjectsSection projects=projects.to_vec() /> })
            }
            ProjectsView::Placeholder(text) => {
                Either::Right(view! { <ProjectsPlaceholder text /> })
            }
        }}
        <ContactSection buttons />
    }
}

#[component]
fn SeoMeta(metadata: PageMetadata) -> impl IntoView {
    let PageMetadata {
        title,
        description,
        keywords,
        open_graph,
        twitter,
    } = metadata;
    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <Meta name="keywords" content=keywords />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=open_graph.title />
        <Meta property="og:description" content=open_graph.description />
        {open_graph
            .images
            .into_iter()
            .map(|url| view! { <Meta property="og:image" content=url /> })
            .collect_view()}

        <Meta name="twitter:card" content=twitter.card.as_str() />
        <Meta name="twitter:title" content=twitter.title />
        <Meta name="twitter:description" content=twitter.description />
        {twitter
            .images
            .into_iter()
            .map(|url| view! { <Meta name="twitter:image" content=url /> })
            .collect_view()}
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none -z-10" aria-hidden="true">
            <div class="absolute top-20 left-10 w-96 h-96 bg-primary/10 rounded-full blur-3xl animate-pulse" />
            <div class="absolute top-40 right-20 w-80 h-80 bg-accent/10 rounded-full blur-3xl animate-pulse" />
            <div class="absolute -bottom-32 left-20 w-96 h-96 bg-secondary/10 rounded-full blur-3xl animate-pulse" />
        </div>
    }
}

#[component]
fn SocialButtons(buttons: Vec<SocialButton>) -> impl IntoView {
    view! {
        <div class="flex gap-4 justify-center flex-wrap pt-4">
            {buttons
                .into_iter()
                .map(|b| {
                    view! {
                        <a
                            href=b.href
                            target=b.target.target()
                            rel=b.target.rel()
                            class=BUTTON_CLASS
                        >
                            <IconSvg icon=b.icon class="w-5 h-5 mr-2" />
                            {b.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Hero(owner: String, buttons: Vec<SocialButton>) -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-20 px-4 flex items-center min-h-[calc(100vh-80px)]">
            <div class="container mx-auto max-w-6xl w-full space-y-8 text-center">
                <div class="space-y-4">
                    <p class="text-sm md:text-base font-semibold text-primary/80 tracking-widest uppercase">
                        "Welcome to my portfolio"
                    </p>
                    <h1 class="text-5xl md:text-7xl font-bold leading-tight bg-gradient-to-r from-foreground via-primary to-accent bg-clip-text text-transparent">
                        {owner}
                    </h1>
                    <h2 class="text-xl md:text-3xl font-semibold text-primary/90">{TAGLINE}</h2>
                </div>
                <p class="text-base md:text-lg text-muted-foreground max-w-2xl mx-auto leading-relaxed">
                    "I design interfaces people enjoy using and build them for the modern web."
                </p>
                <SocialButtons buttons />
            </div>
        </section>
    }
}

#[component]
fn AboutSection(about: AboutProfile, owner: String) -> impl IntoView {
    let AboutProfile { photo_url, bio } = about;
    view! {
        <section id="about" class="py-20 px-4">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading title="About Me" subtitle="Get to know me better" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="flex justify-center md:justify-start">
                        {match photo_url {
                            Some(src) => {
                                Either::Left(
                                    view! {
                                        <img
                                            src=src
                                            alt="Profile"
                                            class="w-80 h-80 rounded-full object-cover border-4 border-background/80 shadow-2xl"
                                        />
                                    },
                                )
                            }
                            None => {
                                Either::Right(
                                    view! {
                                        <div class="w-80 h-80 rounded-full flex items-center justify-center text-4xl bg-gradient-to-br from-primary to-accent text-primary-foreground shadow-2xl">
                                            {initials(&owner)}
                                        </div>
                                    },
                                )
                            }
                        }}
                    </div>
                    <div class="space-y-6">
                        <div>
                            <h3 class="text-2xl font-bold mb-3">"Passionate Designer & Developer"</h3>
                            <p class="text-muted-foreground text-lg leading-relaxed">{bio}</p>
                        </div>
                        <div class="grid grid-cols-2 gap-4 pt-4">
                            {STATS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="p-4 bg-muted/50 rounded-xl border border-border/40">
                                            <p class="text-3xl font-bold text-primary">{value}</p>
                                            <p class="text-sm text-muted-foreground">{label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="container mx-auto max-w-6xl">
                <div class="flex justify-center text-primary mb-4">
                    <IconSvg icon=Icon::Code class="h-12 w-12" />
                </div>
                <SectionHeading
                    title="Skills & Technologies"
                    subtitle="A collection of technologies and tools I've worked with to build amazing digital experiences"
                />
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                    {skills
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <div class="p-4 border border-border/40 rounded-xl hover:border-primary/50 transition-all duration-300">
                                    <p class="font-semibold text-center">{skill.name}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection(experiences: Vec<Experience>) -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    title="Work Experience"
                    subtitle="My professional journey and key achievements"
                />
                <div class="relative">
                    <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-primary via-primary/50 to-transparent hidden md:block" />
                    <div class="space-y-12">
                        {experiences
                            .into_iter()
                            .map(|exp| {
                                let dates = exp.date_range();
                                view! {
                                    <div class="relative flex items-start gap-8">
                                        <div class="flex-shrink-0 w-16 h-16 bg-gradient-to-br from-primary to-accent rounded-full flex items-center justify-center shadow-lg">
                                            <IconSvg icon=Icon::Briefcase class="w-7 h-7 text-primary-foreground" />
                                        </div>
                                        <div class="flex-1 rounded-xl p-6 border border-border/40">
                                            <div class="flex flex-col md:flex-row md:justify-between mb-4">
                                                <div>
                                                    <h3 class="text-xl font-bold mb-1">{exp.title}</h3>
                                                    <p class="text-primary font-semibold text-lg">
                                                        {exp.company}
                                                    </p>
                                                </div>
                                                <div class="text-sm text-muted-foreground px-3 py-1 rounded-full font-medium">
                                                    {dates}
                                                </div>
                                            </div>
                                            <p class="text-muted-foreground leading-relaxed">
                                                {exp.description}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="container mx-auto max-w-6xl">
                <ProjectsHeading />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsPlaceholder(text: &'static str) -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="container mx-auto max-w-6xl">
                <ProjectsHeading />
                <div class="text-center py-20">
                    <p class="text-muted-foreground text-lg">{text}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsHeading() -> impl IntoView {
    view! {
        <SectionHeading
            title="Featured Projects"
            subtitle="Explore some of my latest work and creative projects"
        />
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let tags = project.tags();
    let Project {
        title,
        description,
        image_url,
        ..
    } = project;
    view! {
        <div class="rounded-xl overflow-hidden border border-border/40 hover:shadow-lg transition-all duration-300">
            {match image_url {
                Some(src) => {
                    Either::Left(
                        view! {
                            <img src=src alt=title.clone() class="w-full h-48 object-cover" />
                        },
                    )
                }
                None => {
                    Either::Right(
                        view! {
                            <div class="w-full h-48 bg-gradient-to-br from-primary/20 to-accent/20" />
                        },
                    )
                }
            }}
            <div class="p-6 space-y-3">
                <h3 class="text-xl font-bold">{title}</h3>
                <p class="text-muted-foreground">{description}</p>
                <div>
                    {tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-muted mr-2 text-sm">{*tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactSection(buttons: Vec<SocialButton>) -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4">
            <div class="container mx-auto max-w-4xl text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">"Let's Work Together"</h2>
                <p class="text-muted-foreground text-lg mb-10 leading-relaxed">
                    "Have a project in mind? I'd love to hear from you. Let's create something amazing together."
                </p>
                <SocialButtons buttons />
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">{title}</h2>
            <p class="text-muted-foreground text-lg max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
fn Footer(owner: String) -> impl IntoView {
    let year = copyright_year(env!("BUILD_TIME"));
    view! {
        <footer class="border-t border-border/40 py-12 mt-16">
            <div class="container mx-auto max-w-6xl px-4 text-center text-muted-foreground">
                <p class="mb-2">
                    {match year {
                        Some(year) => format!("© {year} {owner}. All rights reserved."),
                        None => format!("© {owner}. All rights reserved."),
                    }}
                </p>
                <p class="text-sm">"Crafted with ❤️ using Rust, Leptos, and Tailwind CSS"</p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context, Poll};

    use super::*;
    use crate::app::data::SiteState;
    use crate::config::SiteConfig;
    use crate::landing::NO_PROJECTS;
    use crate::portfolio::{ContentError, PortfolioSource, SeoConfig, SocialLink};

    fn render(page: PageData) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <LandingSections page owner="Ada Lovelace".to_string() /> }.to_html())
    }

    #[test]
    fn test_hero_and_contact_each_render_fallback_buttons() {
        let html = render(PageData::default());
        let (hero, contact) = html.split_once(r#"id="contact""#).unwrap();
        for half in [hero, contact] {
            assert_eq!(half.matches("GitHub").count(), 1);
            assert_eq!(half.matches("LinkedIn").count(), 1);
            assert_eq!(half.matches("mailto:hello@example.com").count(), 1);
        }
    }

    #[test]
    fn test_empty_sections_are_gated() {
        let html = render(PageData::default());
        assert!(!html.contains(r#"id="about""#));
        assert!(!html.contains(r#"id="skills""#));
        assert!(!html.contains(r#"id="experience""#));

        let projects = html.find(r#"id="projects""#).unwrap();
        let placeholder = html.find(NO_PROJECTS).unwrap();
        let contact = html.find(r#"id="contact""#).unwrap();
        assert!(projects < placeholder && placeholder < contact);
    }

    #[test]
    fn test_populated_sections_render() {
        let page = PageData {
            about: Some(AboutProfile {
                photo_url: None,
                bio: "Designs things".to_string(),
            }),
            skills: vec![Skill {
                id: "s1".to_string(),
                name: "Figma".to_string(),
            }],
            experiences: vec![Experience {
                id: "e1".to_string(),
                title: "Designer".to_string(),
                company: "Studio".to_string(),
                description: String::new(),
                start_date: chrono::NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                end_date: None,
            }],
            ..Default::default()
        };
        let html = render(page);
        assert!(html.contains(r#"id="about""#));
        assert!(html.contains(">AL<"));
        assert!(html.contains("Projects Completed"));
        assert!(html.contains(r#"id="skills""#));
        assert!(html.contains("Figma"));
        assert!(html.contains(r#"data-icon="code""#));
        assert!(html.contains(r#"id="experience""#));
        assert!(html.contains("Jun 2022 - Present"));
        assert!(html.contains("via-primary/50"));
    }

    #[test]
    fn test_new_tab_links_carry_rel() {
        let page = PageData {
            social_links: vec![SocialLink {
                id: "gh".to_string(),
                platform: "github".to_string(),
                url: "https://github.com/ada".to_string(),
                icon: None,
            }],
            ..Default::default()
        };
        let html = render(page);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"data-icon="github""#));
        assert!(!html.contains("mailto:hello@example.com"));
    }

    struct FailingSource;

    impl PortfolioSource for FailingSource {
        fn projects(&self) -> Result<Vec<Project>, ContentError> {
            Err(ContentError::NotFound("projects".to_string()))
        }

        fn about(&self) -> Result<Option<AboutProfile>, ContentError> {
            Err(ContentError::NotFound("about".to_string()))
        }

        fn skills(&self) -> Result<Vec<Skill>, ContentError> {
            Err(ContentError::NotFound("skills".to_string()))
        }

        fn experiences(&self) -> Result<Vec<Experience>, ContentError> {
            Err(ContentError::NotFound("experiences".to_string()))
        }

        fn social_links(&self) -> Result<Vec<SocialLink>, ContentError> {
            Err(ContentError::NotFound("social links".to_string()))
        }

        fn seo(&self) -> Result<Option<SeoConfig>, ContentError> {
            Err(ContentError::NotFound("seo".to_string()))
        }
    }

    /// Polls the inner future with `owner` as the current reactive owner, so server
    /// functions can reach the context provided on it.
    struct WithOwner<F> {
        owner: Owner,
        fut: Pin<Box<F>>,
    }

    impl<F: Future> Future for WithOwner<F> {
        type Output = F::Output;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<F::Output> {
            let this = &mut *self;
            this.owner.with(|| this.fut.as_mut().poll(cx))
        }
    }

    #[tokio::test]
    async fn test_failing_source_leaves_sections_empty() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(SiteState {
                source: Arc::new(FailingSource),
                config: SiteConfig {
                    owner: "Ada".to_string(),
                    ..Default::default()
                },
            })
        });

        let landing = WithOwner {
            owner: owner.clone(),
            fut: Box::pin(load_landing()),
        }
        .await;

        assert_eq!(landing.page, PageData::default());
        assert!(!landing.is_authenticated);
        assert_eq!(landing.owner, "Ada");

        let html = owner.with(|| {
            view! { <LandingSections page=landing.page owner=landing.owner /> }.to_html()
        });
        assert!(html.contains(NO_PROJECTS));
        assert_eq!(html.matches("mailto:hello@example.com").count(), 2);
    }
}
