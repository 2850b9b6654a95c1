use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::portfolio::{AboutProfile, Experience, Project, SeoConfig, Session, Skill, SocialLink};

#[cfg(feature = "ssr")]
pub use server::SiteState;

#[cfg(feature = "ssr")]
mod server {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::config::SiteConfig;
    use crate::portfolio::{ContentError, PortfolioSource};

    /// Provided to every route and server function.
    #[derive(Clone)]
    pub struct SiteState {
        pub source: Arc<dyn PortfolioSource>,
        pub config: SiteConfig,
    }

    pub fn site_state() -> Result<SiteState, ServerFnError> {
        use_context::<SiteState>().ok_or_else(|| ServerFnError::new("site state missing from context"))
    }

    pub fn source() -> Result<Arc<dyn PortfolioSource>, ServerFnError> {
        Ok(site_state()?.source)
    }

    pub fn content_err(what: &str, err: ContentError) -> ServerFnError {
        tracing::error!(error = %err, "couldn't load {what}");
        ServerFnError::new(err)
    }
}

#[server(input = GetUrl)]
pub async fn get_projects() -> Result<Vec<Project>, ServerFnError> {
    server::source()?
        .projects()
        .map_err(|e| server::content_err("projects", e))
}

#[server(input = GetUrl)]
pub async fn get_about() -> Result<Option<AboutProfile>, ServerFnError> {
    server::source()?
        .about()
        .map_err(|e| server::content_err("about", e))
}

#[server(input = GetUrl)]
pub async fn get_skills() -> Result<Vec<Skill>, ServerFnError> {
    server::source()?
        .skills()
        .map_err(|e| server::content_err("skills", e))
}

#[server(input = GetUrl)]
pub async fn get_experiences() -> Result<Vec<Experience>, ServerFnError> {
    server::source()?
        .experiences()
        .map_err(|e| server::content_err("experiences", e))
}

#[server(input = GetUrl)]
pub async fn get_social_links() -> Result<Vec<SocialLink>, ServerFnError> {
    server::source()?
        .social_links()
        .map_err(|e| server::content_err("social links", e))
}

#[server(input = GetUrl)]
pub async fn get_seo() -> Result<Option<SeoConfig>, ServerFnError> {
    server::source()?
        .seo()
        .map_err(|e| server::content_err("seo", e))
}

#[server(input = GetUrl)]
pub async fn get_user() -> Result<Option<Session>, ServerFnError> {
    use axum_extra::extract::CookieJar;

    use crate::session::session_from_jar;

    let state = server::site_state()?;
    let jar: CookieJar = leptos_axum::extract().await?;
    Ok(session_from_jar(&jar, state.config.session_token.as_deref()))
}

#[server(input = GetUrl)]
pub async fn get_owner() -> Result<String, ServerFnError> {
    Ok(server::site_state()?.config.owner)
}
