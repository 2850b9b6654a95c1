pub mod data;
mod homepage;
mod icon;
mod navbar;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, SsrMode};

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    theme::provide_theme();

    view! {
        <Router>
            <main class="min-h-screen overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    // metadata comes from the SEO accessor, so wait for data before streaming <head>
                    <Route path=path!("/") view=HomePage ssr=SsrMode::Async />
                </Routes>
            </main>
        </Router>
    }
}
