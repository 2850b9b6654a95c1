use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::components::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::icon::IconSvg;
use super::theme::use_theme;
use crate::nav::{
    activate, dashboard_visible, MobileMenu, NavTarget, SectionScroller, ThemeChoice,
    DASHBOARD_HREF, NAV_ENTRIES,
};
use crate::social::Icon;

const LINK_CLASS: &str = "px-4 py-2 text-sm font-medium text-muted-foreground hover:text-foreground transition-colors duration-200 relative group";
const MOBILE_LINK_CLASS: &str = "block px-4 py-2 text-sm font-medium text-muted-foreground hover:text-foreground hover:bg-muted rounded-lg transition-colors duration-200";

struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_to_section(&self, id: &str) -> bool {
        let el = if let Some(el) = document().get_element_by_id(id) {
            el
        } else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

#[component]
pub fn Navbar(is_authenticated: bool, brand: String) -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());
    let show_dashboard = dashboard_visible(is_authenticated);

    let on_nav = move |ev: MouseEvent, target: NavTarget| {
        if activate(target, &DocumentScroller).prevents_default() {
            ev.prevent_default();
        }
    };
    let on_mobile_nav = move |ev: MouseEvent, target: NavTarget| {
        let mut activation = None;
        menu.update(|m| activation = Some(m.select(target, &DocumentScroller)));
        if activation.is_some_and(|a| a.prevents_default()) {
            ev.prevent_default();
        }
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/95 backdrop-blur-md border-b border-border/40">
            <div class="container mx-auto max-w-6xl px-4">
                <div class="flex items-center justify-between h-16">
                    <A
                        href="/"
                        attr:class="font-bold text-xl bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent hover:opacity-80 transition-opacity"
                    >
                        {brand}
                    </A>

                    <div class="hidden md:flex items-center gap-1">
                        {NAV_ENTRIES
                            .iter()
                            .map(|entry| {
                                let target = entry.target;
                                view! {
                                    <a
                                        href=entry.href()
                                        class=LINK_CLASS
                                        on:click=move |ev| on_nav(ev, target)
                                    >
                                        {entry.label}
                                        <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-primary to-accent group-hover:w-full transition-all duration-300" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center gap-2">
                        <ThemeMenu />
                        {show_dashboard
                            .then(|| {
                                view! {
                                    <a
                                        href=DASHBOARD_HREF
                                        rel="external"
                                        class="hidden sm:flex px-3 py-1.5 text-sm font-medium rounded-md border border-border hover:bg-muted transition-colors"
                                    >
                                        "Dashboard"
                                    </a>
                                }
                            })}
                        <button
                            class="md:hidden p-2 hover:bg-muted rounded-lg transition-colors"
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            on:click=move |_| menu.update(MobileMenu::toggle)
                        >
                            {move || {
                                let icon = if menu.get().is_open() { Icon::Close } else { Icon::Menu };
                                view! { <IconSvg icon class="w-6 h-6" /> }
                            }}
                        </button>
                    </div>
                </div>

                {move || {
                    menu.get()
                        .is_open()
                        .then(|| {
                            view! {
                                <div class="md:hidden border-t border-border/40 py-4 space-y-2">
                                    {NAV_ENTRIES
                                        .iter()
                                        .map(|entry| {
                                            let target = entry.target;
                                            view! {
                                                <a
                                                    href=entry.href()
                                                    class=MOBILE_LINK_CLASS
                                                    on:click=move |ev| on_mobile_nav(ev, target)
                                                >
                                                    {entry.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                    {show_dashboard
                                        .then(|| {
                                            view! {
                                                <a
                                                    href=DASHBOARD_HREF
                                                    rel="external"
                                                    class=MOBILE_LINK_CLASS
                                                    on:click=move |_| menu.update(MobileMenu::close)
                                                >
                                                    "Dashboard"
                                                </a>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}

#[component]
fn ThemeMenu() -> impl IntoView {
    let theme = StoredValue::new(use_theme());
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                class="rounded-full p-2 hover:bg-muted transition-colors"
                aria-label="Toggle theme"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <IconSvg icon=Icon::Sun class="w-5 h-5 dark:hidden" />
                <IconSvg icon=Icon::Moon class="w-5 h-5 hidden dark:block" />
            </button>
            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="absolute right-0 mt-2 w-32 rounded-md border border-border bg-background/95 backdrop-blur-sm shadow-lg py-1">
                                {ThemeChoice::ALL
                                    .into_iter()
                                    .map(|choice| {
                                        view! {
                                            <button
                                                class="block w-full text-left px-3 py-1.5 text-sm hover:bg-muted"
                                                on:click=move |_| {
                                                    theme.with_value(|t| t.set(choice));
                                                    set_open.set(false);
                                                }
                                            >
                                                {choice.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
