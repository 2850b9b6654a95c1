use leptos::prelude::*;
use leptos_use::{use_color_mode, ColorMode, UseColorModeReturn};

use crate::nav::{ThemeChoice, ThemeController, ThemeHandle};

/// Theme controller backed by `leptos-use`'s color mode, which persists the choice in
/// local storage and puts `light`/`dark` on the `<html>` element.
#[derive(Clone, Copy)]
struct ColorModeTheme {
    store: Signal<ColorMode>,
    set_mode: WriteSignal<ColorMode>,
}

impl ThemeController for ColorModeTheme {
    fn current(&self) -> ThemeChoice {
        // stored as "light", "dark" or "auto"; custom modes read as system
        self.store
            .get_untracked()
            .to_string()
            .parse()
            .unwrap_or_default()
    }

    fn set(&self, choice: ThemeChoice) {
        let mode = match choice {
            ThemeChoice::Light => ColorMode::Light,
            ThemeChoice::Dark => ColorMode::Dark,
            ThemeChoice::System => ColorMode::Auto,
        };
        self.set_mode.set(mode);
    }
}

pub fn provide_theme() {
    let UseColorModeReturn {
        store, set_mode, ..
    } = use_color_mode();
    provide_context(ThemeHandle::new(ColorModeTheme { store, set_mode }));
}

pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}
