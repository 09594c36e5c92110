use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::config::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Passer en thème sombre",
            Theme::Dark => "Passer en thème clair",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// Set or remove the `dark` class on `<html>`.
fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = document().document_element() {
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    // the preference only exists in the browser; the server always renders light
    #[cfg(feature = "hydrate")]
    let (theme, set_theme) = {
        let (theme, set_theme, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        (theme, set_theme)
    };
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    Effect::new(move |_| apply(theme.get()));

    view! {
        <button
            type="button"
            class="text-xl px-2 py-1 rounded-md hover:bg-muted/20 transition-colors duration-200"
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| set_theme.set(theme.get_untracked().toggled())
        >
            {move || theme.get().icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
    }
}
