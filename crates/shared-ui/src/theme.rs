use dioxus::prelude::*;

/// Color mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// CSS `data-theme` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted mode key, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Shared theme state provided as context. The sidebar toggle and the
/// settings appearance section both read and write this signal; changes
/// call [`ThemeState::apply`] to update the document.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn mode(&self) -> ThemeMode {
        if *self.is_dark.read() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Apply the current mode to the document root.
    pub fn apply(&self) {
        set_theme(self.mode().as_str());
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document
/// root. Call this once in the top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'light';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn mode_key_roundtrip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_key(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_light() {
        assert_eq!(ThemeMode::from_key("solarized"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }
}
