use dioxus::prelude::*;

/// Theme families available in the console.
///
/// Matrix has dark and light variants; Terminal is dark-only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Matrix,
    /// Dark-only high-contrast theme.
    Terminal,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[ThemeFamily::Matrix, ThemeFamily::Terminal];

impl ThemeFamily {
    /// Internal key used for storage and Select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Matrix => "matrix",
            ThemeFamily::Terminal => "terminal",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Matrix => "Matrix",
            ThemeFamily::Terminal => "Terminal",
        }
    }

    /// Parse a family key string, falling back to Matrix.
    pub fn from_key(s: &str) -> Self {
        match s {
            "terminal" => ThemeFamily::Terminal,
            _ => ThemeFamily::Matrix,
        }
    }

    /// Whether this family supports light mode.
    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Terminal)
    }

    /// Resolve to the CSS `data-theme` attribute value.
    ///
    /// Single-mode families ignore `is_dark` and always return their mode.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Matrix, true) => "matrix",
            (ThemeFamily::Matrix, false) => "matrix-light",
            // Terminal is dark-only
            (ThemeFamily::Terminal, _) => "terminal",
        }
    }
}

/// Shared theme state provided as context.
///
/// The sidebar dark/light toggle reads and writes these signals; changes
/// call [`ThemeState::apply`] to update the document.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current family + mode to the document.
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        let theme = family.resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document
/// root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'matrix';
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
