//! Light/dark theme preference
//!
//! The chosen theme is stored under a single LocalStorage key as a bare
//! string (`"light"` / `"dark"`), matching what the rest of the site expects.
//! With no stored choice the system `prefers-color-scheme` preference wins,
//! defaulting to dark.

/// Site theme. Dark is the design default; light is an opt-in override
/// applied via the `light-theme` class on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Class toggled on `<html>` when the light theme is active
pub const LIGHT_CLASS: &str = "light-theme";

impl Theme {
    /// LocalStorage key (shared with the site's CSS docs)
    const STORAGE_KEY: &'static str = "siteTheme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The opposite theme (what a toggle click switches to)
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}\u{fe0f}", // ☀️
            Theme::Dark => "\u{1f319}",         // 🌙
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }

    /// Load the stored preference from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let value = storage.get_item(Self::STORAGE_KEY).ok()??;
        Self::from_str(&value)
    }

    /// Save the preference to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, self.as_str());
            log::info!("Theme saved: {}", self.as_str());
        }
    }

    /// The system color-scheme preference, defaulting to dark (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn system_preference() -> Self {
        let prefers_light = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok())
            .flatten()
            .map(|mql| mql.matches())
            .unwrap_or(false);

        if prefers_light { Theme::Light } else { Theme::Dark }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Option<Self> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn system_preference() -> Self {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("solarized"), None);
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_only_light_is_light() {
        assert!(Theme::Light.is_light());
        assert!(!Theme::Dark.is_light());
    }
}
