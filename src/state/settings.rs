//! Settings page form state.
//!
//! Preferences are page-local UI state; nothing is persisted until a real
//! settings backend exists (saving surfaces the pending notice).

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

/// Interface language choices offered by the settings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::English, Self::Spanish, Self::French, Self::German];

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// Application settings the page edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub notifications: bool,
    pub auto_save: bool,
    pub dark_mode: bool,
    /// Whole-number percentage; verdicts below it would be flagged as
    /// inconclusive by a future backend.
    pub confidence_threshold: u8,
    pub language: Language,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            notifications: true,
            auto_save: true,
            dark_mode: false,
            confidence_threshold: 75,
            language: Language::English,
        }
    }
}

/// Parse the threshold input, clamping to 0–100. Returns `None` for
/// non-numeric input so the caller keeps the previous value.
pub fn parse_threshold(input: &str) -> Option<u8> {
    input.trim().parse::<i64>().ok().map(|v| v.clamp(0, 100) as u8)
}
