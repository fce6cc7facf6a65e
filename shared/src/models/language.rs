//! Display language selection

use serde::{Deserialize, Serialize};

/// Display language for the page and for model replies.
///
/// Carried per request via the `lang` form field; nothing is persisted
/// across requests, so every submission states its language explicitly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French, the default UI language
    #[default]
    Fr,
    /// Malagasy, obtained by translating displayed text through the model
    Mg,
}

impl Language {
    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::Mg,
            Language::Mg => Language::Fr,
        }
    }

    /// Two-letter form value (`fr` / `mg`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Mg => "mg",
        }
    }
}
