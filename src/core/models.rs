use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// One (word, translation) unit from the remote source. No identity beyond
/// structural equality within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordPair {
    pub word: String,
    pub translation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Which side of a word pair this language displays.
    pub fn project<'a>(&self, pair: &'a WordPair) -> &'a str {
        match self {
            Language::En => &pair.word,
            Language::Ru => &pair.translation,
        }
    }
}

/// A bookmarked prediction. `tag` is a boolean-as-integer marking
/// "came true", toggled from the saved list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPrediction {
    pub text: String,
    pub translation: String,
    pub date: DateTime<Utc>,
    pub tag: u8,
    pub language: Language,
}

impl SavedPrediction {
    pub fn new(text: String, translation: String, language: Language) -> Self {
        Self { text, translation, date: Utc::now(), tag: 0, language }
    }

    /// dd.mm.yy, the format the saved list shows next to each entry.
    pub fn format_date(&self) -> String {
        self.date.format("%d.%m.%y").to_string()
    }
}
