// 🧑 Person hierarchy - shared identity + mandatory speech behavior
//
// "id is structural, greetings are behavioral"
//
// BasePerson carries the identity accessors and the two greeting hooks.
// Person adds a name and a goodbye parameterized by a free-form language string.
// Concrete types (Customer, Teller) decide which languages they accept.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BankError;

// ============================================================================
// LANGUAGE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    German,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
        }
    }
}

impl FromStr for Language {
    type Err = BankError;

    /// Case-insensitive, accepts full names and ISO 639-1 codes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "german" | "de" | "deutsch" => Ok(Language::German),
            _ => Err(BankError::UnsupportedLanguage {
                language: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// BASE PERSON
// ============================================================================

/// Identity base shared by every person-like entity.
///
/// The greeting hooks return the rendered phrase; printing, logging or
/// speaking it is left to the caller.
pub trait BasePerson {
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    fn say_hello_english(&self) -> String;

    fn say_hello_german(&self) -> String;
}

// ============================================================================
// PERSON
// ============================================================================

pub trait Person: BasePerson {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// Say goodbye in `language`.
    ///
    /// Unsupported languages are handled by the implementor: reject with
    /// [`BankError::UnsupportedLanguage`] or fall back to a default.
    fn say_goodbye(&self, language: &str) -> Result<String, BankError>;
}
