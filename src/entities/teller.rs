// 🧾 Teller - concrete Person staffing a bank
//
// Goodbye policy: unrecognized languages fall back to English.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use super::person::{BasePerson, Language, Person};
use crate::error::BankError;

/// Shared, non-owning handle to a teller
pub type TellerRef = Arc<RwLock<Teller>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teller {
    id: i64,
    name: String,

    /// Counter or desk label (e.g. "Window 3")
    desk: Option<String>,
}

impl Teller {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Teller {
            id,
            name: name.into(),
            desk: None,
        }
    }

    pub fn with_desk(mut self, desk: impl Into<String>) -> Self {
        self.desk = Some(desk.into());
        self
    }

    pub fn desk(&self) -> Option<&str> {
        self.desk.as_deref()
    }

    pub fn set_desk(&mut self, desk: Option<String>) {
        self.desk = desk;
    }

    pub fn into_ref(self) -> TellerRef {
        Arc::new(RwLock::new(self))
    }
}

impl BasePerson for Teller {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn say_hello_english(&self) -> String {
        match &self.desk {
            Some(desk) => format!("Welcome! I'm {}, serving you at {}.", self.name, desk),
            None => format!("Welcome! I'm {}.", self.name),
        }
    }

    fn say_hello_german(&self) -> String {
        match &self.desk {
            Some(desk) => format!("Willkommen! Ich bin {} und bediene Sie an {}.", self.name, desk),
            None => format!("Willkommen! Ich bin {}.", self.name),
        }
    }
}

impl Person for Teller {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn say_goodbye(&self, language: &str) -> Result<String, BankError> {
        let language = language.parse::<Language>().unwrap_or(Language::English);

        Ok(match language {
            Language::English => "Thank you for banking with us. Goodbye!".to_string(),
            Language::German => "Vielen Dank für Ihren Besuch. Auf Wiedersehen!".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teller_greetings_without_desk() {
        let teller = Teller::new(3, "Hans");

        assert_eq!(teller.say_hello_english(), "Welcome! I'm Hans.");
        assert_eq!(teller.say_hello_german(), "Willkommen! Ich bin Hans.");
    }

    #[test]
    fn test_teller_greetings_with_desk() {
        let teller = Teller::new(3, "Hans").with_desk("Window 2");

        assert_eq!(teller.desk(), Some("Window 2"));
        assert!(teller.say_hello_english().contains("Window 2"));
        assert!(teller.say_hello_german().contains("Window 2"));
    }

    #[test]
    fn test_teller_goodbye_german() {
        let teller = Teller::new(3, "Hans");

        assert_eq!(
            teller.say_goodbye("German").unwrap(),
            "Vielen Dank für Ihren Besuch. Auf Wiedersehen!"
        );
    }

    #[test]
    fn test_teller_goodbye_falls_back_to_english() {
        let teller = Teller::new(3, "Hans");

        let english = teller.say_goodbye("en").unwrap();
        assert_eq!(teller.say_goodbye("Swahili").unwrap(), english);
        assert_eq!(teller.say_goodbye("").unwrap(), english);
    }

    #[test]
    fn test_teller_accessors_round_trip() {
        let mut teller = Teller::default();

        teller.set_id(i64::MIN);
        teller.set_name("Greta".to_string());
        teller.set_desk(Some("Desk A".to_string()));
        assert_eq!(teller.id(), i64::MIN);
        assert_eq!(teller.name(), "Greta");
        assert_eq!(teller.desk(), Some("Desk A"));

        teller.set_desk(None);
        assert_eq!(teller.desk(), None);
    }
}
