// 👤 Customer - concrete Person referenced (never owned) by accounts and banks
//
// Goodbye policy: English and German only. Anything else is rejected.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use super::person::{BasePerson, Language, Person};
use crate::error::BankError;

/// Shared, non-owning handle to a customer.
///
/// Accounts and banks hold clones of the same handle; the customer lives as
/// long as any holder (or the caller) keeps one.
pub type CustomerRef = Arc<RwLock<Customer>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: i64,
    name: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
        }
    }

    /// Wrap into a shared handle
    pub fn into_ref(self) -> CustomerRef {
        Arc::new(RwLock::new(self))
    }
}

impl BasePerson for Customer {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn say_hello_english(&self) -> String {
        format!("Hello, my name is {}.", self.name)
    }

    fn say_hello_german(&self) -> String {
        format!("Hallo, mein Name ist {}.", self.name)
    }
}

impl Person for Customer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn say_goodbye(&self, language: &str) -> Result<String, BankError> {
        match language.parse::<Language>()? {
            Language::English => Ok("Goodbye!".to_string()),
            Language::German => Ok("Auf Wiedersehen!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new(7, "Ada");

        assert_eq!(customer.id(), 7);
        assert_eq!(customer.name(), "Ada");
    }

    #[test]
    fn test_customer_greetings() {
        let customer = Customer::new(1, "Ada");

        assert_eq!(customer.say_hello_english(), "Hello, my name is Ada.");
        assert_eq!(customer.say_hello_german(), "Hallo, mein Name ist Ada.");
    }

    #[test]
    fn test_customer_goodbye_supported_languages() {
        let customer = Customer::new(1, "Ada");

        assert_eq!(customer.say_goodbye("english").unwrap(), "Goodbye!");
        assert_eq!(customer.say_goodbye("de").unwrap(), "Auf Wiedersehen!");
    }

    #[test]
    fn test_customer_goodbye_rejects_unknown_language() {
        let customer = Customer::new(1, "Ada");

        let result = customer.say_goodbye("Italian");
        assert_eq!(
            result,
            Err(BankError::UnsupportedLanguage {
                language: "Italian".to_string()
            })
        );
    }

    #[test]
    fn test_customer_accessors_round_trip() {
        let mut customer = Customer::default();

        customer.set_id(-42);
        customer.set_name(String::new());
        assert_eq!(customer.id(), -42);
        assert_eq!(customer.name(), "");

        customer.set_id(0);
        customer.set_name("Grace".to_string());
        assert_eq!(customer.id(), 0);
        assert_eq!(customer.name(), "Grace");
    }

    #[test]
    fn test_customer_ref_shares_updates() {
        let handle = Customer::new(1, "Ada").into_ref();
        let alias = Arc::clone(&handle);

        alias.write().unwrap().set_name("Ada Lovelace".to_string());

        assert_eq!(handle.read().unwrap().name(), "Ada Lovelace");
    }

    #[test]
    fn test_customer_usable_as_trait_object() {
        let people: Vec<Box<dyn Person>> = vec![Box::new(Customer::new(1, "Ada"))];

        for person in &people {
            assert!(!person.say_hello_english().is_empty());
            assert!(!person.say_hello_german().is_empty());
            assert!(person.say_goodbye("en").is_ok());
        }
    }
}
