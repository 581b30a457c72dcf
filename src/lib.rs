// Bank Entities - Core Library
// Polymorphic entity model: person hierarchy, closeable accounts, bank ownership tree

pub mod error;
pub mod entities;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{BankError, BankResult};
pub use entities::{
    BasePerson, Person, Language,
    Customer, CustomerRef,
    Teller, TellerRef,
    Account, Closeable, Session, scoped,
    CheckingAccount, SavingsAccount,
    Bank, Branch, Vault,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
