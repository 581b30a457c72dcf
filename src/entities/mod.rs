// Entity Models
//
// Two hierarchies and one ownership tree:
// - Person:  BasePerson (id + greetings) → Person (name + goodbye) → Customer, Teller
// - Account: Closeable → Account (id + customer + identifier) → CheckingAccount, SavingsAccount
// - Bank:    Bank ─owns→ Branch ─owns→ Vault
//
// References between trees (account → customer, bank → customer/teller) are
// shared handles, never owners.

pub mod person;
pub mod customer;
pub mod teller;
pub mod account;
pub mod checking;
pub mod savings;
pub mod bank;

pub use person::{BasePerson, Language, Person};
pub use customer::{Customer, CustomerRef};
pub use teller::{Teller, TellerRef};
pub use account::{scoped, Account, Closeable, Session};
pub use checking::CheckingAccount;
pub use savings::SavingsAccount;
pub use bank::{Bank, Branch, Vault};
