// 🐷 Savings account
//
// Post-release: the customer handle is released along with the session.
// A later set_customer re-attaches normally.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::account::{Account, AccountState, Closeable, Session};
use super::customer::CustomerRef;
use crate::error::BankResult;

const PREFIX: &str = "SAV";

#[derive(Debug)]
pub struct SavingsAccount {
    state: AccountState,
}

impl SavingsAccount {
    pub fn new(id: i64) -> Self {
        SavingsAccount {
            state: AccountState::open(id),
        }
    }

    pub fn with_customer(mut self, customer: CustomerRef) -> Self {
        self.state.customer = Some(customer);
        self
    }

    pub fn account_number(&self) -> Uuid {
        self.state.account_number
    }
}

impl Closeable for SavingsAccount {
    fn close(&mut self) {
        if self.state.release() {
            self.state.customer = None;
            tracing::info!(identifier = %self.identifier(), "savings account closed");
        }
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }
}

impl Account for SavingsAccount {
    fn id(&self) -> i64 {
        self.state.id
    }

    fn set_id(&mut self, id: i64) {
        self.state.id = id;
    }

    fn customer(&self) -> Option<&CustomerRef> {
        self.state.customer.as_ref()
    }

    fn set_customer(&mut self, customer: Option<CustomerRef>) {
        self.state.customer = customer;
    }

    fn identifier(&self) -> String {
        self.state.identifier(PREFIX)
    }

    fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.state.closed_at
    }

    fn session(&self) -> BankResult<&Session> {
        self.state.session(PREFIX)
    }
}

impl Drop for SavingsAccount {
    fn drop(&mut self) {
        self.close();
    }
}
