// 🏧 Checking account
//
// Post-release: every field stays readable and writable, only the session is gone.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::account::{Account, AccountState, Closeable, Session};
use super::customer::CustomerRef;
use crate::error::BankResult;

const PREFIX: &str = "CHK";

#[derive(Debug)]
pub struct CheckingAccount {
    state: AccountState,
}

impl CheckingAccount {
    /// Open a new checking account (session acquired here)
    pub fn new(id: i64) -> Self {
        CheckingAccount {
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

impl Closeable for CheckingAccount {
    fn close(&mut self) {
        if self.state.release() {
            tracing::info!(identifier = %self.identifier(), "checking account closed");
        }
    }

    fn is_closed(&self) -> bool {
        self.state.is_closed()
    }
}

impl Account for CheckingAccount {
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

impl Drop for CheckingAccount {
    fn drop(&mut self) {
        self.close();
    }
}
