// 💳 Account hierarchy - identity + customer reference + scoped release
//
// "An account is acquired, used, and released. Release runs on every exit path."
//
// Account extends Closeable: every concrete account holds a live Session from
// construction until close(). The base trait defines no resource itself.
// Concrete accounts (CheckingAccount, SavingsAccount) also release on Drop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::CustomerRef;
use crate::error::{BankError, BankResult};

// ============================================================================
// CLOSEABLE
// ============================================================================

/// Scoped-resource capability.
///
/// The first `close` frees held resources. Further calls leave state untouched.
pub trait Closeable {
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

// ============================================================================
// SESSION
// ============================================================================

/// Live handle an open account holds until release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub opened_at: DateTime<Utc>,
}

impl Session {
    pub fn open() -> Self {
        Session {
            token: Uuid::new_v4(),
            opened_at: Utc::now(),
        }
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

pub trait Account: Closeable {
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Non-owning customer reference, if one is attached
    fn customer(&self) -> Option<&CustomerRef>;

    /// Plain reference set: no notification, no back-reference
    fn set_customer(&mut self, customer: Option<CustomerRef>);

    /// Stable string uniquely identifying this account instance
    fn identifier(&self) -> String;

    /// When the account was released (None while open)
    fn closed_at(&self) -> Option<DateTime<Utc>>;

    /// The live session; `AccountClosed` after release
    fn session(&self) -> BankResult<&Session>;
}

/// Run `f` against an open account and release it afterwards, on success and
/// on error alike.
pub fn scoped<A, T, F>(account: &mut A, f: F) -> BankResult<T>
where
    A: Account + ?Sized,
    F: FnOnce(&mut A) -> BankResult<T>,
{
    let result = f(account);
    account.close();
    result
}

// ============================================================================
// SHARED STATE
// ============================================================================

/// Fields every concrete account carries
#[derive(Debug)]
pub(crate) struct AccountState {
    pub(crate) id: i64,
    pub(crate) customer: Option<CustomerRef>,

    /// Minted once; backs the identifier
    pub(crate) account_number: Uuid,

    pub(crate) session: Option<Session>,
    pub(crate) closed_at: Option<DateTime<Utc>>,
}

impl AccountState {
    pub(crate) fn open(id: i64) -> Self {
        AccountState {
            id,
            customer: None,
            account_number: Uuid::new_v4(),
            session: Some(Session::open()),
            closed_at: None,
        }
    }

    pub(crate) fn identifier(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.account_number)
    }

    pub(crate) fn session(&self, prefix: &str) -> BankResult<&Session> {
        self.session.as_ref().ok_or_else(|| BankError::AccountClosed {
            identifier: self.identifier(prefix),
        })
    }

    /// Drop the session and stamp the close time.
    ///
    /// Returns false if already released.
    pub(crate) fn release(&mut self) -> bool {
        match self.session.take() {
            Some(_) => {
                self.closed_at = Some(Utc::now());
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.session.is_none()
    }
}
