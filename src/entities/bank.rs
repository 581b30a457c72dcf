// 🏦 Bank aggregate - strict ownership tree
//
// "A Branch exists only inside one Bank. A Vault exists only inside one Branch."
//
// Bank ──owns──▶ Branch* ──owns──▶ Vault*
//   └──refers──▶ Customer, Teller (shared handles, lifetime independent)
//
// Branch and Vault have crate-private constructors: the only way to create one
// is through its owner, and nothing hands an owned child back out. Removing a
// child drops it. Branch and Vault are Serialize (snapshots) but neither Clone
// nor Deserialize, so an owned copy can't be minted outside the tree.

use serde::Serialize;

use super::customer::CustomerRef;
use super::teller::TellerRef;
use crate::error::{BankError, BankResult};

// ============================================================================
// VAULT
// ============================================================================

/// Safe-deposit vault owned by exactly one branch
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Vault {
    id: String,
    occupied: bool,
}

impl Vault {
    pub(crate) fn new(id: String) -> Self {
        Vault {
            id,
            occupied: false,
        }
    }

    /// Copy for a new owner; only reachable through `Bank::clone`
    pub(crate) fn duplicate(&self) -> Self {
        Vault {
            id: self.id.clone(),
            occupied: self.occupied,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: String) {
        self.id = id;
    }

    pub fn occupied(&self) -> bool {
        self.occupied
    }

    /// Plain field set, no double-booking check
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }
}

// ============================================================================
// BRANCH
// ============================================================================

/// Branch owned by exactly one bank
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Branch {
    address: String,
    phone_number: String,
    vaults: Vec<Vault>,
}

impl Branch {
    pub(crate) fn new(address: String, phone_number: String) -> Self {
        Branch {
            address,
            phone_number,
            vaults: Vec::new(),
        }
    }

    /// Deep copy of the branch and its vaults for a new owning bank
    pub(crate) fn duplicate(&self) -> Self {
        Branch {
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            vaults: self.vaults.iter().map(Vault::duplicate).collect(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: String) {
        self.address = address;
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn set_phone_number(&mut self, phone_number: String) {
        self.phone_number = phone_number;
    }

    /// Create a vault inside this branch (starts unoccupied)
    pub fn install_vault(&mut self, id: impl Into<String>) -> &mut Vault {
        let vault = Vault::new(id.into());
        tracing::debug!(branch = %self.address, vault = %vault.id, "vault installed");

        self.vaults.push(vault);
        let last = self.vaults.len() - 1;
        &mut self.vaults[last]
    }

    pub fn vaults(&self) -> &[Vault] {
        &self.vaults
    }

    pub fn vaults_mut(&mut self) -> impl Iterator<Item = &mut Vault> {
        self.vaults.iter_mut()
    }

    /// First vault with this id
    pub fn vault(&self, id: &str) -> Option<&Vault> {
        self.vaults.iter().find(|v| v.id == id)
    }

    pub fn vault_mut(&mut self, id: &str) -> Option<&mut Vault> {
        self.vaults.iter_mut().find(|v| v.id == id)
    }

    /// Remove (and drop) the first vault with this id
    pub fn remove_vault(&mut self, id: &str) -> BankResult<()> {
        let position = self
            .vaults
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| BankError::VaultNotFound { id: id.to_string() })?;

        self.vaults.remove(position);
        tracing::debug!(branch = %self.address, vault = %id, "vault removed");
        Ok(())
    }

    pub fn vault_count(&self) -> usize {
        self.vaults.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.vaults.iter().filter(|v| v.occupied).count()
    }

    /// Vaults not currently occupied
    pub fn available_vaults(&self) -> Vec<&Vault> {
        self.vaults.iter().filter(|v| !v.occupied).collect()
    }
}

// ============================================================================
// BANK
// ============================================================================

/// Aggregate root of the ownership tree
#[derive(Debug, Default)]
pub struct Bank {
    id: i64,
    name: String,

    // Non-owning references
    customer: Option<CustomerRef>,
    teller: Option<TellerRef>,

    // Owned children
    branches: Vec<Branch>,
}

impl Bank {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Bank {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_customer(mut self, customer: CustomerRef) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_teller(mut self, teller: TellerRef) -> Self {
        self.teller = Some(teller);
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn customer(&self) -> Option<&CustomerRef> {
        self.customer.as_ref()
    }

    pub fn set_customer(&mut self, customer: Option<CustomerRef>) {
        self.customer = customer;
    }

    pub fn teller(&self) -> Option<&TellerRef> {
        self.teller.as_ref()
    }

    pub fn set_teller(&mut self, teller: Option<TellerRef>) {
        self.teller = teller;
    }

    /// Create a branch owned by this bank
    pub fn open_branch(
        &mut self,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> &mut Branch {
        let branch = Branch::new(address.into(), phone_number.into());
        tracing::debug!(bank = %self.name, address = %branch.address, "branch opened");

        self.branches.push(branch);
        let last = self.branches.len() - 1;
        &mut self.branches[last]
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> impl Iterator<Item = &mut Branch> {
        self.branches.iter_mut()
    }

    pub fn branch(&self, index: usize) -> Option<&Branch> {
        self.branches.get(index)
    }

    pub fn branch_mut(&mut self, index: usize) -> Option<&mut Branch> {
        self.branches.get_mut(index)
    }

    /// First branch at this address
    pub fn find_branch(&self, address: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.address == address)
    }

    pub fn find_branch_mut(&mut self, address: &str) -> Option<&mut Branch> {
        self.branches.iter_mut().find(|b| b.address == address)
    }

    /// Remove the branch at `index`, dropping it and all its vaults
    pub fn remove_branch(&mut self, index: usize) -> BankResult<()> {
        if index >= self.branches.len() {
            return Err(BankError::BranchNotFound { index });
        }

        let branch = self.branches.remove(index);
        tracing::debug!(
            bank = %self.name,
            address = %branch.address,
            vaults = branch.vaults.len(),
            "branch removed"
        );
        Ok(())
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Total vaults across all branches
    pub fn vault_count(&self) -> usize {
        self.branches.iter().map(Branch::vault_count).sum()
    }
}

/// Deep-copies the ownership tree; customer/teller handles are shared
impl Clone for Bank {
    fn clone(&self) -> Self {
        Bank {
            id: self.id,
            name: self.name.clone(),
            customer: self.customer.clone(),
            teller: self.teller.clone(),
            branches: self.branches.iter().map(Branch::duplicate).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
