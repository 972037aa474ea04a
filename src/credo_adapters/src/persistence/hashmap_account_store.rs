use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use credo_core::{Account, AccountStore, AccountStoreError, Email};

/// In-memory account store.
///
/// Counter updates happen inside a single write-lock critical section, so
/// concurrent failed logins for the same account never lose an increment -
/// the one race that would weaken the lockout guarantee.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.email().clone(), account);
        Ok(())
    }

    async fn increment_failed_attempts(&self, email: &Email) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.record_failed_attempt();
        Ok(())
    }

    async fn reset_failed_attempts(&self, email: &Email) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.clear_failed_attempts();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(address: &str) -> Email {
        Email::try_from(address.to_string()).unwrap()
    }

    fn account(address: &str) -> Account {
        Account::new(email(address), "$argon2id$fake".to_string())
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = HashMapAccountStore::new();
        store.insert(account("a@example.com")).await.unwrap();

        let found = store.find_by_email(&email("a@example.com")).await.unwrap();
        assert!(found.is_some());
        let missing = store.find_by_email(&email("b@example.com")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = HashMapAccountStore::new();
        store.insert(account("a@example.com")).await.unwrap();

        let result = store.insert(account("a@example.com")).await;
        assert_eq!(result, Err(AccountStoreError::AccountAlreadyExists));
    }

    #[tokio::test]
    async fn counter_operations_require_an_existing_account() {
        let store = HashMapAccountStore::new();
        assert_eq!(
            store.increment_failed_attempts(&email("a@example.com")).await,
            Err(AccountStoreError::AccountNotFound)
        );
        assert_eq!(
            store.reset_failed_attempts(&email("a@example.com")).await,
            Err(AccountStoreError::AccountNotFound)
        );
    }

    #[tokio::test]
    async fn concurrent_increments_are_all_counted() {
        let store = HashMapAccountStore::new();
        store.insert(account("a@example.com")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..5 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .increment_failed_attempts(&email("a@example.com"))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let found = store
            .find_by_email(&email("a@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.failed_attempts(), 5);
        assert!(found.is_locked());
    }

    #[tokio::test]
    async fn reset_clears_the_counter() {
        let store = HashMapAccountStore::new();
        store.insert(account("a@example.com")).await.unwrap();
        store
            .increment_failed_attempts(&email("a@example.com"))
            .await
            .unwrap();

        store
            .reset_failed_attempts(&email("a@example.com"))
            .await
            .unwrap();
        let found = store
            .find_by_email(&email("a@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.failed_attempts(), 0);
    }
}
