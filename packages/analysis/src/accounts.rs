//! Mock account and history layer over an injected key-value store.
//!
//! This reproduces the product's demo auth: plain-comparison passwords kept
//! inside the stored record, a current-user key, and a per-user analysis
//! history capped at the 50 most recent entries. Real credential handling is
//! explicitly not this layer's job.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{AnalysisError, Result};
use crate::traits::store::KeyValueStore;
use crate::types::history::{HistoryItem, User, HISTORY_CAP};
use crate::types::report::AnalysisResult;

const USERS_KEY: &str = "truthlens_users";
const CURRENT_USER_KEY: &str = "truthlens_current_user";
const HISTORY_KEY_PREFIX: &str = "truthlens_history_";

/// Stored user record. The password never leaves this module.
#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    name: String,
    email: String,
    password: String,
}

impl UserRecord {
    fn public(&self) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Account and history service over an injected [`KeyValueStore`].
pub struct AccountService<S> {
    store: S,
}

impl<S: KeyValueStore> AccountService<S> {
    /// Create a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new account and sign it in.
    ///
    /// Fails with [`AnalysisError::AccountExists`] when the email is taken.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let mut users = self.load_users().await?;
        if users.contains_key(email) {
            return Err(AnalysisError::AccountExists);
        }

        let record = UserRecord {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = record.public();
        users.insert(email.to_string(), record);
        self.save_users(&users).await?;

        self.set_current_user(&user).await?;
        Ok(user)
    }

    /// Sign in with email and password (plain comparison, mock layer).
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let users = self.load_users().await?;
        let record = users
            .get(email)
            .filter(|r| r.password == password)
            .ok_or(AnalysisError::InvalidCredentials)?;

        let user = record.public();
        self.set_current_user(&user).await?;
        Ok(user)
    }

    /// Sign the current user out.
    pub async fn logout(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY).await
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Result<Option<User>> {
        match self.store.get(CURRENT_USER_KEY).await? {
            Some(raw) => Ok(Some(decode(&raw)?)),
            None => Ok(None),
        }
    }

    /// Append an analysis to a user's history.
    ///
    /// Newest first, truncated to [`HISTORY_CAP`] entries.
    pub async fn save_analysis(
        &self,
        email: &str,
        url: &str,
        result: AnalysisResult,
    ) -> Result<()> {
        let key = history_key(email);
        let mut history = self.load_history(&key).await?;

        history.insert(0, HistoryItem::new(url, result));
        history.truncate(HISTORY_CAP);

        self.store.set(&key, &encode(&history)?).await
    }

    /// A user's saved analyses, newest first.
    pub async fn get_history(&self, email: &str) -> Result<Vec<HistoryItem>> {
        self.load_history(&history_key(email)).await
    }

    async fn load_users(&self) -> Result<HashMap<String, UserRecord>> {
        match self.store.get(USERS_KEY).await? {
            Some(raw) => decode(&raw),
            None => Ok(HashMap::new()),
        }
    }

    async fn save_users(&self, users: &HashMap<String, UserRecord>) -> Result<()> {
        self.store.set(USERS_KEY, &encode(users)?).await
    }

    async fn set_current_user(&self, user: &User) -> Result<()> {
        self.store.set(CURRENT_USER_KEY, &encode(user)?).await
    }

    async fn load_history(&self, key: &str) -> Result<Vec<HistoryItem>> {
        match self.store.get(key).await? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }
}

fn history_key(email: &str) -> String {
    format!("{HISTORY_KEY_PREFIX}{email}")
}

fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| AnalysisError::Storage(Box::new(e)))
}

fn decode<T: for<'de> Deserialize<'de>>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| AnalysisError::Storage(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;

    fn dummy_result() -> AnalysisResult {
        AnalysisResult {
            product_name: "Widget".into(),
            overall_score: 10,
            verdict: "Authentic".into(),
            summary: "fine".into(),
            key_insights: vec![],
            reviews: vec![],
            rating_distribution: vec![],
            sources: None,
        }
    }

    #[tokio::test]
    async fn test_signup_login_logout() {
        let service = AccountService::new(MemoryStore::new());

        let user = service
            .signup("Ada", "ada@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(
            service.current_user().await.unwrap(),
            Some(user.clone())
        );

        service.logout().await.unwrap();
        assert_eq!(service.current_user().await.unwrap(), None);

        let back = service.login("ada@example.com", "hunter2").await.unwrap();
        assert_eq!(back, user);
    }

    #[tokio::test]
    async fn test_duplicate_signup_rejected() {
        let service = AccountService::new(MemoryStore::new());
        service.signup("Ada", "ada@example.com", "a").await.unwrap();

        let err = service
            .signup("Someone Else", "ada@example.com", "b")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::AccountExists));
    }

    #[tokio::test]
    async fn test_bad_credentials_rejected() {
        let service = AccountService::new(MemoryStore::new());
        service.signup("Ada", "ada@example.com", "a").await.unwrap();

        assert!(matches!(
            service.login("ada@example.com", "wrong").await.unwrap_err(),
            AnalysisError::InvalidCredentials
        ));
        assert!(matches!(
            service.login("nobody@example.com", "a").await.unwrap_err(),
            AnalysisError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_history_newest_first_and_capped() {
        let service = AccountService::new(MemoryStore::new());
        let email = "ada@example.com";

        for i in 0..(HISTORY_CAP + 5) {
            service
                .save_analysis(email, &format!("https://shop.example/{i}"), dummy_result())
                .await
                .unwrap();
        }

        let history = service.get_history(email).await.unwrap();
        assert_eq!(history.len(), HISTORY_CAP);
        // Newest first: the last saved URL leads
        assert_eq!(
            history[0].url,
            format!("https://shop.example/{}", HISTORY_CAP + 4)
        );
    }

    #[tokio::test]
    async fn test_history_empty_for_unknown_user() {
        let service = AccountService::new(MemoryStore::new());
        assert!(service.get_history("x@example.com").await.unwrap().is_empty());
    }
}
