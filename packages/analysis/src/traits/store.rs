//! Injected key-value storage capability.
//!
//! The persistence collaborator is a simple keyed text store (browser local
//! storage in the original deployment). Making it an explicit injected
//! interface keeps the account/history layer testable without a real browser
//! environment.

use async_trait::async_trait;

use crate::error::Result;

/// Simple keyed text storage: get/set/remove by key.
///
/// No transactional guarantees beyond the host storage's write atomicity.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if any.
    async fn remove(&self, key: &str) -> Result<()>;
}
