//! Mock directory service standing in for the product's backend.
//!
//! This module provides the `DirectoryClient`, which answers credential
//! checks and serves the demo content. There is no network; authentication
//! calls sleep for a fixed interval so callers still cross a real
//! suspension point and the in-flight state stays observable.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use crate::auth::{AuthError, Identity, Role};
use crate::models::{Camera, CrimeZone, IncidentReport, Notification, RouteOption};

use super::fixtures;

/// Simulated round trip for authenticate/register calls.
/// One second, matching the hosted demo's artificial delay.
const AUTH_ROUND_TRIP_MS: u64 = 1000;

/// One row of the mock credential table. Plaintext fixture data simulating
/// a backend account; not a credential store.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub email: String,
    pub password: String,
    pub identity: Identity,
}

/// Client for the mock directory.
/// Clone is cheap - the credential table sits behind an `Arc` and is shared
/// by all clones, so accounts registered through one handle are visible to
/// the others.
#[derive(Clone)]
pub struct DirectoryClient {
    records: Arc<Mutex<Vec<CredentialRecord>>>,
    latency: Duration,
}

impl DirectoryClient {
    /// Create a client with the demo accounts and the standard delay.
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(AUTH_ROUND_TRIP_MS))
    }

    /// Create a client with a custom simulated round trip. Tests pass zero.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            records: Arc::new(Mutex::new(fixtures::demo_accounts())),
            latency,
        }
    }

    /// Check a credential pair against the table and return the matching
    /// identity. The password never leaves this call.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.latency).await;

        let records = self.records.lock().unwrap();
        match records
            .iter()
            .find(|r| r.email == email && r.password == password)
        {
            Some(record) => {
                debug!(email, "Sign-in accepted");
                Ok(record.identity.clone())
            }
            None => {
                debug!(email, "Sign-in rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Create an account for a fresh email and return its identity.
    ///
    /// The new record joins the in-memory table, so the account can sign in
    /// again for the life of the process. The table is never persisted; a
    /// fresh process starts from the demo accounts.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.latency).await;

        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.email == email) {
            debug!(email, "Registration rejected: email taken");
            return Err(AuthError::DuplicateAccount);
        }

        let identity = Identity {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            avatar: None,
        };

        records.push(CredentialRecord {
            email: email.to_string(),
            password: password.to_string(),
            identity: identity.clone(),
        });

        debug!(email, "Account registered");
        Ok(identity)
    }

    // ===== Demo content =====

    pub fn cameras(&self) -> Vec<Camera> {
        fixtures::cameras()
    }

    pub fn crime_zones(&self) -> Vec<CrimeZone> {
        fixtures::crime_zones()
    }

    pub fn route_options(&self) -> Vec<RouteOption> {
        fixtures::route_options()
    }

    pub fn seed_reports(&self) -> Vec<IncidentReport> {
        fixtures::seed_reports()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        fixtures::notifications()
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DirectoryClient {
        DirectoryClient::with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_authenticate_demo_user() {
        let identity = client()
            .authenticate("user@example.com", "password")
            .await
            .unwrap();
        assert_eq!(identity.id, "1");
        assert_eq!(identity.name, "John Doe");
        assert_eq!(identity.role, Role::User);
    }

    #[tokio::test]
    async fn test_authenticate_demo_admin() {
        let identity = client()
            .authenticate("admin@example.com", "password")
            .await
            .unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert!(identity.role.can_view_admin());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_pair_fails() {
        let err = client()
            .authenticate("nobody@example.com", "password")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_fails() {
        let err = client()
            .authenticate("user@example.com", "hunter2")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_register_fresh_email() {
        let identity = client()
            .register("Ada Lovelace", "ada@example.com", "s3cret")
            .await
            .unwrap();
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.email, "ada@example.com");
        assert!(identity.avatar.is_none());
        assert!(!identity.id.is_empty());
    }

    #[tokio::test]
    async fn test_register_taken_email_fails_regardless_of_password() {
        let err = client()
            .register("Someone Else", "user@example.com", "different")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::DuplicateAccount);
    }

    #[tokio::test]
    async fn test_registered_account_can_sign_in() {
        let client = client();
        client
            .register("Ada Lovelace", "ada@example.com", "s3cret")
            .await
            .unwrap();

        let identity = client.authenticate("ada@example.com", "s3cret").await.unwrap();
        assert_eq!(identity.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_clones_share_the_table() {
        let original = client();
        let clone = original.clone();
        clone
            .register("Ada Lovelace", "ada@example.com", "s3cret")
            .await
            .unwrap();

        assert!(original
            .authenticate("ada@example.com", "s3cret")
            .await
            .is_ok());
    }

    #[test]
    fn test_demo_content_is_seeded() {
        let client = client();
        assert_eq!(client.cameras().len(), 5);
        assert_eq!(client.crime_zones().len(), 3);
        assert_eq!(client.route_options().len(), 3);
        assert_eq!(client.seed_reports().len(), 4);
        assert_eq!(client.notifications().len(), 3);
    }
}
