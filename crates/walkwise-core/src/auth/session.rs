use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::directory::DirectoryClient;
use crate::storage::StateStore;

use super::{AuthError, Identity};

/// State-store key holding the session snapshot
const SESSION_KEY: &str = "session";

/// Observable lifecycle state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    /// Transient: the startup restore or a sign-in/sign-up is pending.
    Authenticating,
    Authenticated,
}

/// Capability set handed to the view gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCaps {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

#[derive(Debug)]
struct SessionInner {
    identity: Option<Identity>,
    /// True from construction until `restore` completes, and again while an
    /// auth attempt is in flight.
    loading: bool,
}

/// Owner of the single authenticated identity.
///
/// Constructed once at the composition root and handed to whoever needs it.
/// Clone is cheap - clones share one session, so an identity signed in
/// through one handle is visible to all of them.
#[derive(Clone)]
pub struct SessionStore {
    directory: DirectoryClient,
    state: StateStore,
    inner: Arc<Mutex<SessionInner>>,
    /// Held across the directory round trip: at most one sign-in or sign-up
    /// attempt runs at a time, later submissions wait their turn.
    attempt: Arc<tokio::sync::Mutex<()>>,
}

impl SessionStore {
    /// Create a store in the pre-restore loading state. Callers run
    /// `restore` before reading the session state.
    pub fn new(directory: DirectoryClient, state: StateStore) -> Self {
        Self {
            directory,
            state,
            inner: Arc::new(Mutex::new(SessionInner {
                identity: None,
                loading: true,
            })),
            attempt: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Read the session snapshot, if any, and adopt it as the current
    /// identity without re-authentication. Returns whether a session was
    /// restored.
    ///
    /// Has no failure mode: a missing or unreadable snapshot leaves the
    /// store signed out.
    pub fn restore(&self) -> bool {
        let restored = match self.state.load::<Identity>(SESSION_KEY) {
            Ok(Some(identity)) => {
                debug!(email = %identity.email, "Session restored from snapshot");
                Some(identity)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session snapshot");
                None
            }
        };

        let mut inner = self.inner.lock().unwrap();
        let found = restored.is_some();
        inner.identity = restored;
        inner.loading = false;
        found
    }

    /// Exchange a credential pair for an authenticated identity.
    ///
    /// On success the identity becomes current and the session snapshot is
    /// written. On failure the store is left exactly as it was before the
    /// call.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let _attempt = self.attempt.lock().await;
        self.set_loading(true);
        let result = self.directory.authenticate(email, password).await;
        self.finish_attempt(result)
    }

    /// Register a new account and sign it in.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let _attempt = self.attempt.lock().await;
        self.set_loading(true);
        let result = self.directory.register(name, email, password).await;
        self.finish_attempt(result)
    }

    /// Drop the current identity and delete the snapshot. Idempotent.
    pub fn sign_out(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.identity = None;
            inner.loading = false;
        }
        if let Err(e) = self.state.remove(SESSION_KEY) {
            warn!(error = %e, "Failed to delete session snapshot");
        }
        debug!("Signed out");
    }

    /// The current identity, if authenticated.
    pub fn identity(&self) -> Option<Identity> {
        self.inner.lock().unwrap().identity.clone()
    }

    pub fn state(&self) -> SessionState {
        let inner = self.inner.lock().unwrap();
        if inner.loading {
            SessionState::Authenticating
        } else if inner.identity.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Capability set consumed by the view gate on every render.
    pub fn caps(&self) -> SessionCaps {
        let inner = self.inner.lock().unwrap();
        SessionCaps {
            is_authenticated: inner.identity.is_some(),
            is_loading: inner.loading,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().unwrap().identity.is_some()
    }

    fn set_loading(&self, loading: bool) {
        self.inner.lock().unwrap().loading = loading;
    }

    fn finish_attempt(&self, result: Result<Identity, AuthError>) -> Result<Identity, AuthError> {
        match result {
            Ok(identity) => {
                {
                    let mut inner = self.inner.lock().unwrap();
                    inner.identity = Some(identity.clone());
                    inner.loading = false;
                }
                // Snapshot write failure is non-fatal: the in-memory
                // identity stays authoritative for the rest of the session.
                if let Err(e) = self.state.save(SESSION_KEY, &identity) {
                    warn!(error = %e, "Failed to write session snapshot");
                }
                Ok(identity)
            }
            Err(e) => {
                self.set_loading(false);
                Err(e)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use std::time::Duration;

    fn fresh_store(dir: &tempfile::TempDir) -> SessionStore {
        let state = StateStore::new(dir.path().to_path_buf()).unwrap();
        SessionStore::new(DirectoryClient::with_latency(Duration::ZERO), state)
    }

    /// Store that has already finished its startup restore.
    fn restored_store(dir: &tempfile::TempDir) -> SessionStore {
        let store = fresh_store(dir);
        store.restore();
        store
    }

    #[test]
    fn test_store_starts_loading_until_restore() {
        let dir = tempfile::tempdir().unwrap();
        let store = fresh_store(&dir);

        assert_eq!(store.state(), SessionState::Authenticating);
        assert!(store.caps().is_loading);

        assert!(!store.restore());
        assert_eq!(store.state(), SessionState::Unauthenticated);
        assert!(!store.caps().is_loading);
        assert!(!store.caps().is_authenticated);
    }

    #[tokio::test]
    async fn test_unknown_pair_fails_and_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = restored_store(&dir);

        let err = store.sign_in("nobody@example.com", "nope").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(store.state(), SessionState::Unauthenticated);
        assert!(store.identity().is_none());
    }

    #[tokio::test]
    async fn test_demo_accounts_sign_in_with_expected_roles() {
        let dir = tempfile::tempdir().unwrap();
        let store = restored_store(&dir);

        let user = store.sign_in("user@example.com", "password").await.unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(store.state(), SessionState::Authenticated);

        let admin = store.sign_in("admin@example.com", "password").await.unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_current_identity() {
        let dir = tempfile::tempdir().unwrap();
        let store = restored_store(&dir);

        store.sign_in("user@example.com", "password").await.unwrap();
        let err = store.sign_in("user@example.com", "wrong").await.unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(store.state(), SessionState::Authenticated);
        assert_eq!(store.identity().unwrap().name, "John Doe");
    }

    #[tokio::test]
    async fn test_sign_up_taken_email_fails_regardless_of_password() {
        let dir = tempfile::tempdir().unwrap();
        let store = restored_store(&dir);

        let err = store
            .sign_up("Impostor", "user@example.com", "anything")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::DuplicateAccount);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_up_fresh_email_authenticates_as_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = restored_store(&dir);

        let identity = store
            .sign_up("Ada Lovelace", "ada@example.com", "s3cret")
            .await
            .unwrap();

        assert_eq!(identity.role, Role::User);
        assert!(store.caps().is_authenticated);
        assert_eq!(store.state(), SessionState::Authenticated);
    }

    #[tokio::test]
    async fn test_snapshot_round_trips_into_a_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let first = restored_store(&dir);
        let signed_in = first.sign_in("user@example.com", "password").await.unwrap();

        // Same state directory, new process as far as the store can tell.
        let second = fresh_store(&dir);
        assert!(second.restore());

        let restored = second.identity().unwrap();
        assert_eq!(restored.id, signed_in.id);
        assert_eq!(restored.name, signed_in.name);
        assert_eq!(restored.role, signed_in.role);
        assert_eq!(second.state(), SessionState::Authenticated);
    }

    #[tokio::test]
    async fn test_sign_out_deletes_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = restored_store(&dir);

        store.sign_in("user@example.com", "password").await.unwrap();
        store.sign_out();
        assert_eq!(store.state(), SessionState::Unauthenticated);

        // Signing out twice is fine.
        store.sign_out();

        let second = fresh_store(&dir);
        assert!(!second.restore());
        assert!(second.identity().is_none());
        assert!(!second.caps().is_authenticated);
    }

    #[test]
    fn test_corrupt_snapshot_restores_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "{definitely not json").unwrap();

        let store = fresh_store(&dir);
        assert!(!store.restore());
        assert_eq!(store.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_loading_is_observable_while_attempt_is_in_flight() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateStore::new(dir.path().to_path_buf()).unwrap();
        let store = SessionStore::new(
            DirectoryClient::with_latency(Duration::from_millis(200)),
            state,
        );
        store.restore();

        let worker = store.clone();
        let handle =
            tokio::spawn(async move { worker.sign_in("user@example.com", "password").await });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(store.state(), SessionState::Authenticating);
        assert!(store.caps().is_loading);

        handle.await.unwrap().unwrap();
        assert_eq!(store.state(), SessionState::Authenticated);
        assert!(!store.caps().is_loading);
    }

    #[tokio::test]
    async fn test_concurrent_attempts_run_one_at_a_time() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateStore::new(dir.path().to_path_buf()).unwrap();
        let store = SessionStore::new(
            DirectoryClient::with_latency(Duration::from_millis(100)),
            state,
        );
        store.restore();

        let started = std::time::Instant::now();
        let a = store.clone();
        let b = store.clone();
        let (first, second) = tokio::join!(
            a.sign_in("user@example.com", "password"),
            b.sign_in("admin@example.com", "password"),
        );
        first.unwrap();
        second.unwrap();

        // Two serialized 100ms round trips cannot finish in one round trip.
        assert!(started.elapsed() >= Duration::from_millis(190));
        assert_eq!(store.state(), SessionState::Authenticated);
    }
}
