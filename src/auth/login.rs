//! Login flow: the only writer of the authentication flag.

use std::sync::Arc;

use thiserror::Error;

use super::credentials::Credentials;
use super::state::{AuthReader, AuthState};
use crate::nav::{Navigate, RouteId};

/// Message shown to the user when the credentials don't match.
pub const INVALID_CREDENTIALS_ALERT: &str = "Invalid credentials!";

/// Errors returned by [`LoginFlow::login`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid credentials for user '{username}'")]
    InvalidCredentials { username: String },
}

/// Receiver for user-facing alert messages.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Alert sink that only logs. Useful when no presentation layer is attached.
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn alert(&self, message: &str) {
        tracing::warn!(message = %message, "Alert raised");
    }
}

/// Owns the [`AuthState`] writer and mutates it in response to login and
/// logout.
pub struct LoginFlow {
    auth: AuthState,
    navigator: Arc<dyn Navigate>,
    alerts: Arc<dyn AlertSink>,
    destination: RouteId,
}

impl LoginFlow {
    /// Create a login flow that sends successful logins to `destination`.
    pub fn new(
        auth: AuthState,
        navigator: Arc<dyn Navigate>,
        alerts: Arc<dyn AlertSink>,
        destination: RouteId,
    ) -> Self {
        Self {
            auth,
            navigator,
            alerts,
            destination,
        }
    }

    /// Attempt a login with the given pair.
    ///
    /// On success the flag is set *before* navigation is requested, so a
    /// guard evaluated for that navigation sees the new value. On failure the
    /// flag is left untouched, the alert sink fires and no navigation is
    /// requested.
    pub fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        let credentials = Credentials::new(username, password);

        if !credentials.is_valid() {
            tracing::info!(username = %credentials.username(), "Login rejected");
            self.alerts.alert(INVALID_CREDENTIALS_ALERT);
            return Err(LoginError::InvalidCredentials {
                username: credentials.username().to_string(),
            });
        }

        self.auth.set_authenticated(true);
        tracing::info!(
            username = %credentials.username(),
            destination = %self.destination,
            "Login accepted"
        );
        self.navigator.request(self.destination.clone());
        Ok(())
    }

    /// Clear the flag. Never navigates.
    pub fn logout(&self) {
        self.auth.set_authenticated(false);
        tracing::info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn reader(&self) -> AuthReader {
        self.auth.reader()
    }

    pub fn destination(&self) -> &RouteId {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<RouteId>>,
        alerts: Mutex<Vec<String>>,
    }

    impl Navigate for Recorder {
        fn request(&self, target: RouteId) {
            self.requests.lock().push(target);
        }
    }

    impl AlertSink for Recorder {
        fn alert(&self, message: &str) {
            self.alerts.lock().push(message.to_string());
        }
    }

    fn flow() -> (LoginFlow, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let flow = LoginFlow::new(
            AuthState::new(),
            recorder.clone(),
            recorder.clone(),
            RouteId::from("guarded-route"),
        );
        (flow, recorder)
    }

    #[test]
    fn valid_login_sets_flag_and_requests_navigation() {
        let (flow, recorder) = flow();
        flow.login("demo", "password").unwrap();

        assert!(flow.is_authenticated());
        assert_eq!(*recorder.requests.lock(), vec![RouteId::from("guarded-route")]);
        assert!(recorder.alerts.lock().is_empty());
    }

    #[test]
    fn invalid_login_alerts_without_mutation() {
        let (flow, recorder) = flow();
        let err = flow.login("demo", "wrong").unwrap_err();

        assert_eq!(
            err,
            LoginError::InvalidCredentials {
                username: "demo".to_string()
            }
        );
        assert!(!flow.is_authenticated());
        assert!(recorder.requests.lock().is_empty());
        assert_eq!(*recorder.alerts.lock(), vec![INVALID_CREDENTIALS_ALERT.to_string()]);
    }

    #[test]
    fn flag_is_set_before_navigation_is_requested() {
        let recorder = Arc::new(Recorder::default());
        let auth = AuthState::new();
        let reader = auth.reader();

        struct CheckingNavigator {
            reader: AuthReader,
            seen: Mutex<Option<bool>>,
        }
        impl Navigate for CheckingNavigator {
            fn request(&self, _target: RouteId) {
                *self.seen.lock() = Some(self.reader.is_authenticated());
            }
        }

        let navigator = Arc::new(CheckingNavigator {
            reader,
            seen: Mutex::new(None),
        });
        let flow = LoginFlow::new(
            auth,
            navigator.clone(),
            recorder,
            RouteId::from("guarded-route"),
        );
        flow.login("demo", "password").unwrap();
        assert_eq!(*navigator.seen.lock(), Some(true));
    }

    #[test]
    fn invalid_login_after_valid_login_keeps_flag_set() {
        let (flow, _recorder) = flow();
        flow.login("demo", "password").unwrap();
        assert!(flow.login("nobody", "nothing").is_err());
        assert!(flow.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let (flow, recorder) = flow();
        flow.logout();
        assert!(!flow.is_authenticated());
        flow.login("demo", "password").unwrap();
        flow.logout();
        flow.logout();
        assert!(!flow.is_authenticated());
        assert_eq!(recorder.requests.lock().len(), 1);
    }

    #[test]
    fn repeated_valid_login_keeps_flag_set() {
        let (flow, recorder) = flow();
        flow.login("demo", "password").unwrap();
        flow.login("demo", "password").unwrap();
        assert!(flow.is_authenticated());
        assert_eq!(recorder.requests.lock().len(), 2);
    }
}
