//! Route guards.
//!
//! A guard is consulted exactly once per attempted entry into a protected
//! route, before any resolver runs and before the destination's view is
//! constructed. Guards are stateless between calls.

use super::route::RouteId;
use crate::auth::AuthReader;

/// Result of a single guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Admit,
    Deny,
}

impl GuardDecision {
    pub fn is_admit(self) -> bool {
        matches!(self, GuardDecision::Admit)
    }
}

/// What the router does with a denied attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DenyPolicy {
    /// Drop the attempt silently. The user stays where they are and no
    /// error is surfaced.
    #[default]
    Cancel,
    /// Send the user to another route instead.
    RedirectTo(RouteId),
}

/// Admission check for a route.
pub trait Guard: Send + Sync {
    fn check(&self, target: &RouteId) -> GuardDecision;
}

/// Admits only while the user is authenticated.
///
/// Reads the flag at evaluation time, so a login that happened after an
/// earlier denial is picked up on the next attempt.
#[derive(Clone)]
pub struct AuthGuard {
    auth: AuthReader,
}

impl AuthGuard {
    pub fn new(auth: AuthReader) -> Self {
        Self { auth }
    }
}

impl Guard for AuthGuard {
    fn check(&self, target: &RouteId) -> GuardDecision {
        let decision = if self.auth.is_authenticated() {
            GuardDecision::Admit
        } else {
            GuardDecision::Deny
        };
        tracing::debug!(route = %target, ?decision, "Auth guard evaluated");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;

    #[test]
    fn denies_while_logged_out() {
        let state = AuthState::new();
        let guard = AuthGuard::new(state.reader());
        assert_eq!(guard.check(&RouteId::from("guarded-route")), GuardDecision::Deny);
    }

    #[test]
    fn admits_while_logged_in() {
        let state = AuthState::new();
        let guard = AuthGuard::new(state.reader());
        state.set_authenticated(true);
        assert!(guard.check(&RouteId::from("guarded-route")).is_admit());
    }

    #[test]
    fn reads_current_value_on_every_call() {
        let state = AuthState::new();
        let guard = AuthGuard::new(state.reader());
        let route = RouteId::from("guarded-route");

        assert_eq!(guard.check(&route), GuardDecision::Deny);
        state.set_authenticated(true);
        assert_eq!(guard.check(&route), GuardDecision::Admit);
        state.set_authenticated(false);
        assert_eq!(guard.check(&route), GuardDecision::Deny);
    }

    #[test]
    fn default_policy_is_cancel() {
        assert_eq!(DenyPolicy::default(), DenyPolicy::Cancel);
    }
}
