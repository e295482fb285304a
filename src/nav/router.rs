//! Route table and navigation pipeline.
//!
//! Every attempt runs the same fixed sequence:
//!
//! ```text
//! lookup ──→ guard ──→ resolver ──→ construct view ──→ commit location
//!              │           │
//!              ▼           ▼
//!        cancel/redirect  redirect to error route
//! ```
//!
//! The guard is synchronous. The resolver is the only suspension point; the
//! destination's view is not constructed until it settles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::Instrument;
use uuid::Uuid;

use super::guard::{DenyPolicy, GuardDecision};
use super::resolver::ResolutionOutcome;
use super::route::{Route, RouteContext, RouteId};
use super::view::View;

/// Anything that can ask for a navigation to happen.
///
/// Requests are fire-and-forget; the router decides the outcome later.
pub trait Navigate: Send + Sync {
    fn request(&self, target: RouteId);
}

/// Errors raised while building the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("Route '{0}' is already registered")]
    DuplicateRoute(RouteId),

    #[error("Redirect target '{0}' is not registered")]
    UnknownRedirectTarget(RouteId),
}

/// Why an attempt ended somewhere other than its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectReason {
    GuardDenied,
    ResolverFailed(String),
}

impl RedirectReason {
    fn message(&self) -> Option<String> {
        match self {
            RedirectReason::GuardDenied => None,
            RedirectReason::ResolverFailed(message) => Some(message.clone()),
        }
    }
}

/// How a single navigation attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Destination constructed and now current.
    Admitted { route: RouteId },
    /// Guard denied; location unchanged.
    Cancelled { route: RouteId },
    /// Landed on `to` instead of `from`; `from` was never constructed.
    Redirected {
        from: RouteId,
        to: RouteId,
        reason: RedirectReason,
    },
    /// A newer attempt started while this one's resolver was pending.
    Superseded { route: RouteId },
    /// No such route; location unchanged.
    NotFound { route: RouteId },
}

/// Record of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationAttempt {
    pub id: Uuid,
    pub target: RouteId,
    pub outcome: NavigationOutcome,
}

impl NavigationAttempt {
    pub fn is_admitted(&self) -> bool {
        matches!(self.outcome, NavigationOutcome::Admitted { .. })
    }
}

/// Router-wide policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions {
    /// Where failed resolutions are sent.
    pub error_route: RouteId,
    /// What happens to guard denials.
    pub deny_policy: DenyPolicy,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            error_route: RouteId::from("error"),
            deny_policy: DenyPolicy::Cancel,
        }
    }
}

struct Location {
    route: RouteId,
    view: Box<dyn View>,
}

/// Queue-backed [`Navigate`] implementation handed out by a [`Router`].
#[derive(Clone)]
pub struct NavigationHandle {
    tx: mpsc::UnboundedSender<RouteId>,
}

impl Navigate for NavigationHandle {
    fn request(&self, target: RouteId) {
        if let Err(err) = self.tx.send(target) {
            tracing::debug!(route = %err.0, "Router dropped, navigation request discarded");
        }
    }
}

/// Owns the route table and the current location.
pub struct Router {
    routes: HashMap<RouteId, Arc<Route>>,
    location: Mutex<Option<Location>>,
    generation: AtomicU64,
    options: RouterOptions,
    requests_tx: mpsc::UnboundedSender<RouteId>,
    requests_rx: Mutex<mpsc::UnboundedReceiver<RouteId>>,
}

impl Router {
    pub fn new(options: RouterOptions) -> Self {
        let (requests_tx, requests_rx) = mpsc::unbounded_channel();
        Self {
            routes: HashMap::new(),
            location: Mutex::new(None),
            generation: AtomicU64::new(0),
            options,
            requests_tx,
            requests_rx: Mutex::new(requests_rx),
        }
    }

    /// Add a route to the table.
    pub fn register(&mut self, route: Route) -> Result<(), RouterError> {
        if self.routes.contains_key(&route.id) {
            return Err(RouterError::DuplicateRoute(route.id.clone()));
        }
        tracing::debug!(route = %route.id, guarded = route.is_guarded(), resolved = route.has_resolver(), "Route registered");
        self.routes.insert(route.id.clone(), Arc::new(route));
        Ok(())
    }

    /// Check that every redirect target the router may use is registered.
    pub fn validate(&self) -> Result<(), RouterError> {
        if !self.routes.contains_key(&self.options.error_route) {
            return Err(RouterError::UnknownRedirectTarget(
                self.options.error_route.clone(),
            ));
        }
        if let DenyPolicy::RedirectTo(target) = &self.options.deny_policy {
            if !self.routes.contains_key(target) {
                return Err(RouterError::UnknownRedirectTarget(target.clone()));
            }
        }
        Ok(())
    }

    /// Handle for queueing navigation requests from outside the router.
    pub fn handle(&self) -> NavigationHandle {
        NavigationHandle {
            tx: self.requests_tx.clone(),
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Registered route ids, sorted.
    pub fn route_ids(&self) -> Vec<RouteId> {
        let mut ids: Vec<RouteId> = self.routes.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Route the user is currently on, if any navigation has completed.
    pub fn current_route(&self) -> Option<RouteId> {
        self.location.lock().as_ref().map(|l| l.route.clone())
    }

    /// Title and body of the current view.
    pub fn render_current(&self) -> Option<(String, String)> {
        self.location
            .lock()
            .as_ref()
            .map(|l| (l.view.title(), l.view.body()))
    }

    /// Run every queued navigation request, in request order.
    pub async fn drain_requests(&self) -> Vec<NavigationAttempt> {
        let mut attempts = Vec::new();
        loop {
            let next = self.requests_rx.lock().try_recv();
            match next {
                Ok(target) => attempts.push(self.navigate(target).await),
                Err(_) => break,
            }
        }
        attempts
    }

    /// Attempt to enter `target`.
    pub async fn navigate(&self, target: impl Into<RouteId>) -> NavigationAttempt {
        let target = target.into();
        let id = Uuid::new_v4();
        let span = tracing::info_span!("navigate", attempt = %id, route = %target);

        let outcome = self
            .run_pipeline(&target)
            .instrument(span)
            .await;

        match &outcome {
            NavigationOutcome::Admitted { route } => {
                tracing::info!(attempt = %id, route = %route, "Navigation admitted");
            }
            NavigationOutcome::Redirected { from, to, reason } => {
                tracing::info!(attempt = %id, from = %from, to = %to, ?reason, "Navigation redirected");
            }
            other => {
                tracing::info!(attempt = %id, outcome = ?other, "Navigation did not complete");
            }
        }

        NavigationAttempt {
            id,
            target,
            outcome,
        }
    }

    /// Claim the right to commit. Only attempts that will change the
    /// location take a generation, so lookups that miss and cancelled
    /// guards never supersede a pending resolution.
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn run_pipeline(&self, target: &RouteId) -> NavigationOutcome {
        let Some(route) = self.routes.get(target).cloned() else {
            tracing::warn!("Unknown route");
            return NavigationOutcome::NotFound {
                route: target.clone(),
            };
        };

        if let Some(guard) = &route.guard {
            if guard.check(target) == GuardDecision::Deny {
                return match &self.options.deny_policy {
                    DenyPolicy::Cancel => NavigationOutcome::Cancelled {
                        route: target.clone(),
                    },
                    DenyPolicy::RedirectTo(to) => {
                        self.next_generation();
                        self.redirect(target, to, RedirectReason::GuardDenied)
                    }
                };
            }
        }

        let generation = self.next_generation();
        let mut context = RouteContext::for_route(target.clone());

        if let Some(resolver) = &route.resolver {
            let resolution = resolver.resolve(target).await;

            if self.generation.load(Ordering::SeqCst) != generation {
                return NavigationOutcome::Superseded {
                    route: target.clone(),
                };
            }

            match resolution {
                ResolutionOutcome::Success(payload) => context.payload = Some(payload),
                ResolutionOutcome::Failure(message) => {
                    let error_route = self.options.error_route.clone();
                    return self.redirect(
                        target,
                        &error_route,
                        RedirectReason::ResolverFailed(message),
                    );
                }
                ResolutionOutcome::Pending => {
                    let error_route = self.options.error_route.clone();
                    return self.redirect(
                        target,
                        &error_route,
                        RedirectReason::ResolverFailed(
                            "Resolver returned without settling".to_string(),
                        ),
                    );
                }
            }
        }

        let view = route.construct(&context);
        self.commit(target.clone(), view);
        NavigationOutcome::Admitted {
            route: target.clone(),
        }
    }

    /// Construct `to` directly, bypassing its own guard and resolver, and
    /// make it current.
    fn redirect(&self, from: &RouteId, to: &RouteId, reason: RedirectReason) -> NavigationOutcome {
        let Some(route) = self.routes.get(to).cloned() else {
            tracing::error!(from = %from, to = %to, "Redirect target not registered, cancelling");
            return NavigationOutcome::Cancelled {
                route: from.clone(),
            };
        };

        let context = RouteContext {
            route: to.clone(),
            payload: None,
            error: reason.message(),
            redirected_from: Some(from.clone()),
        };
        let view = route.construct(&context);
        self.commit(to.clone(), view);

        NavigationOutcome::Redirected {
            from: from.clone(),
            to: to.clone(),
            reason,
        }
    }

    fn commit(&self, route: RouteId, view: Box<dyn View>) {
        *self.location.lock() = Some(Location { route, view });
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouterOptions::default())
    }
}
