//! Route ids, route table entries and the context handed to view factories.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::guard::Guard;
use super::resolver::Resolver;
use super::view::{View, ViewFactory};
use crate::data::Payload;

/// Identifier of a navigable destination, e.g. `guarded-route`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Everything a view factory gets to see when its destination is built.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteContext {
    /// The route being constructed.
    pub route: RouteId,
    /// Payload produced by the route's resolver, if it has one.
    pub payload: Option<Payload>,
    /// Failure message carried across a redirect.
    pub error: Option<String>,
    /// The destination originally requested when this is a redirect.
    pub redirected_from: Option<RouteId>,
}

impl RouteContext {
    pub fn for_route(route: RouteId) -> Self {
        Self {
            route,
            payload: None,
            error: None,
            redirected_from: None,
        }
    }
}

/// A registered destination: optional guard, optional resolver and the
/// entry point that constructs its view.
pub struct Route {
    pub(crate) id: RouteId,
    pub(crate) guard: Option<Arc<dyn Guard>>,
    pub(crate) resolver: Option<Arc<dyn Resolver>>,
    pub(crate) factory: ViewFactory,
}

impl Route {
    pub fn new<F>(id: impl Into<RouteId>, factory: F) -> Self
    where
        F: Fn(&RouteContext) -> Box<dyn View> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            guard: None,
            resolver: None,
            factory: Arc::new(factory),
        }
    }

    /// Require `guard` to admit every entry into this route.
    pub fn guarded(mut self, guard: Arc<dyn Guard>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Hold navigation open until `resolver` settles.
    pub fn resolved(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    pub(crate) fn construct(&self, context: &RouteContext) -> Box<dyn View> {
        (self.factory)(context)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("guarded", &self.is_guarded())
            .field("resolved", &self.has_resolver())
            .finish()
    }
}
