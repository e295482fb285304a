//! Guarded, resolvable navigation.
//!
//! - `route.rs` - Route ids, route table entries and construction context
//! - `guard.rs` - Admission checks evaluated before anything else
//! - `resolver.rs` - Blocking pre-navigation fetches
//! - `router.rs` - The pipeline tying them together
//! - `view.rs` - What a route constructs

mod guard;
mod resolver;
mod route;
mod router;
mod view;

pub use guard::{AuthGuard, DenyPolicy, Guard, GuardDecision};
pub use resolver::{DataResolver, ResolutionOutcome, Resolver};
pub use route::{Route, RouteContext, RouteId};
pub use router::{
    Navigate, NavigationAttempt, NavigationHandle, NavigationOutcome, RedirectReason, Router,
    RouterError, RouterOptions,
};
pub use view::{TextView, View, ViewFactory};
