//! Destination views as seen by the router.
//!
//! Rendering is the presentation layer's business; the router only needs to
//! construct a view and hand it back.

use std::sync::Arc;

use super::route::RouteContext;

/// A constructed destination.
pub trait View: Send {
    /// Heading shown above the body.
    fn title(&self) -> String;

    /// Plain-text body. Called on every render, so it may reflect live state.
    fn body(&self) -> String;
}

/// Construction entry point for a route's view.
pub type ViewFactory = Arc<dyn Fn(&RouteContext) -> Box<dyn View> + Send + Sync>;

/// Static view with fixed title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    title: String,
    body: String,
}

impl TextView {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn boxed(title: impl Into<String>, body: impl Into<String>) -> Box<dyn View> {
        Box::new(Self::new(title, body))
    }
}

impl View for TextView {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn body(&self) -> String {
        self.body.clone()
    }
}
