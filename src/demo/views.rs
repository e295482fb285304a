//! Route table of the demo application.

use std::sync::Arc;

use parking_lot::Mutex;

use super::form::CheckboxForm;
use crate::auth::{AuthReader, DEMO_PASSWORD, DEMO_USERNAME};
use crate::config::RoutesConfig;
use crate::data::{payload_text, DataSource};
use crate::nav::{
    AuthGuard, DataResolver, Route, RouteContext, RouteId, Router, RouterError, TextView, View,
};
use crate::ui::loading::{LoadingPhase, Projection};

/// Shared pieces the views need at construction time.
#[derive(Clone)]
pub struct RouteDeps {
    pub auth: AuthReader,
    pub data: Arc<dyn DataSource>,
    pub projection: Projection<String>,
    pub form: Arc<Mutex<CheckboxForm>>,
}

/// Register every demo route.
pub fn register_routes(
    router: &mut Router,
    routes: &RoutesConfig,
    deps: RouteDeps,
) -> Result<(), RouterError> {
    let guarded = RouteId::from(routes.guarded.as_str());
    let landing_auth = deps.auth.clone();
    let landing_guarded = guarded.clone();
    router.register(Route::new(routes.landing.as_str(), move |_ctx: &RouteContext| {
        Box::new(LandingView {
            auth: landing_auth.clone(),
            guarded: landing_guarded.clone(),
        }) as Box<dyn View>
    }))?;

    router.register(
        Route::new(guarded, |_ctx: &RouteContext| {
            TextView::boxed(
                "Welcome to the guarded route!",
                "This page is only accessible if you are logged in.",
            )
        })
        .guarded(Arc::new(AuthGuard::new(deps.auth.clone()))),
    )?;

    router.register(
        Route::new(routes.resolved.as_str(), |ctx: &RouteContext| {
            let data = ctx
                .payload
                .as_ref()
                .map(payload_text)
                .unwrap_or_default();
            TextView::boxed("Resolve or Die", format!("Resolved data: {}", data))
        })
        .resolved(Arc::new(DataResolver::new(Arc::clone(&deps.data)))),
    )?;

    router.register(Route::new(routes.error.as_str(), |ctx: &RouteContext| {
        let message = ctx
            .error
            .clone()
            .unwrap_or_else(|| "An unknown error occurred.".to_string());
        let body = match &ctx.redirected_from {
            Some(from) => format!("{}\n(while opening '{}')", message, from),
            None => message,
        };
        TextView::boxed("Error", body)
    }))?;

    let projection = deps.projection.clone();
    router.register(Route::new(routes.loading.as_str(), move |_ctx: &RouteContext| {
        Box::new(LoadingExampleView {
            projection: projection.clone(),
        }) as Box<dyn View>
    }))?;

    let form = Arc::clone(&deps.form);
    router.register(Route::new(routes.checkbox.as_str(), move |_ctx: &RouteContext| {
        Box::new(CheckboxView {
            form: Arc::clone(&form),
        }) as Box<dyn View>
    }))?;

    Ok(())
}

struct LandingView {
    auth: AuthReader,
    guarded: RouteId,
}

impl View for LandingView {
    fn title(&self) -> String {
        "Guardians of the Route Demo".to_string()
    }

    fn body(&self) -> String {
        let login = if self.auth.is_authenticated() {
            "You are logged in. Type 'logout' to log out.".to_string()
        } else {
            format!(
                "You are logged out.\nUsername: {} / Password: {}\nType 'login <username> <password>'.",
                DEMO_USERNAME, DEMO_PASSWORD
            )
        };
        format!(
            "Type 'go {}' to try the guarded route. Nothing will happen if you aren't logged in.\n\n{}",
            self.guarded, login
        )
    }
}

struct LoadingExampleView {
    projection: Projection<String>,
}

impl View for LoadingExampleView {
    fn title(&self) -> String {
        "Loading Example".to_string()
    }

    fn body(&self) -> String {
        let view = self.projection.snapshot();
        let mut lines = vec![format!(
            "Data from service: {}",
            view.data.clone().unwrap_or_default()
        )];
        match view.phase() {
            LoadingPhase::Loading => lines.push("Loading data now...".to_string()),
            LoadingPhase::Error(text) => lines.push(format!(
                "Error: {}. You can 'retry', or 'home' to return home.",
                text
            )),
            LoadingPhase::Idle | LoadingPhase::Loaded(_) => {}
        }
        lines.join("\n")
    }
}

struct CheckboxView {
    form: Arc<Mutex<CheckboxForm>>,
}

impl View for CheckboxView {
    fn title(&self) -> String {
        "Custom Checkbox".to_string()
    }

    fn body(&self) -> String {
        self.form.lock().render()
    }
}
