//! Wires the demo route table, login flow and loading projection together.

use std::sync::Arc;

use parking_lot::Mutex;
use scopeguard::ScopeGuard;
use tokio::task::JoinHandle;

use super::form::CheckboxForm;
use super::views::{register_routes, RouteDeps};
use crate::auth::{AlertSink, AuthState, LoginFlow, Subscription};
use crate::config::{Config, DenyAction};
use crate::data::{payload_text, DataSource, DemoDataService};
use crate::nav::{
    DenyPolicy, NavigationAttempt, NavigationOutcome, RedirectReason, RouteId, Router,
    RouterError, RouterOptions,
};
use crate::ui::loading::{LoadingIntent, Projection};

/// Collects messages for the shell to print after each command.
#[derive(Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<String>>,
}

impl NoticeLog {
    pub fn push(&self, notice: impl Into<String>) {
        self.notices.lock().push(notice.into());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl AlertSink for NoticeLog {
    fn alert(&self, message: &str) {
        self.push(format!("ALERT: {}", message));
    }
}

pub struct DemoApp {
    config: Config,
    router: Router,
    login: LoginFlow,
    notices: Arc<NoticeLog>,
    data: Arc<dyn DataSource>,
    projection: Projection<String>,
    form: Arc<Mutex<CheckboxForm>>,
    pending_fetch: Option<JoinHandle<bool>>,
    _auth_notices: Subscription,
}

impl DemoApp {
    pub fn new(config: Config) -> Result<Self, RouterError> {
        let data: Arc<dyn DataSource> = Arc::new(DemoDataService::from_config(&config.data));
        Self::with_data_source(config, data)
    }

    /// Build the app around a specific data source.
    pub fn with_data_source(config: Config, data: Arc<dyn DataSource>) -> Result<Self, RouterError> {
        let deny_policy = match config.guard.on_deny {
            DenyAction::Cancel => DenyPolicy::Cancel,
            DenyAction::Redirect => DenyPolicy::RedirectTo(RouteId::from(
                config.guard.redirect_target(&config.routes),
            )),
        };
        let mut router = Router::new(RouterOptions {
            error_route: RouteId::from(config.routes.error.as_str()),
            deny_policy,
        });

        let notices = Arc::new(NoticeLog::default());
        let login = LoginFlow::new(
            AuthState::new(),
            Arc::new(router.handle()),
            notices.clone(),
            RouteId::from(config.routes.guarded.as_str()),
        );

        let projection = Projection::new();
        let form = Arc::new(Mutex::new(CheckboxForm::new()));
        register_routes(
            &mut router,
            &config.routes,
            RouteDeps {
                auth: login.reader(),
                data: Arc::clone(&data),
                projection: projection.clone(),
                form: Arc::clone(&form),
            },
        )?;
        router.validate()?;

        let sink = Arc::clone(&notices);
        let auth_notices = login.reader().subscribe(move |authenticated| {
            sink.push(if authenticated {
                "auth: logged in"
            } else {
                "auth: logged out"
            });
        });
        // The subscription replays the initial logged-out value; not news.
        notices.take();

        Ok(Self {
            config,
            router,
            login,
            notices,
            data,
            projection,
            form,
            pending_fetch: None,
            _auth_notices: auth_notices,
        })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn login_flow(&self) -> &LoginFlow {
        &self.login
    }

    pub fn projection(&self) -> &Projection<String> {
        &self.projection
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drain pending notices (alerts, auth changes).
    pub fn take_notices(&self) -> Vec<String> {
        self.notices.take()
    }

    /// Navigate and, when landing on the loading example, kick off its
    /// in-view fetch.
    pub async fn go(&mut self, target: impl Into<RouteId>) -> NavigationAttempt {
        let attempt = self.router.navigate(target).await;
        self.after_navigation(&attempt);
        attempt
    }

    pub async fn home(&mut self) -> NavigationAttempt {
        let landing = RouteId::from(self.config.routes.landing.as_str());
        self.go(landing).await
    }

    /// Log in and run any navigation the login requested.
    pub async fn login(&mut self, username: &str, password: &str) -> Vec<NavigationAttempt> {
        if self.login.login(username, password).is_err() {
            return Vec::new();
        }
        let attempts = self.router.drain_requests().await;
        for attempt in &attempts {
            self.after_navigation(attempt);
        }
        attempts
    }

    pub fn logout(&self) {
        self.login.logout();
    }

    /// Start the loading example's fetch in the background.
    ///
    /// Returns `false` without starting anything while a fetch is still in
    /// flight.
    pub fn start_fetch(&mut self) -> bool {
        if self.projection.is_loading() {
            return false;
        }
        // Render the loading state before the task is first polled. `run`
        // dispatches `Start` again, which changes nothing. Until `run` arms
        // its own guard, this one settles a task dropped unpolled.
        self.projection.dispatch(LoadingIntent::Start);
        let settle = scopeguard::guard(self.projection.clone(), |projection| {
            projection.dispatch(LoadingIntent::Settled);
        });
        let data = Arc::clone(&self.data);
        self.pending_fetch = Some(tokio::spawn(async move {
            let projection = ScopeGuard::into_inner(settle);
            projection
                .run(|| async move { data.fetch().await.map(|p| payload_text(&p)) })
                .await
        }));
        true
    }

    /// Wait for the most recent background fetch, if any.
    ///
    /// Returns `None` when nothing was pending.
    pub async fn wait_for_fetch(&mut self) -> Option<bool> {
        let handle = self.pending_fetch.take()?;
        match handle.await {
            Ok(succeeded) => Some(succeeded),
            Err(err) => {
                tracing::error!(error = %err, "Background fetch task failed");
                Some(false)
            }
        }
    }

    pub fn toggle_checkbox(&self, index: usize) -> Result<bool, super::form::NoSuchCheckbox> {
        self.form.lock().toggle(index)
    }

    fn after_navigation(&mut self, attempt: &NavigationAttempt) {
        let loading = RouteId::from(self.config.routes.loading.as_str());
        if attempt.outcome == (NavigationOutcome::Admitted { route: loading }) {
            self.start_fetch();
        }
    }
}

/// One-line human description of an attempt.
///
/// Guard cancellations are silent, so they describe as `None`.
pub fn describe_attempt(attempt: &NavigationAttempt) -> Option<String> {
    let line = match &attempt.outcome {
        NavigationOutcome::Admitted { route } => format!("-> {}", route),
        NavigationOutcome::Cancelled { .. } => return None,
        NavigationOutcome::Redirected { from, to, reason } => match reason {
            RedirectReason::GuardDenied => format!("-> {} (access to '{}' denied)", to, from),
            RedirectReason::ResolverFailed(_) => {
                format!("-> {} (loading '{}' failed)", to, from)
            }
        },
        NavigationOutcome::Superseded { route } => {
            format!("(navigation to '{}' superseded)", route)
        }
        NavigationOutcome::NotFound { route } => format!("No such route '{}'", route),
    };
    Some(line)
}
