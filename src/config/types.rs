use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub guard: GuardConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Route ids used by the demo application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Start page with the login form (default: "route-guard").
    #[serde(default = "default_landing_route")]
    pub landing: String,
    /// Route protected by the auth guard (default: "guarded-route").
    #[serde(default = "default_guarded_route")]
    pub guarded: String,
    /// Route whose data is fetched before it is shown (default: "resolve-or-die").
    #[serde(default = "default_resolved_route")]
    pub resolved: String,
    /// Where failed resolutions land (default: "error").
    #[serde(default = "default_error_route")]
    pub error: String,
    /// Page that fetches inside the view instead (default: "loading-example").
    #[serde(default = "default_loading_route")]
    pub loading: String,
    /// Custom checkbox demo (default: "checkbox").
    #[serde(default = "default_checkbox_route")]
    pub checkbox: String,
}

/// What happens when the auth guard denies an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenyAction {
    /// Stay on the current page, no feedback.
    #[default]
    Cancel,
    /// Go to `guard.redirect_to` instead.
    Redirect,
}

/// Guard behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub on_deny: DenyAction,
    /// Redirect target for `on_deny = "redirect"`. Defaults to the landing route.
    #[serde(default)]
    pub redirect_to: Option<String>,
}

/// Demo data service behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Simulated latency in milliseconds (default: 3500).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Whether the fetch fails (default: true).
    #[serde(default = "default_fail")]
    pub fail: bool,
    /// Failure message (default: "This is a fake error").
    #[serde(default = "default_error_message")]
    pub error_message: String,
    /// Payload returned when the fetch succeeds.
    #[serde(default = "default_payload")]
    pub payload: String,
}

fn default_landing_route() -> String {
    "route-guard".to_string()
}

fn default_guarded_route() -> String {
    "guarded-route".to_string()
}

fn default_resolved_route() -> String {
    "resolve-or-die".to_string()
}

fn default_error_route() -> String {
    "error".to_string()
}

fn default_loading_route() -> String {
    "loading-example".to_string()
}

fn default_checkbox_route() -> String {
    "checkbox".to_string()
}

fn default_delay_ms() -> u64 {
    3500
}

fn default_fail() -> bool {
    true
}

fn default_error_message() -> String {
    "This is a fake error".to_string()
}

fn default_payload() -> String {
    "Hello from the data service".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            landing: default_landing_route(),
            guarded: default_guarded_route(),
            resolved: default_resolved_route(),
            error: default_error_route(),
            loading: default_loading_route(),
            checkbox: default_checkbox_route(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            fail: default_fail(),
            error_message: default_error_message(),
            payload: default_payload(),
        }
    }
}

impl GuardConfig {
    /// Redirect target, falling back to the landing route.
    pub fn redirect_target<'a>(&'a self, routes: &'a RoutesConfig) -> &'a str {
        self.redirect_to.as_deref().unwrap_or(&routes.landing)
    }
}

impl RoutesConfig {
    pub fn all(&self) -> [&str; 6] {
        [
            &self.landing,
            &self.guarded,
            &self.resolved,
            &self.error,
            &self.loading,
            &self.checkbox,
        ]
    }
}
