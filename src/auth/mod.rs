//! Authentication state, the demo credential check and the login flow.

mod credentials;
mod login;
mod state;

pub use credentials::{check_credentials, Credentials, SecretString, DEMO_PASSWORD, DEMO_USERNAME};
pub use login::{AlertSink, LogAlerts, LoginError, LoginFlow, INVALID_CREDENTIALS_ALERT};
pub use state::{AuthReader, AuthState, Subscription};
