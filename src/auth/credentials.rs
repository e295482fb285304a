//! Demo credential check.
//!
//! A single fixed username/password pair is accepted. This is a placeholder
//! for a tutorial login form: comparison is a plain string match with no
//! hashing or constant-time guarantees.

/// The only accepted username.
pub const DEMO_USERNAME: &str = "demo";

/// The only accepted password.
pub const DEMO_PASSWORD: &str = "password";

/// Wrapper for the password that keeps it out of `Debug` output and logs.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value for comparison.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretString(••••••••)")
    }
}

/// A single login attempt. Created per attempt and never stored.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether this pair matches the demo credentials.
    pub fn is_valid(&self) -> bool {
        check_credentials(&self.username, self.password.expose())
    }
}

/// Exact-match check against the fixed demo pair.
///
/// Empty strings are valid inputs; they simply fail the comparison.
pub fn check_credentials(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_demo_pair() {
        assert!(check_credentials("demo", "password"));
        assert!(Credentials::new("demo", "password").is_valid());
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!check_credentials("demo", "Password"));
        assert!(!check_credentials("Demo", "password"));
        assert!(!check_credentials("", ""));
        assert!(!check_credentials("demo ", "password"));
        assert!(!check_credentials("password", "demo"));
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("demo", "password");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("demo"));
        assert!(debug.contains("SecretString(••••••••)"));
        assert!(!debug.contains("\"password\""));
    }
}
