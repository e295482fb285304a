//! Interactive demo application.
//!
//! - `app.rs` - Wires auth, router and the loading projection together
//! - `views.rs` - The demo route table
//! - `form.rs` - Checkbox form backing the custom control page
//! - `shell.rs` - Line-oriented command loop

mod app;
mod form;
mod shell;
mod views;

pub use app::{describe_attempt, DemoApp, NoticeLog};
pub use form::{CheckboxForm, FormModel, NoSuchCheckbox};
pub use shell::{execute, parse_command, run, Command, ParseError};
pub use views::{register_routes, RouteDeps};
