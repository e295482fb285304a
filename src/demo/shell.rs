//! Line-oriented command shell driving a [`DemoApp`].

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::app::{describe_attempt, DemoApp};
use crate::nav::RouteId;

const HELP: &str = "\
Commands:
  go <route>                 navigate to a route
  home                       navigate to the landing page
  login [username] [password]
  logout
  retry                      re-run the loading example's fetch
  wait                       wait for the running fetch to settle
  toggle <1|2>               click a checkbox on the checkbox page
  show                       render the current page
  status                     show auth and location
  routes                     list routes
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(RouteId),
    Home,
    Login { username: String, password: String },
    Logout,
    Retry,
    Wait,
    Toggle(usize),
    Show,
    Status,
    Routes,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' for a list.")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a checkbox number")]
    InvalidIndex(String),
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "go" | "open" => {
            let route = words.next().ok_or(ParseError::MissingArgument {
                command: "go",
                argument: "a route",
            })?;
            Command::Go(RouteId::from(route))
        }
        "home" => Command::Home,
        "login" => Command::Login {
            username: words.next().unwrap_or_default().to_string(),
            password: words.next().unwrap_or_default().to_string(),
        },
        "logout" => Command::Logout,
        "retry" | "fetch" => Command::Retry,
        "wait" => Command::Wait,
        "toggle" => {
            let raw = words.next().ok_or(ParseError::MissingArgument {
                command: "toggle",
                argument: "a checkbox number",
            })?;
            let index = raw
                .parse()
                .map_err(|_| ParseError::InvalidIndex(raw.to_string()))?;
            Command::Toggle(index)
        }
        "show" => Command::Show,
        "status" => Command::Status,
        "routes" => Command::Routes,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Run one command and return the lines to print.
pub async fn execute(app: &mut DemoApp, command: Command) -> Vec<String> {
    let mut out = Vec::new();

    match command {
        Command::Go(route) => {
            let attempt = app.go(route).await;
            // Cancelled navigations leave the screen untouched.
            if let Some(line) = describe_attempt(&attempt) {
                out.push(line);
                out.extend(render(app));
            }
        }
        Command::Home => {
            let attempt = app.home().await;
            out.extend(describe_attempt(&attempt));
            out.extend(render(app));
        }
        Command::Login { username, password } => {
            let attempts = app.login(&username, &password).await;
            for attempt in &attempts {
                out.extend(describe_attempt(attempt));
            }
            if !attempts.is_empty() {
                out.extend(render(app));
            }
        }
        Command::Logout => app.logout(),
        Command::Retry => {
            let loading = RouteId::from(app.config().routes.loading.as_str());
            if app.router().current_route() != Some(loading.clone()) {
                out.push(format!("Nothing to retry here; 'go {}' first.", loading));
            } else if app.start_fetch() {
                out.extend(render(app));
            } else {
                out.push("Still loading.".to_string());
            }
        }
        Command::Wait => match app.wait_for_fetch().await {
            Some(_) => out.extend(render(app)),
            None => out.push("No fetch in flight.".to_string()),
        },
        Command::Toggle(index) => match app.toggle_checkbox(index) {
            Ok(true) => out.extend(render(app)),
            Ok(false) => out.push("That checkbox is disabled.".to_string()),
            Err(err) => out.push(err.to_string()),
        },
        Command::Show => out.extend(render(app)),
        Command::Status => {
            let projection = app.projection().snapshot();
            out.push(format!(
                "authenticated: {}",
                app.login_flow().is_authenticated()
            ));
            out.push(format!(
                "location: {}",
                app.router()
                    .current_route()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "(none)".to_string())
            ));
            out.push(format!(
                "isLoading: {}, errorText: {:?}, data: {:?}",
                projection.is_loading, projection.error_text, projection.data
            ));
        }
        Command::Routes => {
            for id in app.router().route_ids() {
                out.push(format!("  {}", id));
            }
        }
        Command::Help => out.push(HELP.to_string()),
        Command::Quit => {}
    }

    out.extend(app.take_notices());
    out
}

fn render(app: &DemoApp) -> Vec<String> {
    match app.router().render_current() {
        Some((title, body)) => vec![
            String::new(),
            format!("== {} ==", title),
            body,
            String::new(),
        ],
        None => Vec::new(),
    }
}

/// Read commands from stdin until EOF or `quit`, writing output to `out`.
pub async fn run<W>(app: &mut DemoApp, out: &mut W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut greeting = vec!["Type 'help' for commands.".to_string()];
    greeting.extend(execute(app, Command::Home).await);
    write_lines(out, &greeting).await?;

    loop {
        out.write_all(b"> ").await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(app, command).await,
            Err(err) => vec![err.to_string()],
        };
        write_lines(out, &output).await?;
    }

    Ok(())
}

async fn write_lines<W>(out: &mut W, lines: &[String]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for line in lines {
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    out.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn parses_go() {
        assert_eq!(
            parse_command("go guarded-route"),
            Ok(Some(Command::Go(RouteId::from("guarded-route"))))
        );
        assert_eq!(
            parse_command("go"),
            Err(ParseError::MissingArgument {
                command: "go",
                argument: "a route"
            })
        );
    }

    #[test]
    fn login_arguments_default_to_empty() {
        assert_eq!(
            parse_command("login demo"),
            Ok(Some(Command::Login {
                username: "demo".to_string(),
                password: String::new(),
            }))
        );
    }

    #[test]
    fn parses_toggle_index() {
        assert_eq!(parse_command("toggle 2"), Ok(Some(Command::Toggle(2))));
        assert_eq!(
            parse_command("toggle two"),
            Err(ParseError::InvalidIndex("two".to_string()))
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_command("LOGOUT"), Ok(Some(Command::Logout)));
        assert_eq!(parse_command("Quit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn unknown_verb_is_an_error() {
        assert_eq!(
            parse_command("dance"),
            Err(ParseError::Unknown("dance".to_string()))
        );
    }
}
