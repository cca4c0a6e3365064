//! Account commands: `register`, `login`, `logout` and `whoami`.

use crate::cli::args::CredentialArgs;
use crate::error::{Result, ShelfError};
use crate::session::SessionState;
use crate::store::KeyValueStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ShelfContext};

/// Use the given password, or ask for one when a user is there to answer.
fn resolve_password(given: Option<&str>, ui: &mut dyn UserInterface) -> Result<String> {
    match given {
        Some(password) => Ok(password.to_string()),
        None if ui.is_interactive() => ui.prompt_password("Password"),
        None => Err(ShelfError::MissingField { field: "password" }),
    }
}

/// The register command implementation.
pub struct RegisterCommand {
    args: CredentialArgs,
}

impl RegisterCommand {
    /// Create a new register command.
    pub fn new(args: CredentialArgs) -> Self {
        Self { args }
    }
}

impl Command for RegisterCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let password = resolve_password(self.args.password.as_deref(), ui)?;
        ctx.state.register(&self.args.email, &password)?;
        ui.success("Registered successfully");
        Ok(CommandResult::success())
    }
}

/// The login command implementation.
pub struct LoginCommand {
    args: CredentialArgs,
}

impl LoginCommand {
    /// Create a new login command.
    pub fn new(args: CredentialArgs) -> Self {
        Self { args }
    }
}

impl Command for LoginCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        // Fail fast before prompting for a password nobody will check.
        if let Some(email) = ctx.state.session().map(|s| s.email.clone()) {
            return Err(ShelfError::AlreadyAuthenticated { email });
        }

        let password = resolve_password(self.args.password.as_deref(), ui)?;
        let session = ctx.state.login(&self.args.email, &password)?;
        ui.success(&format!("Login successful, welcome {}", session.email));
        Ok(CommandResult::success())
    }
}

/// The logout command implementation.
pub struct LogoutCommand;

impl Command for LogoutCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let was_logged_in = ctx.state.session().is_some();
        ctx.state.logout()?;

        if was_logged_in {
            ui.success("Logged out");
        } else {
            ui.warning("Not logged in");
        }
        Ok(CommandResult::success())
    }
}

/// The whoami command implementation.
pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute<S: KeyValueStore>(
        &self,
        ctx: &mut ShelfContext<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match ctx.state.session_state() {
            SessionState::Anonymous => ui.message("Not logged in"),
            SessionState::Authenticated(email) => {
                ui.message(&email);

                if ui.output_mode().shows_details() {
                    let liked: Vec<&str> = ctx
                        .state
                        .likes()
                        .liked_by(&email)
                        .into_iter()
                        .filter_map(|id| ctx.catalog.find(id))
                        .map(|book| book.title.as_str())
                        .collect();
                    if liked.is_empty() {
                        ui.message("Liked: none");
                    } else {
                        ui.message(&format!("Liked: {}", liked.join(", ")));
                    }
                    ui.message(&format!("Cart: {} item(s)", ctx.state.cart().len()));
                }
            }
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::state::AppState;
    use crate::store::MemoryStore;
    use crate::ui::{MockUI, OutputMode};

    fn context() -> ShelfContext<MemoryStore> {
        ShelfContext::new(AppState::load(MemoryStore::new()), Catalog::builtin())
    }

    fn args(email: &str, password: Option<&str>) -> CredentialArgs {
        CredentialArgs {
            email: email.to_string(),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn register_reports_success() {
        let mut ctx = context();
        let mut ui = MockUI::new();

        let result = RegisterCommand::new(args("a@x.com", Some("pw")))
            .execute(&mut ctx, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("Registered successfully"));
        assert_eq!(ctx.state.account_count(), 1);
    }

    #[test]
    fn duplicate_register_fails() {
        let mut ctx = context();
        let mut ui = MockUI::new();
        let cmd = RegisterCommand::new(args("a@x.com", Some("pw")));
        cmd.execute(&mut ctx, &mut ui).unwrap();

        let err = cmd.execute(&mut ctx, &mut ui).unwrap_err();

        assert_eq!(err.to_string(), "User already exists: a@x.com");
    }

    #[test]
    fn missing_password_prompts_when_interactive() {
        let mut ctx = context();
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.queue_passwords(vec!["secret"]);

        RegisterCommand::new(args("a@x.com", None))
            .execute(&mut ctx, &mut ui)
            .unwrap();

        assert_eq!(ui.prompts_shown(), ["Password"]);
        assert!(ctx.state.login("a@x.com", "secret").is_ok());
    }

    #[test]
    fn missing_password_fails_when_not_interactive() {
        let mut ctx = context();
        let mut ui = MockUI::new();

        let err = RegisterCommand::new(args("a@x.com", None))
            .execute(&mut ctx, &mut ui)
            .unwrap_err();

        assert!(matches!(err, ShelfError::MissingField { field: "password" }));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn login_while_logged_in_does_not_prompt() {
        let mut ctx = context();
        ctx.state.register("a@x.com", "pw").unwrap();
        ctx.state.login("a@x.com", "pw").unwrap();
        let mut ui = MockUI::new();
        ui.set_interactive(true);

        let err = LoginCommand::new(args("b@x.com", None))
            .execute(&mut ctx, &mut ui)
            .unwrap_err();

        assert!(matches!(err, ShelfError::AlreadyAuthenticated { .. }));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn logout_when_anonymous_warns() {
        let mut ctx = context();
        let mut ui = MockUI::new();

        let result = LogoutCommand.execute(&mut ctx, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Not logged in"));
    }

    #[test]
    fn whoami_shows_email_and_details_in_verbose() {
        let mut ctx = context();
        ctx.state.register("a@x.com", "pw").unwrap();
        ctx.state.login("a@x.com", "pw").unwrap();
        ctx.state.toggle_like(3).unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        WhoamiCommand.execute(&mut ctx, &mut ui).unwrap();

        assert!(ui.has_message("a@x.com"));
        assert!(ui.has_message("Liked: The Hobbit"));
        assert!(ui.has_message("Cart: 0 item(s)"));
    }

    #[test]
    fn whoami_when_anonymous() {
        let mut ctx = context();
        let mut ui = MockUI::new();

        WhoamiCommand.execute(&mut ctx, &mut ui).unwrap();

        assert_eq!(ui.messages(), ["Not logged in"]);
    }
}
