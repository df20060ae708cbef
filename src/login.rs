//! Login flow: local validation, the authenticator call and the session side
//! effects of a successful login. [`LoginScreen`] holds the form state the UI
//! renders and admits one submission at a time; [`submit`] runs a whole
//! attempt without any UI.
//!
//! Passwords only leave [`LoginForm`] as a [`SecretString`] and are never
//! logged.

use crate::authenticator::{AuthResponse, Authenticator};
use crate::errors::{Field, LoginError, ValidationError, ValidationErrors};
use crate::routing::{post_login_destination, NavigationIntent};
use crate::session::{Session, SessionStore};
use crate::storage::Storage;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use tracing::{debug, error, info};

/// Raw form input as typed by the user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    /// Form pre-filled from a remembered username, with "remember me" checked.
    #[must_use]
    pub fn prefilled(remembered: Option<String>) -> Self {
        match remembered {
            Some(username) => Self {
                username,
                password: String::new(),
                remember: true,
            },
            None => Self::default(),
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember)
            .finish()
    }
}

/// Validated credentials handed to an [`Authenticator`].
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self::new(self.username.clone(), self.password.expose_secret())
    }
}

/// Checks that both fields are non-blank. Values are passed on untrimmed.
///
/// # Errors
/// Returns every failing field when validation does not pass.
pub fn validate(form: &LoginForm) -> Result<Credentials, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.username.trim().is_empty() {
        errors.push(ValidationError::EmptyField(Field::Username));
    }
    if form.password.trim().is_empty() {
        errors.push(ValidationError::EmptyField(Field::Password));
    }

    if errors.is_empty() {
        Ok(Credentials::new(form.username.clone(), form.password.clone()))
    } else {
        Err(errors)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoginSuccess {
    pub session: Session,
    /// Path to navigate to, replacing the login entry in history.
    pub destination: String,
}

#[derive(Debug)]
pub enum LoginOutcome {
    Invalid(ValidationErrors),
    Failed(LoginError),
    Succeeded(LoginSuccess),
}

/// Authenticates validated credentials and, on success, persists the session
/// and the remembered username.
///
/// # Errors
/// Returns [`LoginError::Authentication`] for a rejection, and the generic
/// transport or storage variants otherwise; causes are logged, not surfaced.
pub async fn complete_login<A, S>(
    authenticator: &A,
    store: &SessionStore<S>,
    credentials: &Credentials,
    remember: bool,
    intent: Option<&NavigationIntent>,
) -> Result<LoginSuccess, LoginError>
where
    A: Authenticator,
    S: Storage,
{
    let response = authenticator.authenticate(credentials).await.map_err(|err| {
        error!("Login request failed: {err}");
        LoginError::Transport(err)
    })?;

    let grant = match response {
        AuthResponse::Granted(grant) => grant,
        AuthResponse::Rejected { message } => {
            info!("Login rejected");
            return Err(LoginError::rejected(message));
        }
    };

    let remembered = remember.then_some(credentials.username.as_str());
    let session = store.persist_login(&grant, remembered).map_err(|err| {
        error!("Failed to persist session: {err}");
        LoginError::Storage(err)
    })?;

    let destination = post_login_destination(intent);
    info!(destination = %destination, "Login succeeded");

    Ok(LoginSuccess {
        session,
        destination,
    })
}

/// Runs a full login attempt: validation first, and no authenticator call
/// unless it passes.
pub async fn submit<A, S>(
    form: &LoginForm,
    authenticator: &A,
    store: &SessionStore<S>,
    intent: Option<&NavigationIntent>,
) -> LoginOutcome
where
    A: Authenticator,
    S: Storage,
{
    let credentials = match validate(form) {
        Ok(credentials) => credentials,
        Err(errors) => return LoginOutcome::Invalid(errors),
    };

    match complete_login(authenticator, store, &credentials, form.remember, intent).await {
        Ok(success) => LoginOutcome::Succeeded(success),
        Err(err) => LoginOutcome::Failed(err),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Editing,
    /// An authenticator call is pending; inputs and submit are disabled.
    Submitting,
}

/// Login screen state: form values, field errors, the top-level message and
/// the loading phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginScreen {
    pub form: LoginForm,
    errors: ValidationErrors,
    message: Option<String>,
    phase: LoginPhase,
}

impl LoginScreen {
    /// State on mount, pre-filled from the remembered username if any.
    #[must_use]
    pub fn mount<S: Storage>(store: &SessionStore<S>) -> Self {
        Self {
            form: LoginForm::prefilled(store.remembered_username()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Top-level failure message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Starts a submission. Returns the credentials to authenticate, or `None`
    /// when validation fails or another submission is still pending.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_loading() {
            debug!("Ignoring submit while a login is pending");
            return None;
        }

        self.message = None;
        match validate(&self.form) {
            Ok(credentials) => {
                self.errors = ValidationErrors::default();
                self.phase = LoginPhase::Submitting;
                Some(credentials)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Ends the pending submission. Every outcome leaves the form editable.
    pub fn finish(&mut self, result: Result<&LoginSuccess, &LoginError>) {
        self.phase = LoginPhase::Editing;
        match result {
            Ok(_) => {
                self.form.password.clear();
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}
