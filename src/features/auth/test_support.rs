//! In-memory doubles for the auth seams. All three share one call log so tests
//! can assert ordering across the API, the session provider and navigation.

use crate::{
    app_lib::{AppError, config::NavigationPolicy},
    features::auth::{
        ports::{AuthApi, AuthServices, Navigator, SessionProvider},
        types::{ActivationCode, Credentials, RegistrationDraft, Session, SignInProvider},
    },
};
use futures::future::pending;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Authenticate(Credentials),
    Register(RegistrationDraft),
    Activate(String),
    CurrentSession,
    ProviderSignIn(&'static str),
    CredentialSignIn(Credentials),
    Push(String),
    Reload(String),
}

#[derive(Clone, Debug, Default)]
pub enum Reply {
    #[default]
    Ok,
    Err(AppError),
    /// Never resolves; used to hold a request in flight.
    Hang,
}

impl Reply {
    async fn resolve(self) -> Result<(), AppError> {
        match self {
            Reply::Ok => Ok(()),
            Reply::Err(err) => Err(err),
            Reply::Hang => pending().await,
        }
    }
}

#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn record(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|call| matches(call)).count()
    }
}

#[derive(Clone, Default)]
pub struct FakeApi {
    log: CallLog,
    authenticate: Rc<RefCell<Reply>>,
    register: Rc<RefCell<Reply>>,
    activate: Rc<RefCell<Reply>>,
}

impl FakeApi {
    pub fn reply_authenticate(&self, reply: Reply) {
        *self.authenticate.borrow_mut() = reply;
    }

    pub fn reply_register(&self, reply: Reply) {
        *self.register.borrow_mut() = reply;
    }

    pub fn reply_activate(&self, reply: Reply) {
        *self.activate.borrow_mut() = reply;
    }
}

impl AuthApi for FakeApi {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.log.record(Call::Authenticate(credentials.clone()));
        let reply = self.authenticate.borrow().clone();
        reply.resolve().await
    }

    async fn register(&self, draft: &RegistrationDraft) -> Result<(), AppError> {
        self.log.record(Call::Register(draft.clone()));
        let reply = self.register.borrow().clone();
        reply.resolve().await
    }

    async fn activate_account(&self, code: &ActivationCode) -> Result<(), AppError> {
        self.log.record(Call::Activate(code.as_str().to_string()));
        let reply = self.activate.borrow().clone();
        reply.resolve().await
    }
}

#[derive(Clone)]
pub struct FakeSession {
    log: CallLog,
    current: Rc<RefCell<Result<Option<Session>, AppError>>>,
    credential_sign_in: Rc<RefCell<Reply>>,
}

impl FakeSession {
    pub fn set_current(&self, current: Result<Option<Session>, AppError>) {
        *self.current.borrow_mut() = current;
    }

    pub fn reply_credential_sign_in(&self, reply: Reply) {
        *self.credential_sign_in.borrow_mut() = reply;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.calls()
    }
}

impl Default for FakeSession {
    fn default() -> Self {
        Self {
            log: CallLog::default(),
            current: Rc::new(RefCell::new(Ok(None))),
            credential_sign_in: Rc::default(),
        }
    }
}

impl SessionProvider for FakeSession {
    async fn current_session(&self) -> Result<Option<Session>, AppError> {
        self.log.record(Call::CurrentSession);
        self.current.borrow().clone()
    }

    async fn sign_in_with_provider(&self, provider: SignInProvider) -> Result<(), AppError> {
        self.log.record(Call::ProviderSignIn(provider.id()));
        Ok(())
    }

    async fn sign_in_with_credentials(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.log.record(Call::CredentialSignIn(credentials.clone()));
        let reply = self.credential_sign_in.borrow().clone();
        reply.resolve().await
    }
}

#[derive(Clone, Default)]
pub struct FakeNavigator {
    log: CallLog,
}

impl Navigator for FakeNavigator {
    fn push(&self, path: &str) {
        self.log.record(Call::Push(path.to_string()));
    }

    fn reload(&self, path: &str) {
        self.log.record(Call::Reload(path.to_string()));
    }
}

pub type FakeServices = AuthServices<FakeApi, FakeSession, FakeNavigator>;

/// Fresh doubles sharing one call log.
pub fn fake_services(policy: NavigationPolicy) -> (FakeServices, CallLog) {
    let log = CallLog::default();
    let services = AuthServices {
        api: FakeApi {
            log: log.clone(),
            ..FakeApi::default()
        },
        session: FakeSession {
            log: log.clone(),
            ..FakeSession::default()
        },
        navigator: FakeNavigator { log: log.clone() },
        policy,
        home_path: "/".to_string(),
    };
    (services, log)
}

pub fn http_error(status: u16, message: Option<&str>) -> AppError {
    AppError::Http {
        status,
        message: message.map(str::to_string),
    }
}

pub fn is_navigation(call: &Call) -> bool {
    matches!(call, Call::Push(_) | Call::Reload(_))
}
