//! Browser implementations of the auth seams. The auth API and session provider
//! are reached through the shared HTTP helpers; navigation uses the router for
//! client-side moves and `window.location` for full loads.

use crate::{
    app_lib::{
        AppError,
        api::{
            build_url_with_base, get_optional_json_with_credentials, get_with_query, post_json,
            post_json_with_credentials, with_query,
        },
        config::AppConfig,
    },
    features::auth::{
        ports::{AuthApi, AuthServices, Navigator, SessionProvider},
        types::{ActivationCode, Credentials, RegistrationDraft, Session, SignInProvider},
    },
};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};
use std::rc::Rc;

/// Auth API client rooted at `api_base_url`.
#[derive(Clone)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError> {
        let status = post_json(&self.base_url, "/authenticate", credentials).await?;
        if status == 200 {
            Ok(())
        } else {
            Err(AppError::Http {
                status,
                message: None,
            })
        }
    }

    async fn register(&self, draft: &RegistrationDraft) -> Result<(), AppError> {
        post_json(&self.base_url, "/register", draft).await.map(|_| ())
    }

    async fn activate_account(&self, code: &ActivationCode) -> Result<(), AppError> {
        get_with_query(
            &self.base_url,
            "/activate-account",
            &[("token", code.as_str())],
        )
        .await
        .map(|_| ())
    }
}

/// Cookie-backed session provider rooted at `session_base_url`.
#[derive(Clone)]
pub struct BrowserSessionProvider {
    base_url: String,
    home_path: String,
}

impl BrowserSessionProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.session_base_url.clone(),
            home_path: config.home_path.clone(),
        }
    }
}

impl SessionProvider for BrowserSessionProvider {
    async fn current_session(&self) -> Result<Option<Session>, AppError> {
        get_optional_json_with_credentials(&self.base_url, "/session").await
    }

    async fn sign_in_with_provider(&self, provider: SignInProvider) -> Result<(), AppError> {
        let url = with_query(
            &build_url_with_base(&self.base_url, &format!("/signin/{}", provider.id())),
            &[("callbackUrl", self.home_path.as_str())],
        );
        let window =
            web_sys::window().ok_or_else(|| AppError::Config("Window not found".to_string()))?;
        window
            .location()
            .set_href(&url)
            .map_err(|_| AppError::Config("Unable to start provider sign-in.".to_string()))
    }

    async fn sign_in_with_credentials(&self, credentials: &Credentials) -> Result<(), AppError> {
        post_json_with_credentials(&self.base_url, "/callback/credentials", credentials)
            .await
            .map(|_| ())
    }
}

/// Router push plus hard reload through `window.location`.
#[derive(Clone)]
pub struct BrowserNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserNavigator {
    /// Must be created inside the router.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn push(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn reload(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("no window to reload");
            return;
        };
        if window.location().set_href(path).is_err() {
            log::error!("failed to load {path}");
        }
    }
}

pub type BrowserServices = AuthServices<HttpAuthApi, BrowserSessionProvider, BrowserNavigator>;

/// Wires the browser implementations from the loaded config.
fn browser_services() -> BrowserServices {
    let config = AppConfig::load();
    AuthServices {
        api: HttpAuthApi::new(&config),
        session: BrowserSessionProvider::new(&config),
        navigator: BrowserNavigator::from_router(),
        policy: config.navigation,
        home_path: config.home_path,
    }
}

type ServicesHandle = StoredValue<BrowserServices, LocalStorage>;

/// Provides the browser auth services to everything below the router.
#[component]
pub fn AuthServicesProvider(children: Children) -> impl IntoView {
    let services: ServicesHandle = StoredValue::new_local(browser_services());
    provide_context(services);

    view! { {children()} }
}

/// Returns the browser auth services, or a config error outside the provider.
pub fn use_services() -> Result<BrowserServices, AppError> {
    use_context::<ServicesHandle>()
        .and_then(|handle| handle.try_get_value())
        .ok_or_else(|| AppError::Config("Auth services are not available.".to_string()))
}
