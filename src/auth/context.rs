use async_trait::async_trait;
use leptos::{prelude::*, task::spawn_local};
use std::sync::Arc;

use crate::auth::types::{AuthState, Identity};

/// Source of the signed-in identity.
///
/// Only the anonymous implementation exists today; a real identity provider
/// plugs in here without the pages changing.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn state(&self) -> AuthState;
    async fn sign_in_with_google(&self);
    async fn sign_out(&self);
}

/// Nobody is ever signed in; sign in and sign out resolve immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    fn state(&self) -> AuthState {
        AuthState::Anonymous
    }

    async fn sign_in_with_google(&self) {
        log::info!("Sign in with Google clicked");
    }

    async fn sign_out(&self) {
        log::info!("Sign out clicked");
    }
}

#[derive(Clone)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
    provider: Arc<dyn IdentityProvider>,
}

impl AuthContext {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (state, set_state) = signal(provider.state());
        Self {
            state,
            set_state,
            provider,
        }
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    pub fn refresh_auth(&self) {
        self.set_state.set(self.provider.state());
    }

    pub fn sign_in_with_google(&self) {
        let this = self.clone();
        spawn_local(async move {
            this.set_state.set(AuthState::Resolving);
            this.provider.sign_in_with_google().await;
            this.refresh_auth();
        });
    }

    pub fn sign_out(&self) {
        let this = self.clone();
        spawn_local(async move {
            this.provider.sign_out().await;
            this.refresh_auth();
        });
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found")
}

#[component]
pub fn AuthProvider(
    #[prop(optional)] provider: Option<Arc<dyn IdentityProvider>>,
    children: Children,
) -> impl IntoView {
    let provider = provider.unwrap_or_else(|| Arc::new(AnonymousIdentity));
    provide_context(AuthContext::new(provider));

    view! { {children()} }
}
