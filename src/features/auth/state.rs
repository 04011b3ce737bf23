//! Auth session state and context for the frontend. The provider owns the
//! durable session store, mirrors it into a reactive signal, and exposes
//! derived auth signals for guards and routes. Only the store touches local
//! storage; components read the signal.

use crate::features::auth::storage::BrowserStorage;
use crate::features::auth::store::SessionStore;
use crate::features::auth::types::Identity;
use leptos::prelude::*;

#[derive(Clone)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    store: SessionStore<BrowserStorage>,
    pub identity: RwSignal<Option<Identity>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(store: SessionStore<BrowserStorage>) -> Self {
        let identity = RwSignal::new(store.current());
        // The context lives for the app lifetime, so the listener is never
        // unsubscribed; dropping the handle keeps it registered.
        let _ = store.subscribe(move |value| identity.set(value.cloned()));
        let is_authenticated = Signal::derive(move || identity.get().is_some());
        Self {
            store,
            identity,
            is_authenticated,
        }
    }

    /// Caches a freshly authenticated identity (sign-in or verification).
    pub fn set_identity(&self, identity: Identity) {
        self.store.set_identity(Some(identity));
    }

    /// Clears the cached identity and both storage entries.
    pub fn sign_out(&self) {
        self.store.set_identity(None);
    }
}

/// Provides auth context, hydrated from local storage on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(SessionStore::new(BrowserStorage));
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback detached context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(SessionStore::new(BrowserStorage)))
}
