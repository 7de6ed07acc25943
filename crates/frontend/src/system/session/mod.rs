//! Signed-in user context.
//!
//! The session is fetched once on startup. Capability checks deny while it
//! has not loaded yet, so permission gated views start hidden and appear
//! when the session arrives.

pub mod api;

use contracts::system::SessionInfo;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct SessionService {
    session: RwSignal<Option<SessionInfo>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.session.get().is_some()
    }

    pub fn user_name(&self) -> Option<String> {
        self.session.get().map(|s| s.user_name)
    }

    /// Whether the signed-in user holds a permission, false until loaded
    pub fn can(&self, permission: &str) -> bool {
        self.session
            .get()
            .map(|s| s.has_permission(permission))
            .unwrap_or(false)
    }

    pub fn set(&self, info: SessionInfo) {
        self.session.set(Some(info));
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let service = SessionService::new();
    provide_context(service);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_session().await {
                Ok(info) => service.set(info),
                Err(e) => log::warn!("Session fetch failed: {}", e),
            }
        });
    });

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionProvider not found in component tree")
}
