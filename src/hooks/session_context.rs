// ============================================================================
// SESSION CONTEXT - shared session + current route
// ============================================================================
// The provider owns the SessionStore and the route state; views read the
// session and navigate through this context only.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::ApiError;
use crate::router::Route;
use crate::stores::{Session, SessionStore};
use crate::utils::{current_path, now_secs, set_history_path, StorageError, WindowListener};

#[derive(Clone)]
pub struct SessionContext {
    store: Rc<SessionStore>,
    session: UseStateHandle<Session>,
    route: UseStateHandle<Route>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        *self.session == *other.session && *self.route == *other.route
    }
}

impl SessionContext {
    /// Session as of the last render
    pub fn session(&self) -> Session {
        (*self.session).clone()
    }

    /// Session as stored right now (may be newer than the render)
    pub fn current_session(&self) -> Session {
        self.store.get()
    }

    pub fn route(&self) -> Route {
        *self.route
    }

    /// New history entry
    pub fn navigate(&self, route: Route) {
        log::info!("🧭 Navigate -> {}", route.path());
        set_history_path(route.path(), false);
        self.route.set(route);
    }

    /// Replaces the current history entry (guards and forced logouts)
    pub fn redirect(&self, route: Route) {
        log::info!("↪️ Redirect -> {}", route.path());
        set_history_path(route.path(), true);
        self.route.set(route);
    }

    pub fn login(&self, token: &str, username: &str) -> Result<(), StorageError> {
        self.store.set(token, username)?;
        self.session.set(self.store.get());
        self.navigate(Route::Schedule);
        Ok(())
    }

    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("❌ [SESSION] {}", e);
        }
        self.session.set(Session::default());
        self.navigate(Route::Login);
    }

    /// Tag for an outgoing request; see `is_current`
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.store.is_current(generation)
    }

    /// Clears the session and redirects on 401/403. Returns true when it did.
    pub fn handle_error(&self, error: &ApiError) -> bool {
        match self.store.apply_failure(error) {
            Some(route) => {
                self.session.set(Session::default());
                self.redirect(route);
                true
            }
            None => false,
        }
    }

    /// Token expiry check before protected work. Returns true when logged out.
    pub fn expire_if_stale(&self) -> bool {
        if self.store.expire_if_stale(now_secs()) {
            self.session.set(Session::default());
            self.redirect(Route::Login);
            true
        } else {
            false
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_memo((), |_| SessionStore::default());
    let session = {
        let store = store.clone();
        use_state(move || store.get())
    };
    let route = use_state(|| Route::from_path(&current_path()));

    // Back/forward buttons
    {
        let route = route.clone();
        let session = session.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::new("popstate", move |_| {
                let next = Route::from_path(&current_path());
                log::info!("🔙 popstate -> {}", next.path());
                session.set(store.get());
                route.set(next);
            });
            move || drop(listener)
        });
    }

    let context = SessionContext {
        store,
        session,
        route,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider missing above this component")
}
