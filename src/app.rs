//! App Root Component
//!
//! Main application component with routing, route guards, and global
//! providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{AuthPage, Dashboard, Landing};
use crate::state::session::{provide_session, route_for, Screen, Session};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the restored session to all components
    provide_global_state();
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-900 flex flex-col">
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/auth" view=|| view! { <Guarded screen=Screen::Auth /> } />
                        <Route path="/dashboard" view=|| view! { <Guarded screen=Screen::Dashboard /> } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Route guard wrapper: renders the requested screen when the session phase
/// allows it, otherwise redirects to the screen the guard picks instead.
/// Reading the session signal here makes login/logout re-route reactively.
#[component]
fn Guarded(screen: Screen) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    move || {
        let allowed = route_for(session.phase(), screen);
        if allowed != screen {
            return view! { <Redirect path=allowed.path() /> }.into_view();
        }

        match screen {
            Screen::Landing => view! { <Landing /> }.into_view(),
            Screen::Auth => view! { <AuthPage /> }.into_view(),
            Screen::Dashboard => view! { <Dashboard /> }.into_view(),
        }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to SecureBank"
            </A>
        </div>
    }
}
