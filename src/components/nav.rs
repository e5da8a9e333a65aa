//! Navigation Component
//!
//! Dashboard header bar with brand, customer name, and logout.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::session::Session;

/// Dashboard header component
#[component]
pub fn DashboardHeader(
    #[prop(into)]
    user_name: Signal<Option<String>>,
) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_logout = move |_| {
        session.logout();
        state.show_success("Logged out");
    };

    view! {
        <header class="bg-white border-b border-slate-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <span class="text-xl font-bold text-emerald-700">"SecureBank"</span>

                    <div class="flex items-center space-x-4">
                        <span class="text-sm text-slate-600">
                            {move || user_name.get().unwrap_or_default()}
                        </span>
                        <button
                            on:click=on_logout
                            class="px-4 py-2 rounded-lg text-sm border border-slate-300
                                   hover:bg-slate-100 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
