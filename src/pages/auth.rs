//! Auth Page
//!
//! Login and registration forms sharing one screen behind a tab toggle.
//! A successful call on either form stores the token and the route guard
//! moves the client to the dashboard.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::client::RegisterRequest;
use crate::api::encode;
use crate::state::global::GlobalState;
use crate::state::session::Session;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

/// Local registration checks, run before any network call: the password pair
/// must match exactly and the income field must parse as a number. Returns
/// the parsed income on success.
fn validate_registration(
    password: &str,
    confirm_password: &str,
    monthly_income: &str,
) -> Result<f64, &'static str> {
    if password != confirm_password {
        return Err("Passwords do not match");
    }

    monthly_income
        .trim()
        .parse::<f64>()
        .map_err(|_| "Monthly income must be a number")
}

/// Auth page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let (tab, set_tab) = create_signal(AuthTab::Login);

    view! {
        <div class="min-h-screen bg-emerald-900 flex items-center justify-center px-4 py-12">
            <div class="w-full max-w-lg">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-white">"SecureBank"</h1>
                    <p class="text-emerald-200">"Secure Banking for Modern Life"</p>
                </div>

                <div class="bg-white rounded-xl shadow-xl p-6">
                    // Tab toggle
                    <div class="flex space-x-2 mb-6">
                        <TabButton
                            label="Sign In"
                            current=tab
                            target=AuthTab::Login
                            on_click=move |_| set_tab.set(AuthTab::Login)
                        />
                        <TabButton
                            label="Sign Up"
                            current=tab
                            target=AuthTab::Register
                            on_click=move |_| set_tab.set(AuthTab::Register)
                        />
                    </div>

                    {move || match tab.get() {
                        AuthTab::Login => view! { <LoginForm /> }.into_view(),
                        AuthTab::Register => view! { <RegisterForm /> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<AuthTab>,
    target: AuthTab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "flex-1 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-emerald-600 text-white", base)
                } else {
                    format!("{} bg-slate-100 text-slate-500 hover:text-slate-800", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Login form: email + password
#[component]
fn LoginForm() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();

        set_loading.set(true);
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    state.show_success("Login successful!");
                    session.login(&token);
                }
                Err(e) => {
                    // Entered fields stay intact for another attempt
                    state.show_error(&e.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-slate-600 mb-1">"Email"</label>
                <input
                    type="email"
                    placeholder="your@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    class="w-full bg-slate-50 rounded-lg px-4 py-3
                           border border-slate-200 focus:border-emerald-500 focus:outline-none"
                />
            </div>
            <div>
                <label class="block text-sm text-slate-600 mb-1">"Password"</label>
                <input
                    type="password"
                    placeholder="••••••••"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    class="w-full bg-slate-50 rounded-lg px-4 py-3
                           border border-slate-200 focus:border-emerald-500 focus:outline-none"
                />
            </div>
            <button
                type="submit"
                disabled=move || loading.get()
                class="w-full bg-emerald-600 hover:bg-emerald-700 disabled:bg-slate-300
                       text-white rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if loading.get() { "Signing in..." } else { "Sign In" }}
            </button>
        </form>
    }
}

/// Registration form: profile fields, optional NID image, password pair
#[component]
fn RegisterForm() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (address, set_address) = create_signal(String::new());
    let (nid_number, set_nid_number) = create_signal(String::new());
    let (monthly_income, set_monthly_income) = create_signal(String::new());
    let (gender, set_gender) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (nid_image, set_nid_image) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    // NID image selection: read the file and hold its data-URL encoding
    let on_nid_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            encode::read_file_as_data_url(&file, move |url| set_nid_image.set(Some(url)));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Local validation, no request on failure
        let income = match validate_registration(
            &password.get(),
            &confirm_password.get(),
            &monthly_income.get(),
        ) {
            Ok(income) => income,
            Err(message) => {
                state.show_error(message);
                return;
            }
        };

        let request = RegisterRequest {
            name: name.get(),
            email: email.get(),
            address: address.get(),
            nid_number: nid_number.get(),
            nid_image: nid_image.get(),
            monthly_income: income,
            gender: gender.get(),
            password: password.get(),
        };

        set_loading.set(true);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(token) => {
                    state.show_success("Registration successful!");
                    session.login(&token);
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-slate-600 mb-1">"Full Name"</label>
                    <input
                        type="text"
                        placeholder="John Doe"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required
                        class="w-full bg-slate-50 rounded-lg px-4 py-3
                               border border-slate-200 focus:border-emerald-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-slate-600 mb-1">"Email"</label>
                    <input
                        type="email"
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                        class="w-full bg-slate-50 rounded-lg px-4 py-3
                               border border-slate-200 focus:border-emerald-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-slate-600 mb-1">"Address"</label>
                <input
                    type="text"
                    placeholder="123 Main St, City, State"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                    required
                    class="w-full bg-slate-50 rounded-lg px-4 py-3
                           border border-slate-200 focus:border-emerald-500 focus:outline-none"
                />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-slate-600 mb-1">"NID Number"</label>
                    <input
                        type="text"
                        placeholder="NID-123456"
                        prop:value=move || nid_number.get()
                        on:input=move |ev| set_nid_number.set(event_target_value(&ev))
                        required
                        class="w-full bg-slate-50 rounded-lg px-4 py-3
                               border border-slate-200 focus:border-emerald-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-slate-600 mb-1">"Monthly Income ($)"</label>
                    <input
                        type="number"
                        placeholder="5000"
                        prop:value=move || monthly_income.get()
                        on:input=move |ev| set_monthly_income.set(event_target_value(&ev))
                        required
                        class="w-full bg-slate-50 rounded-lg px-4 py-3
                               border border-slate-200 focus:border-emerald-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-slate-600 mb-1">"NID Picture (Optional)"</label>
                <input
                    type="file"
                    accept="image/*"
                    on:change=on_nid_upload
                    class="w-full text-sm text-slate-500"
                />
                {move || nid_image.get().map(|src| view! {
                    <img src=src alt="NID Preview" class="mt-2 max-h-32 rounded-lg" />
                })}
            </div>

            <div>
                <label class="block text-sm text-slate-600 mb-1">"Gender"</label>
                <select
                    on:change=move |ev| set_gender.set(event_target_value(&ev))
                    prop:value=move || gender.get()
                    required
                    class="w-full bg-slate-50 rounded-lg px-4 py-3
                           border border-slate-200 focus:border-emerald-500 focus:outline-none"
                >
                    <option value="" disabled selected>"Select gender"</option>
                    <option value="male">"Male"</option>
                    <option value="female">"Female"</option>
                    <option value="other">"Other"</option>
                </select>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-slate-600 mb-1">"Password"</label>
                    <input
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                        class="w-full bg-slate-50 rounded-lg px-4 py-3
                               border border-slate-200 focus:border-emerald-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-slate-600 mb-1">"Confirm Password"</label>
                    <input
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        required
                        class="w-full bg-slate-50 rounded-lg px-4 py-3
                               border border-slate-200 focus:border-emerald-500 focus:outline-none"
                    />
                </div>
            </div>

            <button
                type="submit"
                disabled=move || loading.get()
                class="w-full bg-emerald-600 hover:bg-emerald-700 disabled:bg-slate-300
                       text-white rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if loading.get() { "Creating account..." } else { "Create Account" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_registration_rejects_password_mismatch() {
        assert_eq!(
            validate_registration("hunter2", "hunter3", "5000"),
            Err("Passwords do not match")
        );
    }

    #[test]
    fn test_validate_registration_accepts_matching_passwords_and_income() {
        assert_eq!(validate_registration("hunter2", "hunter2", "5000"), Ok(5000.0));
        assert_eq!(validate_registration("hunter2", "hunter2", "1234.56"), Ok(1234.56));
    }

    #[test]
    fn test_validate_registration_trims_income() {
        assert_eq!(validate_registration("pw", "pw", "  2500 "), Ok(2500.0));
    }

    #[test]
    fn test_validate_registration_rejects_non_numeric_income() {
        assert_eq!(
            validate_registration("pw", "pw", "a lot"),
            Err("Monthly income must be a number")
        );
        assert_eq!(
            validate_registration("pw", "pw", ""),
            Err("Monthly income must be a number")
        );
    }

    #[test]
    fn test_validate_registration_checks_passwords_before_income() {
        // Both fields bad: the password mismatch is reported first
        assert_eq!(
            validate_registration("pw", "other", "not a number"),
            Err("Passwords do not match")
        );
    }
}
