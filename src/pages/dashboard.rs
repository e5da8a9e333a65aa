//! Dashboard Page
//!
//! Authenticated view over accounts, transactions, loans, cards, and KYC.
//! On mount, six independent fetches run concurrently; each panel renders as
//! its own slot resolves and one slot's failure never blocks the others. Any
//! authorization failure forces a global logout.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::encode;
use crate::api::types::{
    appended_documents, format_date, format_timestamp, total_balance, Account, Card, Kyc, Loan,
    Profile, Transaction, TransactionKind,
};
use crate::api::FetchError;
use crate::components::{ChatWidget, DashboardHeader, ListSkeleton, Loading};
use crate::state::global::GlobalState;
use crate::state::session::Session;

/// Force logout after a 401 on any authenticated call
fn expire_session(session: Session, state: GlobalState) {
    state.show_error("Session expired. Please login again.");
    session.logout();
}

/// Count shown while a slot is still loading
fn slot_count<T>(slot: Option<Vec<T>>) -> String {
    slot.map(|list| list.len().to_string())
        .unwrap_or_else(|| "...".to_string())
}

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Overview,
    Accounts,
    Transactions,
    Loans,
    Cards,
    Kyc,
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One slot per fetch; None means "still loading or failed"
    let (profile, set_profile) = create_signal(None::<Profile>);
    let (accounts, set_accounts) = create_signal(None::<Vec<Account>>);
    let (transactions, set_transactions) = create_signal(None::<Vec<Transaction>>);
    let (loans, set_loans) = create_signal(None::<Vec<Loan>>);
    let (cards, set_cards) = create_signal(None::<Vec<Card>>);
    let (kyc, set_kyc) = create_signal(None::<Kyc>);

    let (tab, set_tab) = create_signal(DashboardTab::Overview);

    let fetch_loans_into = move || {
        let Some(token) = session.token() else { return };
        spawn_local(async move {
            match api::fetch_loans(&token).await {
                Ok(list) => set_loans.set(Some(list)),
                Err(FetchError::Unauthorized) => expire_session(session, state),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch loans: {}", e).into());
                }
            }
        });
    };

    let fetch_kyc_into = move || {
        let Some(token) = session.token() else { return };
        spawn_local(async move {
            match api::fetch_kyc(&token).await {
                Ok(record) => set_kyc.set(Some(record)),
                Err(FetchError::Unauthorized) => expire_session(session, state),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch KYC: {}", e).into());
                }
            }
        });
    };

    // Initial load: six concurrent fetches, no ordering dependency
    create_effect(move |_| {
        let Some(token) = session.token() else { return };

        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_profile(&token).await {
                    Ok(record) => set_profile.set(Some(record)),
                    Err(FetchError::Unauthorized) => expire_session(session, state),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into());
                    }
                }
            });
        }

        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_accounts(&token).await {
                    Ok(list) => set_accounts.set(Some(list)),
                    Err(FetchError::Unauthorized) => expire_session(session, state),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch accounts: {}", e).into());
                    }
                }
            });
        }

        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_transactions(&token).await {
                    Ok(list) => set_transactions.set(Some(list)),
                    Err(FetchError::Unauthorized) => expire_session(session, state),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch transactions: {}", e).into(),
                        );
                    }
                }
            });
        }

        {
            let token = token.clone();
            spawn_local(async move {
                match api::fetch_cards(&token).await {
                    Ok(list) => set_cards.set(Some(list)),
                    Err(FetchError::Unauthorized) => expire_session(session, state),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch cards: {}", e).into());
                    }
                }
            });
        }

        fetch_loans_into();
        fetch_kyc_into();
    });

    view! {
        <div class="min-h-screen bg-slate-50">
            <DashboardHeader user_name=Signal::derive(move || {
                profile.get().map(|record| record.name)
            }) />

            <div class="container mx-auto px-4 py-8 space-y-8">
                // Total balance, recomputed from the current account list
                <div class="bg-emerald-700 text-white rounded-xl p-6">
                    <p class="text-emerald-200 text-sm">"Total Balance"</p>
                    <h2 class="text-3xl font-bold">
                        {move || match accounts.get() {
                            Some(list) => format!("${:.2}", total_balance(&list)),
                            None => "...".to_string(),
                        }}
                    </h2>
                </div>

                // Panel tabs
                <div class="flex flex-wrap gap-2">
                    <TabButton label="Overview" current=tab target=DashboardTab::Overview set_tab=set_tab />
                    <TabButton label="Accounts" current=tab target=DashboardTab::Accounts set_tab=set_tab />
                    <TabButton label="Transactions" current=tab target=DashboardTab::Transactions set_tab=set_tab />
                    <TabButton label="Loans" current=tab target=DashboardTab::Loans set_tab=set_tab />
                    <TabButton label="Cards" current=tab target=DashboardTab::Cards set_tab=set_tab />
                    <TabButton label="KYC" current=tab target=DashboardTab::Kyc set_tab=set_tab />
                </div>

                {move || match tab.get() {
                    DashboardTab::Overview => view! {
                        <OverviewPanel
                            profile=profile
                            accounts=accounts
                            transactions=transactions
                            loans=loans
                            cards=cards
                        />
                    }.into_view(),
                    DashboardTab::Accounts => view! { <AccountsPanel accounts=accounts /> }.into_view(),
                    DashboardTab::Transactions => view! {
                        <TransactionsPanel transactions=transactions />
                    }.into_view(),
                    DashboardTab::Loans => view! {
                        <LoansPanel loans=loans on_applied=fetch_loans_into />
                    }.into_view(),
                    DashboardTab::Cards => view! { <CardsPanel cards=cards /> }.into_view(),
                    DashboardTab::Kyc => view! {
                        <KycPanel kyc=kyc on_updated=fetch_kyc_into />
                    }.into_view(),
                }}
            </div>

            <ChatWidget />
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<DashboardTab>,
    target: DashboardTab,
    set_tab: WriteSignal<DashboardTab>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_tab.set(target)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-emerald-600 text-white", base)
                } else {
                    format!("{} bg-white text-slate-500 border border-slate-200 hover:text-slate-800", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Customer information and quick stats
#[component]
fn OverviewPanel(
    profile: ReadSignal<Option<Profile>>,
    accounts: ReadSignal<Option<Vec<Account>>>,
    transactions: ReadSignal<Option<Vec<Transaction>>>,
    loans: ReadSignal<Option<Vec<Loan>>>,
    cards: ReadSignal<Option<Vec<Card>>>,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <section class="bg-white rounded-xl p-6 border border-slate-200">
                <h2 class="text-lg font-semibold mb-4">"Customer Information"</h2>
                {move || match profile.get() {
                    None => view! { <ListSkeleton count=6 /> }.into_view(),
                    Some(profile) => view! {
                        <div class="space-y-2 text-sm">
                            <InfoRow label="Name" value=profile.name />
                            <InfoRow label="Email" value=profile.email />
                            <InfoRow label="Address" value=profile.address />
                            <InfoRow label="NID" value=profile.nid_number />
                            <InfoRow label="Gender" value=profile.gender />
                            <InfoRow
                                label="Monthly Income"
                                value=format!("${:.2}", profile.monthly_income)
                            />
                        </div>
                    }.into_view(),
                }}
            </section>

            <section class="bg-white rounded-xl p-6 border border-slate-200">
                <h2 class="text-lg font-semibold mb-4">"Quick Stats"</h2>
                <div class="grid grid-cols-2 gap-4">
                    <StatItem label="Active Accounts" value=Signal::derive(move || slot_count(accounts.get())) />
                    <StatItem label="Active Cards" value=Signal::derive(move || slot_count(cards.get())) />
                    <StatItem label="Recent Transactions" value=Signal::derive(move || slot_count(transactions.get())) />
                    <StatItem label="Active Loans" value=Signal::derive(move || slot_count(loans.get())) />
                </div>
            </section>
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between py-1 border-b border-slate-100 last:border-0">
            <span class="text-slate-500">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}

#[component]
fn StatItem(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-slate-50 rounded-lg p-4">
            <p class="text-sm text-slate-500">{label}</p>
            <p class="text-2xl font-bold">{move || value.get()}</p>
        </div>
    }
}

/// One card per account
#[component]
fn AccountsPanel(accounts: ReadSignal<Option<Vec<Account>>>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            {move || match accounts.get() {
                None => view! { <Loading /> }.into_view(),
                Some(list) => list.into_iter().map(|account| view! {
                    <div class="bg-white rounded-xl p-6 border border-slate-200">
                        <div class="flex items-center justify-between mb-2">
                            <span class="text-sm font-medium text-emerald-700 capitalize">
                                {account.account_type}
                            </span>
                        </div>
                        <p class="text-sm text-slate-500">{account.account_number}</p>
                        <h3 class="text-2xl font-bold my-2">{format!("${:.2}", account.balance)}</h3>
                        <p class="text-xs text-slate-400">
                            {format!("Opened: {}", format_date(&account.created_at))}
                        </p>
                    </div>
                }).collect_view(),
            }}
        </div>
    }
}

/// Transaction history list
#[component]
fn TransactionsPanel(transactions: ReadSignal<Option<Vec<Transaction>>>) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl p-6 border border-slate-200">
            <h2 class="text-lg font-semibold mb-4">"Recent Transactions"</h2>
            {move || match transactions.get() {
                None => view! { <ListSkeleton count=5 /> }.into_view(),
                Some(list) if list.is_empty() => view! {
                    <p class="text-slate-500 text-sm">"No transactions yet"</p>
                }.into_view(),
                Some(list) => list.into_iter().map(|tx| {
                    let amount_class = match tx.kind {
                        TransactionKind::Credit => "text-green-600",
                        TransactionKind::Debit => "text-red-600",
                    };
                    view! {
                        <div class="flex items-center justify-between py-3 border-b border-slate-100 last:border-0">
                            <div>
                                <p class="font-medium">{tx.description.clone()}</p>
                                <p class="text-sm text-slate-400">{format_timestamp(&tx.timestamp)}</p>
                            </div>
                            <span class=format!("font-semibold {}", amount_class)>
                                {format!("{}${:.2}", tx.kind.sign(), tx.amount)}
                            </span>
                        </div>
                    }
                }).collect_view(),
            }}
        </section>
    }
}

/// Loan application form and loan list
#[component]
fn LoansPanel(
    loans: ReadSignal<Option<Vec<Loan>>>,
    on_applied: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (amount, set_amount) = create_signal(String::new());
    let (duration, set_duration) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(amount_value) = amount.get().trim().parse::<f64>() else {
            state.show_error("Loan amount must be a number");
            return;
        };
        let Ok(duration_value) = duration.get().trim().parse::<u32>() else {
            state.show_error("Duration must be a whole number of months");
            return;
        };
        let Some(token) = session.token() else { return };

        set_submitting.set(true);
        spawn_local(async move {
            match api::apply_loan(&token, amount_value, duration_value).await {
                Ok(()) => {
                    state.show_success("Loan application submitted successfully!");
                    // Clear the form and re-fetch; no optimistic insertion
                    set_amount.set(String::new());
                    set_duration.set(String::new());
                    on_applied();
                }
                Err(FetchError::Unauthorized) => expire_session(session, state),
                Err(_) => {
                    state.show_error("Failed to submit loan application");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <section class="bg-white rounded-xl p-6 border border-slate-200">
                <h2 class="text-lg font-semibold mb-4">"Apply for Loan"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-slate-600 mb-1">"Loan Amount ($)"</label>
                        <input
                            type="number"
                            placeholder="10000"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            required
                            class="w-full bg-slate-50 rounded-lg px-4 py-3
                                   border border-slate-200 focus:border-emerald-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-slate-600 mb-1">"Duration (Months)"</label>
                        <input
                            type="number"
                            placeholder="12"
                            prop:value=move || duration.get()
                            on:input=move |ev| set_duration.set(event_target_value(&ev))
                            required
                            class="w-full bg-slate-50 rounded-lg px-4 py-3
                                   border border-slate-200 focus:border-emerald-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-emerald-600 hover:bg-emerald-700 disabled:bg-slate-300
                               text-white rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Apply Now" }}
                    </button>
                </form>
            </section>

            <div class="space-y-4">
                {move || match loans.get() {
                    None => view! { <ListSkeleton count=3 /> }.into_view(),
                    Some(list) => list.into_iter().map(|loan| view! {
                        <div class="bg-white rounded-xl p-6 border border-slate-200">
                            <div class="flex items-center justify-between mb-3">
                                <h3 class="text-xl font-bold">{format!("${:.2}", loan.amount)}</h3>
                                <span class="text-sm font-medium capitalize px-3 py-1 rounded-full bg-slate-100">
                                    {loan.status.clone()}
                                </span>
                            </div>
                            <div class="text-sm text-slate-500 space-y-1">
                                <p>{format!("Interest Rate: {}%", loan.interest_rate)}</p>
                                <p>{format!("Duration: {} months", loan.duration_months)}</p>
                                <p>{format!("Applied: {}", format_date(&loan.created_at))}</p>
                            </div>
                        </div>
                    }).collect_view(),
                }}
            </div>
        </div>
    }
}

/// Masked card list
#[component]
fn CardsPanel(cards: ReadSignal<Option<Vec<Card>>>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            {move || match cards.get() {
                None => view! { <Loading /> }.into_view(),
                Some(list) => list.into_iter().map(|card| view! {
                    <div class="bg-slate-900 text-white rounded-xl p-6">
                        <span class="text-xs uppercase tracking-wide text-slate-400">
                            {card.card_type.clone()}
                        </span>
                        <p class="text-lg font-mono my-4">{card.masked_number()}</p>
                        <div class="flex justify-between text-sm">
                            <div>
                                <p class="text-slate-400">"Expiry"</p>
                                <p>{card.expiry_date.clone()}</p>
                            </div>
                            <div>
                                <p class="text-slate-400">"CVV"</p>
                                <p>"***"</p>
                            </div>
                        </div>
                    </div>
                }).collect_view(),
            }}
        </div>
    }
}

/// KYC status and document upload
#[component]
fn KycPanel(
    kyc: ReadSignal<Option<Kyc>>,
    on_updated: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (pending_doc, set_pending_doc) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            encode::read_file_as_data_url(&file, move |url| set_pending_doc.set(Some(url)));
        }
    };

    let on_update = move |_| {
        let Some(document) = pending_doc.get() else {
            state.show_error("Please upload a document");
            return;
        };

        // Full replace-style update: existing sequence plus the new document
        let documents = appended_documents(kyc.get().as_ref(), document);
        let Some(token) = session.token() else { return };

        set_submitting.set(true);
        spawn_local(async move {
            match api::update_kyc(&token, &documents).await {
                Ok(()) => {
                    state.show_success("KYC updated successfully!");
                    set_pending_doc.set(None);
                    on_updated();
                }
                Err(FetchError::Unauthorized) => expire_session(session, state),
                Err(_) => {
                    state.show_error("Failed to update KYC");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-white rounded-xl p-6 border border-slate-200 max-w-xl">
            <h2 class="text-lg font-semibold mb-4">"KYC Information"</h2>

            <div class="flex items-center space-x-2 mb-6">
                <span class="text-slate-500">"Status:"</span>
                {move || match kyc.get() {
                    None => view! { <span class="text-slate-400">"..."</span> }.into_view(),
                    Some(record) => view! {
                        <span class="text-sm font-medium capitalize px-3 py-1 rounded-full bg-slate-100">
                            {record.status}
                        </span>
                    }.into_view(),
                }}
            </div>

            <div class="space-y-3">
                <label class="block text-sm text-slate-600">"Upload Additional Documents"</label>
                <input
                    type="file"
                    accept="image/*"
                    on:change=on_upload
                    class="w-full text-sm text-slate-500"
                />
                {move || pending_doc.get().map(|src| view! {
                    <img src=src alt="Document Preview" class="max-h-32 rounded-lg" />
                })}
                {move || {
                    if pending_doc.get().is_some() {
                        view! {
                            <button
                                on:click=on_update
                                disabled=move || submitting.get()
                                class="px-6 py-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-slate-300
                                       text-white rounded-lg font-medium transition-colors"
                            >
                                {move || if submitting.get() { "Updating..." } else { "Update KYC" }}
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </section>
    }
}
