//! Landing Page
//!
//! Public marketing page with staff and branch directories. Both directory
//! fetches are independent; a failure just logs and leaves its section empty.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::{BankInfo, Employee};

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let (employees, set_employees) = create_signal(Vec::<Employee>::new());
    let (branches, set_branches) = create_signal(Vec::<BankInfo>::new());

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_employees().await {
                Ok(list) => set_employees.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch employees: {}", e).into());
                }
            }
        });

        spawn_local(async move {
            match api::fetch_bank_info().await {
                Ok(list) => set_branches.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch bank info: {}", e).into());
                }
            }
        });
    });

    view! {
        <div>
            // Hero
            <section class="bg-emerald-900 text-white py-24 text-center">
                <h1 class="text-5xl font-bold mb-4">
                    "Welcome to " <span class="text-emerald-300">"SecureBank"</span>
                </h1>
                <p class="text-lg text-emerald-100 mb-8">
                    "Your trusted partner in modern banking. Secure, fast, and always here for you."
                </p>
                <A
                    href="/auth"
                    class="inline-block px-8 py-3 bg-emerald-500 hover:bg-emerald-400
                           rounded-lg font-semibold transition-colors"
                >
                    "Get Started"
                </A>
            </section>

            // Features
            <section class="container mx-auto px-4 py-16">
                <h2 class="text-2xl font-bold text-center mb-8">"Why Choose Us"</h2>
                <div class="grid md:grid-cols-4 gap-6">
                    <FeatureCard
                        title="Secure Banking"
                        text="Bank-grade encryption and security protocols to keep your money safe"
                    />
                    <FeatureCard
                        title="Smart Investments"
                        text="Grow your wealth with our intelligent investment solutions"
                    />
                    <FeatureCard
                        title="Easy Payments"
                        text="Quick and seamless transactions with our modern payment systems"
                    />
                    <FeatureCard
                        title="24/7 Support"
                        text="Our support team is always ready to help you"
                    />
                </div>
            </section>

            // Staff directory
            <section class="bg-white py-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-2xl font-bold text-center mb-8">"Our Leadership Team"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {move || employees.get().into_iter().map(|employee| view! {
                            <div class="bg-slate-50 rounded-xl p-6 text-center">
                                <img
                                    src=employee.image.clone()
                                    alt=employee.name.clone()
                                    class="w-20 h-20 rounded-full mx-auto mb-3 object-cover"
                                />
                                <h3 class="font-semibold">{employee.name}</h3>
                                <p class="text-sm text-emerald-700">{employee.position}</p>
                                <p class="text-sm text-slate-500">{employee.department}</p>
                                <div class="text-xs text-slate-500 mt-2 space-y-1">
                                    <p>{employee.email}</p>
                                    <p>{employee.phone}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Branch directory
            <section class="container mx-auto px-4 py-16">
                <h2 class="text-2xl font-bold text-center mb-8">"Our Branches"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {move || branches.get().into_iter().map(|branch| view! {
                        <div class="bg-white rounded-xl p-6 border border-slate-200">
                            <h3 class="font-semibold">{branch.name}</h3>
                            <p class="text-sm text-emerald-700 mb-3">{branch.branch}</p>
                            <div class="text-sm text-slate-600 space-y-1">
                                <p>{branch.address}</p>
                                <p>{branch.phone}</p>
                                <p>{branch.email}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Footer
            <footer class="bg-slate-900 text-slate-300 py-8 text-center text-sm">
                <p>"© 2025 SecureBank. All rights reserved."</p>
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 border border-slate-200 text-center">
            <h3 class="font-semibold mb-2">{title}</h3>
            <p class="text-sm text-slate-500">{text}</p>
        </div>
    }
}
