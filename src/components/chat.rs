//! Support Chat Widget
//!
//! Floating request/response chat against the banking assistant. The
//! conversation lives only in memory; each send carries just the latest
//! message text.

use leptos::*;

use crate::api;
use crate::api::FetchError;
use crate::state::global::GlobalState;
use crate::state::session::Session;

/// Bot turn shown when the call errors; the user turn is never rolled back
const FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Ordered, append-only chat history
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    turns: Vec<ChatTurn>,
}

impl ChatLog {
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_user(&mut self, text: &str) {
        self.turns.push(ChatTurn {
            role: ChatRole::User,
            text: text.to_string(),
        });
    }

    /// Append the bot turn for a settled send: the reply on success, the
    /// fixed failure text otherwise
    pub fn push_reply(&mut self, result: Result<String, FetchError>) {
        let text = result.unwrap_or_else(|_| FAILURE_REPLY.to_string());
        self.turns.push(ChatTurn {
            role: ChatRole::Bot,
            text,
        });
    }
}

/// Floating chat widget shown on the dashboard
#[component]
pub fn ChatWidget() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (open, set_open) = create_signal(false);
    let (message, set_message) = create_signal(String::new());
    let (log, set_log) = create_signal(ChatLog::default());
    let (sending, set_sending) = create_signal(false);

    let send = move || {
        let text = message.get();
        if text.trim().is_empty() || sending.get() {
            return;
        }

        // Optimistic user turn; never rolled back on failure
        set_log.update(|log| log.push_user(&text));
        set_message.set(String::new());
        set_sending.set(true);

        let token = session.token().unwrap_or_default();
        spawn_local(async move {
            let result = api::send_chat_message(&token, &text).await;
            if result.is_err() {
                state.show_error("Failed to send message");
            }
            set_log.update(|log| log.push_reply(result));
            set_sending.set(false);
        });
    };

    let on_send = move |_| send();
    let on_key = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            send();
        }
    };

    view! {
        <div class="fixed bottom-6 left-4 z-40">
            {move || {
                if !open.get() {
                    return view! {
                        <button
                            on:click=move |_| set_open.set(true)
                            class="w-14 h-14 rounded-full bg-emerald-600 hover:bg-emerald-700
                                   text-white shadow-lg text-2xl transition-colors"
                        >
                            "💬"
                        </button>
                    }.into_view();
                }

                view! {
                    <div class="w-80 bg-white rounded-xl shadow-2xl border border-slate-200 flex flex-col">
                        // Header
                        <div class="flex items-center justify-between px-4 py-3 border-b border-slate-200">
                            <span class="font-semibold">"Live Support"</span>
                            <button
                                on:click=move |_| set_open.set(false)
                                class="text-slate-400 hover:text-slate-600"
                            >
                                "✕"
                            </button>
                        </div>

                        // Messages
                        <div class="flex-1 max-h-80 overflow-y-auto p-4 space-y-2">
                            {move || {
                                let log = log.get();
                                if log.is_empty() {
                                    view! {
                                        <p class="text-sm text-slate-500">
                                            "Hello! How can I help you today?"
                                        </p>
                                    }.into_view()
                                } else {
                                    log.turns().iter().map(|turn| {
                                        let bubble = match turn.role {
                                            ChatRole::User => "ml-8 bg-emerald-600 text-white",
                                            ChatRole::Bot => "mr-8 bg-slate-100 text-slate-800",
                                        };
                                        view! {
                                            <div class=format!("rounded-lg px-3 py-2 text-sm {}", bubble)>
                                                {turn.text.clone()}
                                            </div>
                                        }
                                    }).collect_view()
                                }
                            }}

                            // Typing indicator
                            {move || {
                                if sending.get() {
                                    view! {
                                        <div class="mr-8 bg-slate-100 text-slate-500 rounded-lg px-3 py-2 text-sm">
                                            "Typing..."
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }}
                        </div>

                        // Input
                        <div class="flex items-center space-x-2 p-3 border-t border-slate-200">
                            <input
                                type="text"
                                placeholder="Type your message..."
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                                on:keydown=on_key
                                disabled=move || sending.get()
                                class="flex-1 bg-slate-100 rounded-lg px-3 py-2 text-sm
                                       border border-slate-200 focus:border-emerald-500 focus:outline-none"
                            />
                            <button
                                on:click=on_send
                                disabled=move || sending.get()
                                class="px-3 py-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-slate-300
                                       text-white rounded-lg text-sm transition-colors"
                            >
                                "Send"
                            </button>
                        </div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_one_user_then_one_bot_turn() {
        let mut log = ChatLog::default();
        log.push_user("What is my balance?");
        assert_eq!(log.turns().len(), 1);
        assert_eq!(log.turns()[0].role, ChatRole::User);

        log.push_reply(Ok("Your balance is $150.00".to_string()));
        assert_eq!(log.turns().len(), 2);
        assert_eq!(log.turns()[1].role, ChatRole::Bot);
        assert_eq!(log.turns()[1].text, "Your balance is $150.00");
    }

    #[test]
    fn test_failed_send_appends_failure_turn() {
        let mut log = ChatLog::default();
        log.push_user("hello");
        log.push_reply(Err(FetchError::Network("offline".to_string())));

        assert_eq!(log.turns().len(), 2);
        assert_eq!(log.turns()[1].text, FAILURE_REPLY);
    }

    #[test]
    fn test_history_grows_monotonically() {
        let mut log = ChatLog::default();
        let mut previous = 0;
        for i in 0..5 {
            log.push_user(&format!("message {}", i));
            assert!(log.turns().len() > previous);
            previous = log.turns().len();

            log.push_reply(Err(FetchError::Network("offline".to_string())));
            assert!(log.turns().len() > previous);
            previous = log.turns().len();
        }
        assert_eq!(log.turns().len(), 10);
    }
}
