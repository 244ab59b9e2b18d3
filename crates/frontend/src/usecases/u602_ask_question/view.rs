//! Ask Question - View Component

use super::state::{ChatEntry, ChatEntryKind};
use super::view_model::AskQuestionVm;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::rag_backend::FetchRagBackend;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_ask_question::AskQuestion;
use leptos::prelude::*;
use thaw::*;

fn source_label(count: usize) -> String {
    format!("📚 {} source(s)", count)
}

#[component]
#[allow(non_snake_case)]
fn ChatBubble(entry: ChatEntry) -> impl IntoView {
    match entry.kind {
        ChatEntryKind::Question => view! {
            <div style="display: flex; justify-content: flex-end;">
                <div style="background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand); border-radius: 8px; padding: 12px; max-width: 80%;">
                    <p style="font-size: 14px;">{entry.content}</p>
                </div>
            </div>
        }
        .into_any(),
        ChatEntryKind::Answer => {
            let mut meta_parts = vec![entry.timestamp.clone()];
            if let Some(count) = entry.retrieved_count {
                meta_parts.push(source_label(count));
            }
            view! {
                <div style="display: flex; justify-content: flex-start;">
                    <div style="background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px; max-width: 80%;">
                        <p style="font-size: 14px; white-space: pre-wrap;">{entry.content}</p>
                        <div style="font-size: 11px; opacity: 0.7; margin-top: 6px;">
                            {meta_parts.join(" • ")}
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
        ChatEntryKind::Error => view! {
            <div style="display: flex; justify-content: center;">
                <div style="background: var(--color-error-50); border: 1px solid var(--color-error-100); color: var(--color-error); border-radius: 8px; padding: 12px; max-width: 80%;">
                    <p style="font-size: 14px;">{format!("❌ {}", entry.content)}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AskQuestionPanel(config: AppConfig, backend: FetchRagBackend) -> impl IntoView {
    let vm = AskQuestionVm::new(&config);
    let backend = StoredValue::new(backend);
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Прокрутка к последнему сообщению после любого изменения ленты
    Effect::new(move |_| {
        let _ = vm.transcript_len();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    Effect::new(move |_| {
        vm.top_k_input.track();
        vm.apply_top_k();
    });

    let handle_send = Callback::new(move |_: ()| {
        vm.submit(backend.get_value());
    });

    let is_asking = Signal::derive(move || vm.is_asking());
    let send_disabled = Signal::derive(move || !vm.can_ask());

    view! {
        <div style="width: 50%; height: 100vh; display: flex; flex-direction: column; background: var(--colorNeutralBackground1);">
            // Header
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding: 16px; background: var(--colorBrandBackground2); box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);"
            >
                <div>
                    <h2 style="font-size: 24px; font-weight: bold;">{AskQuestion::display_name()}</h2>
                    <p style="font-size: 14px; opacity: 0.9;">{AskQuestion::description()}</p>
                </div>
                <Flex align=FlexAlign::Center style="gap: 16px;">
                    <label style="font-size: 13px; display: flex; align-items: center; gap: 6px;">
                        "Top K"
                        <Input
                            input_type=InputType::Number
                            value=vm.top_k_input
                            disabled=is_asking
                            attr:style="width: 72px;"
                        />
                    </label>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.clear()>
                        <span style="color: var(--color-error); text-decoration: underline;">
                            "Clear Chat"
                        </span>
                    </Button>
                </Flex>
            </Flex>

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 16px; background: var(--colorNeutralBackground2);"
            >
                <Show
                    when=move || { vm.transcript_len() > 0 }
                    fallback=|| {
                        view! {
                            <div style="height: 100%; display: flex; align-items: center; justify-content: center; color: var(--colorNeutralForeground4); text-align: center;">
                                <div>
                                    {icon("chat")}
                                    <p style="font-size: 18px; font-weight: 500;">"No messages yet"</p>
                                    <p style="font-size: 14px;">
                                        "Start by asking a question about your documents"
                                    </p>
                                </div>
                            </div>
                        }
                    }
                >
                    <For each=move || vm.transcript() key=|entry| entry.id let:entry>
                        <ChatBubble entry=entry />
                    </For>
                </Show>
            </div>

            // Input area
            <div style="border-top: 1px solid var(--colorNeutralStroke2); padding: 16px;">
                <Flex style="gap: 8px;">
                    <div style="flex: 1;">
                        <Input
                            value=vm.question
                            placeholder="Ask a question about your documents..."
                            disabled=is_asking
                            attr:style="width: 100%;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=send_disabled
                        on_click=move |_| handle_send.run(())
                    >
                        {move || {
                            if is_asking.get() {
                                view! {
                                    <Flex align=FlexAlign::Center style="gap: 8px;">
                                        <Spinner size=SpinnerSize::Tiny />
                                        "Asking..."
                                    </Flex>
                                }
                                    .into_any()
                            } else {
                                view! { {icon("send")} " Ask" }.into_any()
                            }
                        }}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
