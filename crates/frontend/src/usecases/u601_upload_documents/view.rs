//! Upload Documents - View Component

use super::view_model::UploadDocumentsVm;
use crate::shared::icons::icon;
use crate::shared::rag_backend::FetchRagBackend;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_upload_documents::UploadDocuments;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn UploadDocumentsPanel(backend: FetchRagBackend) -> impl IntoView {
    let vm = UploadDocumentsVm::new();
    let backend = StoredValue::new(backend);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Сбросить нативный file input, иначе он продолжит показывать старые имена
    let clear_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            vm.select_from_input(&input);
        }
    };

    let handle_submit = move |_| {
        vm.submit(backend.get_value());
    };

    let handle_reset = move |_| {
        vm.reset();
        clear_input();
    };

    // После успешной загрузки выбор очищается, очищаем и поле
    Effect::new(move |_| {
        if vm.file_names().is_empty() {
            clear_input();
        }
    });

    let is_uploading = Signal::derive(move || vm.is_uploading());

    view! {
        <div style="width: 50%; height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: var(--colorNeutralBackground3);">
            <h2 style="font-size: 20px; font-weight: bold; margin-bottom: 16px;">
                {UploadDocuments::display_name()}
            </h2>

            <input
                node_ref=input_ref
                type="file"
                name="upload"
                id="upload"
                multiple=true
                style="border: 2px solid var(--colorNeutralStroke2); padding: 40px; border-radius: 8px; cursor: pointer;"
                on:change=handle_file_select
            />

            <div style="width: 384px; height: 192px; overflow-y: auto; margin-top: 16px; padding: 8px; border: 2px dashed var(--colorNeutralStroke2); border-radius: 8px;">
                <p style="padding-left: 16px; font-weight: bold; background: var(--colorNeutralBackground2); border-radius: 2px;">
                    "Selected Files:"
                </p>
                <ul>
                    <For
                        each=move || vm.file_names().into_iter().enumerate()
                        key=|(index, name)| format!("{}:{}", index, name)
                        let:entry
                    >
                        <li style="font-size: 14px; display: flex; align-items: center; gap: 6px;">
                            {icon("document")}
                            {entry.1}
                        </li>
                    </For>
                </ul>
            </div>

            {move || {
                let message = vm.status_message();
                (!message.is_empty())
                    .then(|| {
                        view! {
                            <div style="margin-top: 16px; padding: 12px; background: var(--colorNeutralBackground2); border-radius: 8px; font-size: 14px; max-width: 448px;">
                                {message}
                            </div>
                        }
                    })
            }}

            <Flex justify=FlexJustify::SpaceEvenly style="width: 384px; margin-top: 16px;">
                <Button appearance=ButtonAppearance::Secondary on_click=handle_reset>
                    "Reset"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_uploading
                    on_click=handle_submit
                >
                    {icon("upload")}
                    {move || if is_uploading.get() { " Uploading..." } else { " Submit" }}
                </Button>
            </Flex>
        </div>
    }
}
