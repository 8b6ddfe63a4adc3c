use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::format;
use crate::models::ConfigMap;

/// Settings modal over the backend key-value configuration store: table with
/// inline editing plus a form for adding new entries.
#[component]
pub fn ConfigModal(set_open: WriteSignal<bool>) -> impl IntoView {
    let (configs, set_configs) = signal(ConfigMap::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    // (key, draft value) of the row currently being edited inline.
    let (editing, set_editing) = signal(None::<(String, String)>);
    let (show_add, set_show_add) = signal(false);

    // Load on mount; the modal is remounted on every open.
    load_configs(set_configs, set_loading, set_error);

    view! {
        <div class="modal-overlay">
            <div class="config-modal">
                <div class="modal-header">
                    <h2>"System Configuration"</h2>
                    <button class="close-button" on:click=move |_| set_open.set(false)>
                        "✕"
                    </button>
                </div>

                <div class="modal-content">
                    {move || {
                        error.get().map(|err| view! { <div class="error-message">{err}</div> })
                    }}
                    {move || {
                        if loading.get() {
                            view! { <div class="loading">"Loading..."</div> }.into_any()
                        } else {
                            view! {
                                <div class="config-actions">
                                    <button
                                        class="add-config-button"
                                        on:click=move |_| set_show_add.update(|s| *s = !*s)
                                    >
                                        {move || {
                                            if show_add.get() { "Cancel" } else { "Add New Configuration" }
                                        }}
                                    </button>
                                </div>
                                {move || {
                                    show_add
                                        .get()
                                        .then(|| {
                                            view! {
                                                <AddConfigForm
                                                    set_show_add=set_show_add
                                                    set_configs=set_configs
                                                    set_loading=set_loading
                                                    set_error=set_error
                                                />
                                            }
                                        })
                                }}
                                <div class="configs-table">
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>"Key"</th>
                                                <th>"Value"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            <For
                                                each=move || {
                                                    configs.get().into_iter().collect::<Vec<_>>()
                                                }
                                                key=|(k, _)| k.clone()
                                                let:entry
                                            >
                                                {
                                                    let (name, value) = entry;
                                                    view! {
                                                        <ConfigRow
                                                            name=name
                                                            value=value
                                                            editing=editing
                                                            set_editing=set_editing
                                                            set_configs=set_configs
                                                            set_loading=set_loading
                                                            set_error=set_error
                                                        />
                                                    }
                                                }
                                            </For>
                                        </tbody>
                                    </table>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// One config entry row. Sensitive values (keys, URLs) are shown masked.
#[component]
fn ConfigRow(
    name: String,
    value: String,
    editing: ReadSignal<Option<(String, String)>>,
    set_editing: WriteSignal<Option<(String, String)>>,
    set_configs: WriteSignal<ConfigMap>,
    set_loading: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let masked = format::mask_config_value(&name, &value);

    let name_check = name.clone();
    let is_editing = move || {
        editing.get().map(|(k, _)| k).as_deref() == Some(name_check.as_str())
    };
    let is_editing_actions = is_editing.clone();

    let name_edit = name.clone();
    let value_edit = value.clone();
    let start_edit = move |_| set_editing.set(Some((name_edit.clone(), value_edit.clone())));

    let on_save = move |_| {
        let Some((key, draft)) = editing.get_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::update_config(&key, &draft, None).await {
                Ok(()) => {
                    set_editing.set(None);
                    load_configs(set_configs, set_loading, set_error);
                }
                Err(e) => {
                    log::error!("Failed to update config {key}: {e}");
                    set_error.set(Some(format!("Failed to save configuration: {e}")));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <tr>
            <td>{name}</td>
            <td>
                {move || {
                    if is_editing() {
                        view! {
                            <input
                                type="text"
                                prop:value=move || {
                                    editing.get().map(|(_, v)| v).unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    set_editing
                                        .update(|entry| {
                                            if let Some((_, draft)) = entry {
                                                *draft = event_target_value(&ev);
                                            }
                                        })
                                }
                            />
                        }
                            .into_any()
                    } else {
                        view! { <span class="config-value">{masked.clone()}</span> }.into_any()
                    }
                }}
            </td>
            <td>
                {move || {
                    if is_editing_actions() {
                        let on_save = on_save.clone();
                        view! {
                            <div class="edit-actions">
                                <button class="cancel-edit" on:click=move |_| set_editing.set(None)>
                                    "Cancel"
                                </button>
                                <button class="save-edit" on:click=on_save>
                                    "Save"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        let start_edit = start_edit.clone();
                        view! {
                            <button class="edit-button" on:click=start_edit>
                                "Edit"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </td>
        </tr>
    }
}

/// Form for creating a new config entry; description is optional.
#[component]
fn AddConfigForm(
    set_show_add: WriteSignal<bool>,
    set_configs: WriteSignal<ConfigMap>,
    set_loading: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (new_key, set_new_key) = signal(String::new());
    let (new_value, set_new_value) = signal(String::new());
    let (new_desc, set_new_desc) = signal(String::new());

    let on_add = move |_| {
        let key = new_key.get_untracked().trim().to_string();
        let value = new_value.get_untracked().trim().to_string();
        if key.is_empty() || value.is_empty() {
            return;
        }
        let desc = new_desc.get_untracked().trim().to_string();
        set_loading.set(true);
        spawn_local(async move {
            let description = if desc.is_empty() { None } else { Some(desc.as_str()) };
            match api::set_config(&key, &value, description).await {
                Ok(()) => {
                    set_show_add.set(false);
                    load_configs(set_configs, set_loading, set_error);
                }
                Err(e) => {
                    log::error!("Failed to add config {key}: {e}");
                    set_error.set(Some(format!("Failed to add configuration: {e}")));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="add-config-form">
            <h3>"New Configuration"</h3>
            <div class="form-group">
                <label>"Key:"</label>
                <input
                    type="text"
                    placeholder="CONFIG_KEY"
                    prop:value=new_key
                    on:input=move |ev| set_new_key.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Value:"</label>
                <input
                    type="text"
                    placeholder="value"
                    prop:value=new_value
                    on:input=move |ev| set_new_value.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Description (optional):"</label>
                <input
                    type="text"
                    placeholder="What this setting controls"
                    prop:value=new_desc
                    on:input=move |ev| set_new_desc.set(event_target_value(&ev))
                />
            </div>
            <div class="form-actions">
                <button class="cancel-button" on:click=move |_| set_show_add.set(false)>
                    "Cancel"
                </button>
                <button
                    class="save-button"
                    on:click=on_add
                    disabled=move || {
                        new_key.get().trim().is_empty() || new_value.get().trim().is_empty()
                    }
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}

fn load_configs(
    set_configs: WriteSignal<ConfigMap>,
    set_loading: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
) {
    set_loading.set(true);
    set_error.set(None);
    spawn_local(async move {
        match api::fetch_configs().await {
            Ok(map) => set_configs.set(map),
            Err(e) => {
                log::error!("Failed to load configs: {e}");
                set_error.set(Some(format!("Failed to load configurations: {e}")));
            }
        }
        set_loading.set(false);
    });
}
