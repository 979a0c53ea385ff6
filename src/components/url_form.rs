use leptos::prelude::*;

use crate::urls::UrlList;

/// Input for collecting competitor URLs plus the button that starts the run.
#[component]
pub fn UrlForm(
    /// The URLs collected so far.
    urls: RwSignal<UrlList>,
    /// True while a request is in flight; locks the form.
    #[prop(into)]
    analyzing: Signal<bool>,
    /// Message shown when a submit was rejected.
    #[prop(into)]
    validation: Signal<Option<String>>,
    /// Fired when the user asks for an analysis.
    on_submit: Callback<()>,
) -> impl IntoView {
    let (input, set_input) = signal(String::new());

    // Input is only cleared when the URL actually made it into the list
    let add_url = move || {
        let value = input.get_untracked();
        if urls.try_update(|list| list.add(&value)).unwrap_or(false) {
            set_input.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_url();
        }
    };

    let submit_disabled = move || analyzing.get() || urls.with(|list| list.is_empty());

    view! {
        <div class="url-form">
            <div class="input-row">
                <input
                    type="url"
                    class="input"
                    placeholder="https://competitor.example"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || analyzing.get()
                />
                <button
                    class="btn btn-secondary"
                    on:click=move |_| add_url()
                    disabled=move || analyzing.get()
                >
                    "Add"
                </button>
            </div>

            <ul class="url-list">
                {move || {
                    urls.with(|list| list.to_vec())
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <li class="url-item">
                                    <span class="url-text">{url}</span>
                                    <button
                                        class="btn btn-delete"
                                        on:click=move |_| {
                                            urls.update(|list| {
                                                list.remove(index);
                                            });
                                        }
                                        disabled=move || analyzing.get()
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>

            {move || validation.get().map(|msg| view! {
                <p class="status-text status-error">{msg}</p>
            })}

            <button
                class="btn btn-primary"
                on:click=move |_| on_submit.run(())
                disabled=submit_disabled
            >
                {move || if analyzing.get() { "Analyzing..." } else { "Analyze Competitors" }}
            </button>
        </div>
    }
}
