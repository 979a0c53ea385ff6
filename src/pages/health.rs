use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::status_badge::{CheckStatus, StatusBadge};
use crate::config::AppConfig;

#[component]
pub fn HealthPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (checking, set_checking) = signal(false);
    let (status, set_status) = signal(CheckStatus::Unknown);
    let (error, set_error) = signal::<Option<String>>(None);

    let check_config = config.clone();
    let do_health_check = move || {
        let config = check_config.clone();
        set_checking.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::check_health(&config).await {
                Ok(health) if health.ok => set_status.set(CheckStatus::Pass),
                Ok(_) => {
                    set_status.set(CheckStatus::Fail);
                    set_error.set(Some("Service reported it is not ready".to_string()));
                }
                Err(e) => {
                    set_status.set(CheckStatus::Fail);
                    set_error.set(Some(format!("Health check failed: {}", e)));
                }
            }
            set_checking.set(false);
        });
    };

    // Check once on mount
    let auto_check = do_health_check.clone();
    Effect::new(move |_| {
        auto_check();
    });

    let run_check = move |_| {
        do_health_check();
    };

    let base = config.api_base.clone();

    view! {
        <div class="page health-page">
            <h2>"Service Status"</h2>
            <p class="page-description">
                "Check that the competitor analysis service is reachable."
            </p>

            <button
                class="btn btn-primary"
                on:click=run_check
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Checking..." } else { "Run Check" }}
            </button>

            <div class="health-results">
                {move || view! {
                    <StatusBadge label="Analysis Service" status=status.get() endpoint=base.clone() />
                }}
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="health-error">
                            <span class="status-text status-error">{e}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
