//! Competitor analysis page: collect URLs, run the analysis, show the report.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpApi;
use crate::components::results_panel::ResultsPanel;
use crate::components::url_form::UrlForm;
use crate::config::AppConfig;
use crate::console;
use crate::error::AnalysisError;
use crate::session::{run_analysis, state_memo, Session, SessionState};
use crate::urls::UrlList;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let urls = RwSignal::new(UrlList::new());
    let session = RwSignal::new(Session::new());

    let analyzing = Signal::derive(move || session.with(|s| s.analyzing));
    let validation = Signal::derive(move || session.with(|s| s.validation.clone()));
    let state = state_memo(session);

    let on_submit = Callback::new(move |_: ()| {
        if session.with_untracked(|s| s.analyzing) {
            return;
        }
        let api = HttpApi::new(config.clone());
        let list = urls.with_untracked(|l| l.to_vec());
        spawn_local(async move {
            // Service failures are already logged and shown by the session
            if let Err(e @ (AnalysisError::Validation(_) | AnalysisError::SessionClosed)) =
                run_analysis(&api, &session, list).await
            {
                console::warn(&e.to_string());
            }
        });
    });

    view! {
        <div class="page analysis-page">
            <style>{include_str!("analysis.css")}</style>

            <h2>"Competitor Analysis"</h2>
            <p class="page-description">
                "Add the websites of your competitors and get a summary report with charts and a PDF."
            </p>

            <UrlForm
                urls=urls
                analyzing=analyzing
                validation=validation
                on_submit=on_submit
            />

            {move || match state.get() {
                SessionState::Idle => view! {
                    <p class="hint">"Results will appear here once the analysis finishes."</p>
                }.into_any(),

                SessionState::Analyzing => view! {
                    <div class="loading-indicator">
                        <div class="spinner"></div>
                        <p>"Analyzing competitor sites..."</p>
                        <p class="hint">"This can take a few minutes"</p>
                    </div>
                }.into_any(),

                SessionState::Succeeded(result) => view! {
                    <ResultsPanel result=result />
                }.into_any(),

                SessionState::Failed(msg) => view! {
                    <div class="error-state">
                        <div class="error-message">
                            <h3>"Analysis Failed"</h3>
                            <p>{msg}</p>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
