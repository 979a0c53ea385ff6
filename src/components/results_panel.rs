//! Report view shown once the service has answered.

use leptos::prelude::*;

use crate::api::{self, AnalysisResult};
use crate::config::AppConfig;

#[component]
pub fn ResultsPanel(result: AnalysisResult) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let charts = result
        .charts
        .iter()
        .map(|path| {
            let src = api::chart_url(&config, path);
            let alt = api::chart_basename(path).to_string();
            view! {
                <figure class="chart">
                    <img src=src alt=alt.clone() class="chart-image" />
                    <figcaption>{alt}</figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>();
    let has_charts = !charts.is_empty();
    let has_pdf = !result.pdf_path.trim().is_empty();

    let report_text = result.report_text.clone();
    let on_download = move |_| api::open_download(&config, Some(&result));

    view! {
        <div class="analysis-results">
            <h3>"Summary"</h3>
            <pre class="report-text">{report_text}</pre>

            {has_charts.then(|| view! {
                <h3>"Charts"</h3>
                <div class="chart-grid">{charts}</div>
            })}

            <div class="action-buttons">
                <button class="btn btn-primary" on:click=on_download disabled=!has_pdf>
                    "Download PDF Report"
                </button>
            </div>
        </div>
    }
}
