//! HTTP boundary to the competitor analysis service.
//!
//! The only request the app really makes is `POST /api/analyze`; downloads and
//! charts are plain GET links built from the configured base URL.

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::AppConfig;
use crate::console;
use crate::error::AnalysisError;

// -- Wire types --

#[derive(Serialize)]
struct AnalyzeArgs<'a> {
    urls: &'a [String],
}

/// Report returned by a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub report_text: String,
    pub pdf_path: String,
    #[serde(default)]
    pub charts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}

/// Something that can run an analysis for a list of URLs.
#[allow(async_fn_in_trait)]
pub trait AnalysisApi {
    async fn analyze(&self, urls: &[String]) -> Result<AnalysisResult, AnalysisError>;
}

/// `fetch`-backed client used in the browser.
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl AnalysisApi for HttpApi {
    async fn analyze(&self, urls: &[String]) -> Result<AnalysisResult, AnalysisError> {
        let body = serde_json::to_string(&AnalyzeArgs { urls })
            .map_err(|e| AnalysisError::network(e.to_string()))?;

        let url = self.config.endpoint("api/analyze");
        let (status, text) = post_json(&url, &body)
            .await
            .map_err(AnalysisError::network)?;

        parse_analyze_response(status, &text)
    }
}

/// Turn a status code and raw body from `/api/analyze` into a result.
///
/// Non-2xx bodies are searched for a string `detail`; anything else (missing,
/// blank, FastAPI's validation arrays, non-JSON) gets the generic message.
pub fn parse_analyze_response(status: u16, body: &str) -> Result<AnalysisResult, AnalysisError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| {
            AnalysisError::network(format!("Malformed response from analysis service: {}", e))
        });
    }

    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .filter(|d| !d.trim().is_empty());

    match detail {
        Some(message) => Err(AnalysisError::Http { status, message }),
        None => Err(AnalysisError::http_fallback(status)),
    }
}

// -- Links --

/// Last non-empty segment of a server-side chart path.
pub fn chart_basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
}

/// Display URL for a chart path reported by the service.
pub fn chart_url(config: &AppConfig, chart_path: &str) -> String {
    let name = urlencoding::encode(chart_basename(chart_path));
    config.endpoint(&format!("charts/{}", name))
}

/// Download URL for the PDF report, `None` when the path is blank.
pub fn download_url(config: &AppConfig, pdf_path: &str) -> Option<String> {
    if pdf_path.trim().is_empty() {
        return None;
    }
    Some(format!(
        "{}?path={}",
        config.endpoint("api/download"),
        urlencoding::encode(pdf_path)
    ))
}

/// Open the report PDF in a new tab. Does nothing without a result or path.
pub fn open_download(config: &AppConfig, result: Option<&AnalysisResult>) {
    let Some(url) = result.and_then(|r| download_url(config, &r.pdf_path)) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
        console::error(&format!("Failed to open download: {}", js_error_message(e)));
    }
}

// -- Health --

pub async fn check_health(config: &AppConfig) -> Result<HealthStatus, String> {
    let request = Request::new_with_str(&config.endpoint("api/health")).map_err(js_error_message)?;
    let response = fetch(request).await?;

    if !response.ok() {
        return Err(format!("Service responded with HTTP {}", response.status()));
    }

    let promise = response.json().map_err(js_error_message)?;
    let json = JsFuture::from(promise).await.map_err(js_error_message)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

// -- fetch plumbing --

async fn post_json(url: &str, body: &str) -> Result<(u16, String), String> {
    let headers = Headers::new().map_err(js_error_message)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error_message)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error_message)?;
    let response = fetch(request).await?;

    let promise = response.text().map_err(js_error_message)?;
    let text = JsFuture::from(promise).await.map_err(js_error_message)?;

    Ok((response.status(), text.as_string().unwrap_or_default()))
}

async fn fetch(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("No browser window available")?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error_message)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not return a Response".to_string())
}

fn js_error_message(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_default()
}
