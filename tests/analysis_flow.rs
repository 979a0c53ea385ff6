use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use leptos::prelude::{Dispose, GetUntracked, Owner, RwSignal};

use competitor_lens::api::{chart_url, parse_analyze_response};
use competitor_lens::{
    run_analysis, AnalysisApi, AnalysisError, AnalysisResult, AppConfig, Session, SessionState,
    UrlList,
};

/// Replays canned `/api/analyze` responses and counts calls.
struct FakeApi {
    status: u16,
    body: &'static str,
    calls: Cell<usize>,
    last_urls: RefCell<Vec<String>>,
}

impl FakeApi {
    fn responding(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            calls: Cell::new(0),
            last_urls: RefCell::new(Vec::new()),
        }
    }
}

impl AnalysisApi for FakeApi {
    async fn analyze(&self, urls: &[String]) -> Result<AnalysisResult, AnalysisError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_urls.borrow_mut() = urls.to_vec();
        parse_analyze_response(self.status, self.body)
    }
}

/// Fails like a `fetch` that never reached the server.
struct OfflineApi;

impl AnalysisApi for OfflineApi {
    async fn analyze(&self, _urls: &[String]) -> Result<AnalysisResult, AnalysisError> {
        Err(AnalysisError::network("Failed to fetch"))
    }
}

const SUCCESS_BODY: &str = r#"{"report_text":"X","pdf_path":"/r/a.pdf","charts":["/c/1.png"]}"#;

fn urls(items: &[&str]) -> Vec<String> {
    let mut list = UrlList::new();
    for item in items {
        list.add(item);
    }
    list.to_vec()
}

#[test]
fn test_empty_list_never_calls_api() {
    let api = FakeApi::responding(200, SUCCESS_BODY);
    let session = RefCell::new(Session::new());

    let err = block_on(run_analysis(&api, &session, Vec::new())).unwrap_err();

    assert!(matches!(err, AnalysisError::Validation(_)));
    assert_eq!(api.calls.get(), 0);
    let session = session.borrow();
    assert_eq!(session.state, SessionState::Idle);
    assert!(!session.analyzing);
    assert!(!session.validation.as_deref().unwrap_or("").is_empty());
}

#[test]
fn test_success_stores_result_and_resolves_chart_urls() {
    let api = FakeApi::responding(200, SUCCESS_BODY);
    let session = RefCell::new(Session::new());
    let submitted = urls(&["https://a.example", "https://b.example"]);

    block_on(run_analysis(&api, &session, submitted.clone())).unwrap();

    assert_eq!(api.calls.get(), 1);
    assert_eq!(*api.last_urls.borrow(), submitted);

    let session = session.borrow();
    assert!(!session.analyzing);
    let result = session.result().expect("result should be stored");
    assert_eq!(result.report_text, "X");

    let config = AppConfig::new("http://localhost:8000/");
    let srcs: Vec<String> = result.charts.iter().map(|c| chart_url(&config, c)).collect();
    assert_eq!(srcs, vec!["http://localhost:8000/charts/1.png".to_string()]);
}

#[test]
fn test_http_detail_becomes_error_message() {
    let api = FakeApi::responding(400, r#"{"detail":"bad url"}"#);
    let session = RefCell::new(Session::new());

    let err = block_on(run_analysis(&api, &session, urls(&["ftp://x"]))).unwrap_err();

    assert_eq!(err.to_string(), "bad url");
    let session = session.borrow();
    assert_eq!(session.error(), Some("bad url"));
    assert!(!session.analyzing);
}

#[test]
fn test_http_without_detail_uses_generic_message() {
    let api = FakeApi::responding(400, r#"{"error":"nope"}"#);
    let session = RefCell::new(Session::new());

    block_on(run_analysis(&api, &session, urls(&["https://a.example"]))).unwrap_err();

    let session = session.borrow();
    let message = session.error().expect("should have failed");
    assert!(!message.trim().is_empty());
    assert!(!session.analyzing);
}

#[test]
fn test_network_failure_resets_flag() {
    let session = RefCell::new(Session::new());

    let err = block_on(run_analysis(&OfflineApi, &session, urls(&["https://a.example"]))).unwrap_err();

    assert!(matches!(err, AnalysisError::Network(_)));
    let session = session.borrow();
    assert_eq!(session.error(), Some("Failed to fetch"));
    assert!(!session.analyzing);
}

#[test]
fn test_resubmit_after_failure_reenters_analysis() {
    let session = RefCell::new(Session::new());
    let list = urls(&["https://a.example"]);

    block_on(run_analysis(&OfflineApi, &session, list.clone())).unwrap_err();
    assert!(session.borrow().error().is_some());

    let api = FakeApi::responding(200, SUCCESS_BODY);
    block_on(run_analysis(&api, &session, list)).unwrap();

    let session = session.borrow();
    assert!(session.error().is_none());
    assert!(session.result().is_some());
    assert!(!session.analyzing);
}

#[test]
fn test_empty_resubmit_keeps_previous_report() {
    let api = FakeApi::responding(200, SUCCESS_BODY);
    let session = RefCell::new(Session::new());

    block_on(run_analysis(&api, &session, urls(&["https://a.example"]))).unwrap();
    block_on(run_analysis(&api, &session, Vec::new())).unwrap_err();

    assert_eq!(api.calls.get(), 1);
    let session = session.borrow();
    assert!(session.result().is_some());
    assert!(session.validation.is_some());
}

#[test]
fn test_signal_session_records_outcome() {
    let owner = Owner::new();
    owner.set();

    let api = FakeApi::responding(200, SUCCESS_BODY);
    let session = RwSignal::new(Session::new());

    block_on(run_analysis(&api, &session, urls(&["https://a.example"]))).unwrap();

    let stored = session.get_untracked();
    assert_eq!(api.calls.get(), 1);
    assert!(!stored.analyzing);
    assert_eq!(stored.result().map(|r| r.report_text.as_str()), Some("X"));
}

#[test]
fn test_disposed_signal_session_never_calls_api() {
    let owner = Owner::new();
    owner.set();

    let api = FakeApi::responding(200, SUCCESS_BODY);
    let session = RwSignal::new(Session::new());
    session.dispose();

    let err = block_on(run_analysis(&api, &session, urls(&["https://a.example"]))).unwrap_err();

    assert_eq!(err, AnalysisError::SessionClosed);
    assert_eq!(api.calls.get(), 0);
}
