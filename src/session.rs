//! Lifecycle of one analysis attempt.
//!
//! ```text
//! Idle ──submit──▶ Analyzing ──ok──▶ Succeeded
//!                      └────error──▶ Failed
//! Succeeded / Failed ──submit──▶ Analyzing
//! ```
//! Submitting an empty list leaves the state untouched and only sets the
//! validation notice.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::api::{AnalysisApi, AnalysisResult};
use crate::console;
use crate::error::AnalysisError;

const INTERRUPTED: &str = "Analysis was interrupted before the service responded";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Analyzing,
    Succeeded(AnalysisResult),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub state: SessionState,
    /// True from submission until the request settles, whatever the outcome.
    pub analyzing: bool,
    /// Shown next to the form when a submit is rejected before any request.
    pub validation: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Analyzing` for a non-empty URL list.
    pub fn begin(&mut self, urls: &[String]) -> Result<(), AnalysisError> {
        if urls.is_empty() {
            let err = AnalysisError::empty_list();
            self.validation = Some(err.to_string());
            return Err(err);
        }
        self.validation = None;
        self.state = SessionState::Analyzing;
        self.analyzing = true;
        Ok(())
    }

    /// Record the outcome of the request. The in-progress flag is cleared by
    /// [`InFlight`], not here.
    pub fn finish(&mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        self.state = match outcome {
            Ok(result) => SessionState::Succeeded(result),
            Err(e) => SessionState::Failed(e.to_string()),
        };
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            SessionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Storage the controller writes the session through.
///
/// `update_session` returns `None` when the write did not happen.
pub trait SessionCell {
    fn update_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R>;
}

impl SessionCell for RwSignal<Session> {
    fn update_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        // The page may be gone by the time a task runs or a response lands.
        let written = self.try_update(f);
        if written.is_none() {
            console::warn("Session dropped before analysis finished");
        }
        written
    }
}

impl SessionCell for RefCell<Session> {
    fn update_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}

/// Session state on its own, so views keyed on it skip rebuilds when only
/// `analyzing` or `validation` change.
pub fn state_memo(session: RwSignal<Session>) -> Memo<SessionState> {
    Memo::new(move |_| session.with(|s| s.state.clone()))
}

/// Clears `analyzing` when dropped, so every exit path of a request resets
/// the flag. A state still in `Analyzing` at that point means the future was
/// dropped early and is turned into a failure.
pub struct InFlight<'a, S: SessionCell> {
    session: &'a S,
}

impl<'a, S: SessionCell> InFlight<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }
}

impl<S: SessionCell> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        let _ = self.session.update_session(|s| {
            s.analyzing = false;
            if s.state == SessionState::Analyzing {
                s.state = SessionState::Failed(INTERRUPTED.to_string());
            }
        });
    }
}

/// Validate, call the service and record the outcome in `session`.
///
/// An empty list, or a session that can no longer be written, is rejected
/// without touching `api`.
pub async fn run_analysis<A, S>(api: &A, session: &S, urls: Vec<String>) -> Result<(), AnalysisError>
where
    A: AnalysisApi,
    S: SessionCell,
{
    session
        .update_session(|s| s.begin(&urls))
        .ok_or(AnalysisError::SessionClosed)??;

    let _in_flight = InFlight::new(session);
    console::info(&format!("Starting analysis of {} URL(s)", urls.len()));

    let outcome = api.analyze(&urls).await;
    let failure = match &outcome {
        Ok(result) => {
            console::info(&format!(
                "Analysis complete: {} chart(s), report {}",
                result.charts.len(),
                result.pdf_path
            ));
            None
        }
        Err(e) => {
            console::error(&format!("Analysis failed: {}", e));
            Some(e.clone())
        }
    };

    if session.update_session(|s| s.finish(outcome)).is_none() {
        return Err(AnalysisError::SessionClosed);
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
