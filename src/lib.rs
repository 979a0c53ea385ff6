pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod console;
pub mod error;
pub mod pages;
pub mod session;
pub mod urls;

pub use api::{AnalysisApi, AnalysisResult, HttpApi};
pub use app::App;
pub use config::AppConfig;
pub use error::AnalysisError;
pub use session::{run_analysis, Session, SessionState};
pub use urls::UrlList;
