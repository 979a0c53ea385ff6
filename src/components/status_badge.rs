use leptos::prelude::*;

/// Outcome of probing the analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Unknown,
}

impl CheckStatus {
    fn icon_and_class(self) -> (&'static str, &'static str) {
        match self {
            CheckStatus::Pass => ("\u{2713}", "status-badge status-pass"),
            CheckStatus::Fail => ("\u{2717}", "status-badge status-fail"),
            CheckStatus::Unknown => ("?", "status-badge status-unknown"),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            CheckStatus::Pass => "Reachable",
            CheckStatus::Fail => "Unreachable",
            CheckStatus::Unknown => "Not checked yet",
        }
    }
}

#[component]
pub fn StatusBadge(
    #[prop(into)]
    label: String,
    status: CheckStatus,
    /// Where the service lives, shown after the status text
    #[prop(optional, into)]
    endpoint: Option<String>,
) -> impl IntoView {
    let (icon, class) = status.icon_and_class();
    let detail = match endpoint {
        Some(url) => format!("{} ({})", status.describe(), url),
        None => status.describe().to_string(),
    };

    view! {
        <div class="health-item" title=status.describe()>
            <span class=class>{icon}</span>
            <span class="health-name">{label}</span>
            <span class="health-detail">{detail}</span>
        </div>
    }
}
