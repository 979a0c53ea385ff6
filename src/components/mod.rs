pub mod results_panel;
pub mod sidebar;
pub mod status_badge;
pub mod url_form;
