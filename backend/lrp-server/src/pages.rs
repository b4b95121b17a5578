//! Static operator pages.

use lrp_core::PendingAction;

use std::sync::LazyLock;

use axum::response::Html;

const PORTAL_TEMPLATE: &str = include_str!("../assets/portal.html");
const DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");

/// Marker in the portal template replaced by the action `<option>` list.
const ACTION_OPTIONS_MARKER: &str = "{{ACTION_OPTIONS}}";

static PORTAL_HTML: LazyLock<String> = LazyLock::new(render_portal);

/// GET /portal - Manual submission form
pub async fn portal() -> Html<&'static str> {
    Html(PORTAL_HTML.as_str())
}

/// GET /dashboard - Table of recent requisitions, filled from `/requisitions`
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub fn render_portal() -> String {
    let options = PendingAction::ALL
        .iter()
        .map(|action| format!(r#"    <option value="{0}">{0}</option>"#, action.as_str()))
        .collect::<Vec<_>>()
        .join("\n");

    PORTAL_TEMPLATE.replace(ACTION_OPTIONS_MARKER, &options)
}
