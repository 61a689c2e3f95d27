use axum::response::Html;

/// The operator dashboard: a single embedded page whose controls call the
/// JSON endpoints the same way the widget callbacks fired in the original
/// tool.
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../assets/dashboard.html"))
}
