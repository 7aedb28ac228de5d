use axum::response::Html;

/// Web界面首页
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
