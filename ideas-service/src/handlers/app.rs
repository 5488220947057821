use askama::Template;
use axum::response::IntoResponse;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub endpoint: &'static str,
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {
        endpoint: "/api/generate",
    }
}
