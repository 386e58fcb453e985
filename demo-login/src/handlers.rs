use axum::response::Html;

use social_login_axum::SL_ROUTE_PREFIX;

pub(crate) async fn index() -> Html<String> {
    Html(format!(
        r#"<h1>demo-login</h1><p><a href="{}/login">Sign in with a social account</a></p>"#,
        SL_ROUTE_PREFIX.as_str()
    ))
}
