use axum::response::Html;

use super::assets::STYLESHEET;

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Wrap page content in the shared document shell.
///
/// `title` is escaped here; `body` must already be safe HTML.
pub fn layout(title: &str, body: &str, script: Option<&str>) -> Html<String> {
    let script = script
        .map(|js| format!("<script>{js}</script>"))
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLESHEET}</style>
</head>
<body>
<header><a href="/">Entries board</a></header>
<main>
{body}
</main>
{script}
</body>
</html>"#,
        title = escape(title),
    ))
}
