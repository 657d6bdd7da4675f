//! Layout components - page shell, navigation, headers, cards

use axum::response::Html;

use super::text::escape_html;

/// Renders the main navigation bar.
///
/// Brand link plus Home and Search links. Highlights the active page.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "text-sky-600 font-semibold"
        } else {
            "text-gray-500 hover:text-sky-600"
        };

        format!(r#"<a href="{href}" class="text-sm transition {active_class}">{label}</a>"#)
    };

    format!(
        r#"<header class="bg-white/60 backdrop-blur sticky top-0 z-50 border-b">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="text-2xl font-semibold text-sky-700">Movie Search</a>
                <nav class="flex items-center gap-4">
                    {}
                    {}
                </nav>
            </div>
        </header>"#,
        nav_item("/", "Home", "home"),
        nav_item("/search", "Search", "search")
    )
}

/// Renders a page header with title and optional right-aligned caption.
///
/// Both strings are escaped.
pub fn page_header(title: &str, caption: Option<&str>) -> String {
    let caption_html = caption
        .map(|c| format!(r#"<p class="text-gray-500">{}</p>"#, escape_html(c)))
        .unwrap_or_default();

    format!(
        r#"<div class="flex items-center justify-between mb-6">
            <h1 class="text-2xl font-semibold">{}</h1>
            {caption_html}
        </div>"#,
        escape_html(title)
    )
}

/// Renders a card container around already-rendered HTML.
pub fn card(content: &str) -> String {
    format!(
        r#"<div class="bg-white border border-gray-200 rounded-xl shadow-sm p-6">
            {content}
        </div>"#
    )
}

/// Renders a card holding a single plain-text message.
pub fn notice(message: &str) -> String {
    card(&format!(
        r#"<p class="text-gray-600">{}</p>"#,
        escape_html(message)
    ))
}

/// Common page template wrapper.
///
/// Generates a complete HTML document with the shared header, Tailwind
/// styling and the page content in the main column.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="映画検索アプリケーション">
    <title>{} - 映画検索</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .card-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; }}
    </style>
</head>
<body class="antialiased bg-gray-50 text-gray-900 min-h-screen">
    {}
    <main class="max-w-6xl mx-auto px-6 py-10">
        {content}
    </main>
</body>
</html>"#,
        escape_html(title),
        nav_bar(active_nav)
    ))
}
