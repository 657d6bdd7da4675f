//! Home page - search form

use axum::response::Html;

use crate::components::layout::render_page;

/// Renders the home page with the title search form.
pub async fn home_page() -> Html<String> {
    let content = r#"<div class="min-h-[60vh] flex items-center">
            <div class="w-full bg-white border border-gray-200 rounded-xl shadow-sm p-8">
                <div class="flex flex-col md:flex-row items-center gap-6">
                    <div class="flex-1">
                        <h1 class="text-3xl font-semibold mb-2">映画検索</h1>
                        <p class="text-gray-500">TMDBデータベースから映画を検索できます。</p>
                    </div>
                    <div class="flex-1">
                        <form action="/search" method="GET" class="flex gap-3">
                            <input type="text" name="query" placeholder="映画のタイトルを入力..." required
                                   class="flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-sky-500">
                            <button type="submit" class="bg-gray-700 px-4 py-2 text-white cursor-pointer rounded-lg hover:bg-gray-900">検索</button>
                        </form>
                    </div>
                </div>
            </div>
        </div>"#;

    render_page("ホーム", "home", content)
}
