//! Movie components - posters, result cards, detail view

use marquee_search::Movie;

use super::text::escape_html;

/// Renders a poster image, or a neutral placeholder when there is no poster.
pub fn poster(movie: &Movie, classes: &str) -> String {
    match movie.poster_url() {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" loading="lazy" class="{classes}">"#,
            escape_html(&url),
            escape_html(&movie.title)
        ),
        None => format!(
            r#"<div class="{classes} bg-gray-200 flex items-center justify-center text-gray-400 text-sm">No Image</div>"#
        ),
    }
}

/// Renders one search result card linking to the movie detail page.
pub fn movie_card(movie: &Movie) -> String {
    format!(
        r#"<a href="/movie/{id}" class="movie-card block bg-white border border-gray-200 rounded-xl overflow-hidden hover:shadow-2xl transition">
            <div class="w-full h-[300px] relative">
                {poster}
            </div>
            <div class="p-4">
                <h2 class="font-semibold text-lg truncate">{title}</h2>
                <p class="text-gray-500 text-sm">{release_date}</p>
            </div>
        </a>"#,
        id = movie.id,
        poster = poster(movie, "object-cover w-full h-full"),
        title = escape_html(&movie.title),
        release_date = escape_html(&movie.release_date),
    )
}

/// Renders result cards in a responsive grid, keeping the given order.
pub fn movie_grid(movies: &[Movie]) -> String {
    let cards: Vec<String> = movies.iter().map(movie_card).collect();
    format!(r#"<div class="card-grid">{}</div>"#, cards.join(""))
}

/// Renders the full detail view for one movie.
pub fn movie_detail(movie: &Movie) -> String {
    format!(
        r#"<div class="bg-white border border-gray-200 rounded-xl shadow-sm p-6">
            <div class="flex flex-col md:flex-row gap-8">
                <div class="w-full md:w-1/3">
                    {poster}
                </div>
                <div class="w-full md:w-2/3">
                    <h1 class="text-3xl font-semibold mb-2">{title}</h1>
                    <p class="text-gray-500 mb-2">公開日：{release_date}</p>
                    <p class="mb-4">評価： {rating}/ 10</p>
                    <h2 class="text-2xl font-bold mb-2">あらすじ</h2>
                    <p class="text-sm leading-relaxed">{overview}</p>
                </div>
            </div>
        </div>"#,
        poster = poster(movie, "rounded-lg w-full"),
        title = escape_html(&movie.title),
        release_date = escape_html(&movie.release_date),
        rating = movie.formatted_rating(),
        overview = escape_html(&movie.overview),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Movie {
        Movie {
            id: 27205,
            title: "インセプション".to_string(),
            release_date: "2010-07-16".to_string(),
            poster_path: Some("/x.jpg".to_string()),
            overview: "夢の中の夢".to_string(),
            vote_average: 8.4,
        }
    }

    #[test]
    fn test_movie_card_links_to_detail_page() {
        let html = movie_card(&inception());

        assert!(html.contains(r#"href="/movie/27205""#));
        assert!(html.contains("インセプション"));
        assert!(html.contains("2010-07-16"));
        assert!(html.contains("https://image.tmdb.org/t/p/w500/x.jpg"));
    }

    #[test]
    fn test_poster_placeholder_without_path() {
        let movie = Movie {
            poster_path: None,
            ..inception()
        };

        let html = poster(&movie, "w-full");
        assert!(!html.contains("<img"));
        assert!(html.contains("No Image"));
    }

    #[test]
    fn test_movie_detail_formats_rating() {
        let html = movie_detail(&inception());

        assert!(html.contains("評価： 8.4/ 10"));
        assert!(html.contains("公開日：2010-07-16"));
        assert!(html.contains("あらすじ"));
    }

    #[test]
    fn test_movie_grid_keeps_order() {
        let second = Movie {
            id: 155,
            title: "ダークナイト".to_string(),
            ..inception()
        };
        let html = movie_grid(&[second, inception()]);

        let dark_knight = html.find("/movie/155").unwrap();
        let inception = html.find("/movie/27205").unwrap();
        assert!(dark_knight < inception);
    }

    #[test]
    fn test_api_text_is_escaped() {
        let movie = Movie {
            title: "<script>x</script>".to_string(),
            ..inception()
        };

        let html = movie_detail(&movie);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
