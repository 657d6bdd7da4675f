//! Demo movie catalogue for offline development.

use async_trait::async_trait;

use super::MovieDatabase;
use crate::errors::{DETAILS_OPERATION, MovieSearchError};
use crate::types::Movie;

/// Demo provider for development mode.
///
/// Serves a small fixed catalogue without network access or credentials.
/// Titles match case-insensitively against both the localized title and
/// the original English title.
#[derive(Debug)]
pub struct DemoProvider {
    catalogue: Vec<DemoEntry>,
}

#[derive(Debug)]
struct DemoEntry {
    original_title: &'static str,
    movie: Movie,
}

impl DemoProvider {
    /// Creates a demo provider with the built-in catalogue.
    pub fn new() -> Self {
        Self {
            catalogue: demo_catalogue(),
        }
    }
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieDatabase for DemoProvider {
    async fn search_by_title(&self, query: &str) -> Result<Vec<Movie>, MovieSearchError> {
        if query.is_empty() {
            return Err(MovieSearchError::EmptyQuery);
        }
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .catalogue
            .iter()
            .filter(|entry| {
                entry.original_title.to_lowercase().contains(&needle)
                    || entry.movie.title.to_lowercase().contains(&needle)
            })
            .map(|entry| entry.movie.clone())
            .collect())
    }

    async fn movie_details(&self, id: u64) -> Result<Movie, MovieSearchError> {
        self.catalogue
            .iter()
            .find(|entry| entry.movie.id == id)
            .map(|entry| entry.movie.clone())
            .ok_or(MovieSearchError::RequestFailed {
                operation: DETAILS_OPERATION,
                status: 404,
            })
    }
}

fn entry(
    original_title: &'static str,
    id: u64,
    title: &str,
    release_date: &str,
    poster_path: Option<&str>,
    vote_average: f64,
    overview: &str,
) -> DemoEntry {
    DemoEntry {
        original_title,
        movie: Movie {
            id,
            title: title.to_string(),
            release_date: release_date.to_string(),
            poster_path: poster_path.map(str::to_string),
            overview: overview.to_string(),
            vote_average,
        },
    }
}

fn demo_catalogue() -> Vec<DemoEntry> {
    vec![
        entry(
            "Inception",
            27205,
            "インセプション",
            "2010-07-16",
            Some("/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg"),
            8.4,
            "他人の夢に潜入してアイデアを盗む産業スパイが、最後の仕事として「インセプション」に挑む。",
        ),
        entry(
            "Interstellar",
            157336,
            "インターステラー",
            "2014-11-05",
            Some("/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg"),
            8.4,
            "滅びゆく地球を救うため、元パイロットのクーパーは未知の惑星を目指す。",
        ),
        entry(
            "Spirited Away",
            129,
            "千と千尋の神隠し",
            "2001-07-20",
            Some("/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg"),
            8.5,
            "不思議の町に迷い込んだ少女・千尋は、両親を救うため湯屋で働き始める。",
        ),
        entry(
            "The Dark Knight",
            155,
            "ダークナイト",
            "2008-07-16",
            None,
            8.5,
            "ゴッサム・シティに現れた謎の犯罪者ジョーカーに、バットマンが立ち向かう。",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_matches_original_and_localized_titles() {
        let demo = DemoProvider::new();

        let by_original = demo.search_by_title("inception").await.unwrap();
        assert_eq!(by_original.len(), 1);
        assert_eq!(by_original[0].id, 27205);

        let by_localized = demo.search_by_title("ダーク").await.unwrap();
        assert_eq!(by_localized.len(), 1);
        assert_eq!(by_localized[0].title, "ダークナイト");
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let demo = DemoProvider::new();
        let results = demo.search_by_title("zzz-no-such-film").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_reports_not_found() {
        let demo = DemoProvider::new();

        let movie = demo.movie_details(129).await.unwrap();
        assert_eq!(movie.title, "千と千尋の神隠し");

        let missing = demo.movie_details(1).await;
        assert!(matches!(
            missing,
            Err(MovieSearchError::RequestFailed { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_query_rules_match_the_real_client() {
        let demo = DemoProvider::new();

        assert!(matches!(
            demo.search_by_title("").await,
            Err(MovieSearchError::EmptyQuery)
        ));
        assert!(demo.search_by_title("\u{3000}").await.unwrap().is_empty());
        assert_eq!(demo.search_by_title(" Inception ").await.unwrap().len(), 1);
    }

    #[test]
    fn test_posters_are_tmdb_image_paths() {
        for entry in demo_catalogue() {
            if let Some(path) = &entry.movie.poster_path {
                assert!(path.starts_with('/'));
                assert!(path.ends_with(".jpg"));
                assert_eq!(path.matches('/').count(), 1, "nested path {path}");
            }
        }
    }
}
