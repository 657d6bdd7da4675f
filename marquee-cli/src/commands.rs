//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use marquee_core::{MarqueeConfig, RuntimeMode};
use marquee_search::{Movie, MovieSearchService};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (overrides MARQUEE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides MARQUEE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// production or development (overrides MARQUEE_MODE)
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
    /// Search movies by title and print the results
    Search {
        /// Title to search for
        query: String,
        /// production or development (overrides MARQUEE_MODE)
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
    /// Print details for one movie
    Movie {
        /// Movie database identifier
        id: u64,
        /// production or development (overrides MARQUEE_MODE)
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the configuration, movie database or server error of the failing command
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Server { host, port, mode } => start_server(host, port, mode).await,
        Commands::Search { query, mode } => search(&query, mode).await,
        Commands::Movie { id, mode } => show_movie(id, mode).await,
    }
}

fn load_config(mode: Option<RuntimeMode>) -> anyhow::Result<MarqueeConfig> {
    let mut config = MarqueeConfig::from_env().context("failed to read configuration")?;
    if let Some(mode) = mode {
        config.mode = mode;
    }
    Ok(config)
}

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    mode: Option<RuntimeMode>,
) -> anyhow::Result<()> {
    let mut config = load_config(mode)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    if config.mode.is_production() && config.tmdb.api_key.is_none() {
        tracing::warn!("TMDB_API_KEY is not set; every search will fail until it is configured");
    }

    let service = MovieSearchService::from_config(&config)?;
    marquee_web::run_server(&config.server, service).await?;
    Ok(())
}

async fn search(query: &str, mode: Option<RuntimeMode>) -> anyhow::Result<()> {
    let config = load_config(mode)?;
    let service = MovieSearchService::from_config(&config)?;

    let movies = service.search_movies(query).await?;

    println!("検索結果: {query} ({} 件)", movies.len());
    println!("{:-<60}", "");
    if movies.is_empty() {
        println!("検索結果が見つかりませんでした。");
    }
    for movie in &movies {
        println!("{}", format_movie_line(movie));
    }

    Ok(())
}

async fn show_movie(id: u64, mode: Option<RuntimeMode>) -> anyhow::Result<()> {
    let config = load_config(mode)?;
    let service = MovieSearchService::from_config(&config)?;

    let movie = service.movie_details(id).await?;
    println!("{}", format_movie_detail(&movie));

    Ok(())
}

/// One result line: `id  title (release date)  rating`.
fn format_movie_line(movie: &Movie) -> String {
    format!(
        "{:>8}  {} ({})  {}",
        movie.id,
        movie.title,
        movie.release_date,
        movie.formatted_rating()
    )
}

fn format_movie_detail(movie: &Movie) -> String {
    let poster = movie.poster_url().unwrap_or_else(|| "-".to_string());
    format!(
        "{}\n公開日：{}\n評価： {}/ 10\nポスター：{}\n\nあらすじ\n{}",
        movie.title,
        movie.release_date,
        movie.formatted_rating(),
        poster,
        movie.overview
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
            poster_path: None,
            overview: "...".to_string(),
            vote_average: 8.4,
        }
    }

    #[test]
    fn test_format_movie_line() {
        assert_eq!(
            format_movie_line(&inception()),
            "   27205  インセプション (2010-07-16)  8.4"
        );
    }

    #[test]
    fn test_format_movie_detail() {
        let detail = format_movie_detail(&inception());

        assert!(detail.starts_with("インセプション\n"));
        assert!(detail.contains("評価： 8.4/ 10"));
        assert!(detail.contains("ポスター：-"));
    }
}
