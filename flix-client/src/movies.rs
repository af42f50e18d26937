use crate::http::MovieflixClient;
use crate::models::NowPlayingPage;
use flix_core::ApiError;

impl MovieflixClient {
    /// Now-playing listing, optionally filtered by genre name and language
    /// code (`GET /movies/now-playing`).
    pub async fn now_playing(
        &self,
        page: u32,
        genre: Option<&str>,
        language: Option<&str>,
    ) -> Result<NowPlayingPage, ApiError> {
        let page = page.to_string();
        let mut query: Vec<(&str, &str)> = vec![("page", &page)];
        if let Some(genre) = genre {
            query.push(("genre", genre));
        }
        if let Some(language) = language {
            query.push(("language", language));
        }
        self.get_json("/movies/now-playing", &query).await
    }

    /// Genre names backing the listing filter (`GET /movies/genres`).
    pub async fn movie_genres(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/movies/genres", &[]).await
    }
}
