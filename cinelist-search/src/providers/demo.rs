//! Offline demo catalog for development mode.

use async_trait::async_trait;
use cinelist_core::{DetailRecord, MediaId, Poster, SummaryRecord};

use super::MetadataProvider;
use crate::errors::{DetailError, SearchError};
use crate::query::SearchQuery;

/// Demo provider serving a fixed catalog without network access.
///
/// Search matches titles case-insensitively by substring and answers misses
/// with the same message the live API uses.
#[derive(Debug, Default)]
pub struct DemoProvider;

struct DemoTitle {
    id: &'static str,
    title: &'static str,
    year: &'static str,
    media_type: &'static str,
    poster: &'static str,
    plot: &'static str,
    rating: &'static str,
    actors: &'static str,
}

const CATALOG: &[DemoTitle] = &[
    DemoTitle {
        id: "tt0133093",
        title: "The Matrix",
        year: "1999",
        media_type: "movie",
        poster: "https://m.media-amazon.com/images/M/MV5BNzQzOTk3OTAtNDQ0Zi00ZTVkLWI0MTEtMDllZjNkYzNjNTc4L2ltYWdlXkEyXkFqcGdeQXVyNjU0OTQ0OTY@._V1_SX300.jpg",
        plot: "When a beautiful stranger leads computer hacker Neo to a forbidding underworld, he discovers the shocking truth--the life he knows is the elaborate deception of an evil cyber-intelligence.",
        rating: "8.7",
        actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
    },
    DemoTitle {
        id: "tt0234215",
        title: "The Matrix Reloaded",
        year: "2003",
        media_type: "movie",
        poster: "N/A",
        plot: "Freedom fighters Neo, Trinity and Morpheus continue to lead the revolt against the Machine Army.",
        rating: "7.2",
        actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
    },
    DemoTitle {
        id: "tt0242653",
        title: "The Matrix Revolutions",
        year: "2003",
        media_type: "movie",
        poster: "N/A",
        plot: "The human city of Zion defends itself against the massive invasion of the machines as Neo fights to end the war at another front.",
        rating: "6.7",
        actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
    },
    DemoTitle {
        id: "tt1375666",
        title: "Inception",
        year: "2010",
        media_type: "movie",
        poster: "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_SX300.jpg",
        plot: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        rating: "8.8",
        actors: "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
    },
    DemoTitle {
        id: "tt0816692",
        title: "Interstellar",
        year: "2014",
        media_type: "movie",
        poster: "https://m.media-amazon.com/images/M/MV5BZjdkOTU3MDktN2IxOS00OGEyLWFmMjktY2FiMmZkNWIyODZiXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_SX300.jpg",
        plot: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        rating: "8.7",
        actors: "Matthew McConaughey, Anne Hathaway, Jessica Chastain",
    },
    DemoTitle {
        id: "tt0944947",
        title: "Game of Thrones",
        year: "2011–2019",
        media_type: "series",
        poster: "N/A",
        plot: "Nine noble families fight for control over the lands of Westeros, while an ancient enemy returns after being dormant for millennia.",
        rating: "9.2",
        actors: "Emilia Clarke, Peter Dinklage, Kit Harington",
    },
];

impl DemoProvider {
    /// Creates the offline demo provider.
    pub fn new() -> Self {
        Self
    }
}

impl DemoTitle {
    fn summary(&self) -> SummaryRecord {
        SummaryRecord {
            id: MediaId::new(self.id),
            title: self.title.to_string(),
            year: self.year.to_string(),
            media_type: self.media_type.to_string(),
            poster: Poster::from_api(self.poster),
        }
    }
}

#[async_trait]
impl MetadataProvider for DemoProvider {
    async fn search_titles(&self, query: &SearchQuery) -> Result<Vec<SummaryRecord>, SearchError> {
        let needle = query.as_str().to_lowercase();
        let matches: Vec<SummaryRecord> = CATALOG
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .map(DemoTitle::summary)
            .collect();

        if matches.is_empty() {
            return Err(SearchError::NotFound {
                message: "Movie not found!".to_string(),
            });
        }
        Ok(matches)
    }

    async fn lookup_title(&self, id: &MediaId) -> Result<DetailRecord, DetailError> {
        CATALOG
            .iter()
            .find(|entry| entry.id == id.as_str())
            .map(|entry| DetailRecord {
                id: id.clone(),
                plot: entry.plot.to_string(),
                rating: entry.rating.to_string(),
                actors: entry.actors.to_string(),
            })
            .ok_or(DetailError::NotFound)
    }
}
