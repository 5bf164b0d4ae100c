//! Sample catalogue data.
//!
//! Seeding only writes into empty collections, so it can run on every start.

use film_models::{NewDirector, NewMovie};
use tracing::instrument;

use crate::gateway::{Gateway, StoreError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub movies: usize,
    pub directors: usize,
}

pub fn sample_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            title: "Parasite".to_string(),
            director: "Bong Joon-ho".to_string(),
            year: 2019,
        },
        NewMovie {
            title: "The Dark Knight".to_string(),
            director: "Christopher Nolan".to_string(),
            year: 2008,
        },
    ]
}

pub fn sample_directors() -> Vec<NewDirector> {
    vec![
        NewDirector {
            name: "Tika".to_string(),
            birth_year: 2006,
        },
        NewDirector {
            name: "Royyan".to_string(),
            birth_year: 2004,
        },
    ]
}

#[instrument(skip(gateway))]
pub async fn seed_samples(gateway: &Gateway) -> Result<SeedReport, StoreError> {
    let mut report = SeedReport::default();

    if gateway.movies.find_all().await?.is_empty() {
        for movie in sample_movies() {
            gateway.movies.insert(movie).await?;
            report.movies += 1;
        }
    }

    if gateway.directors.find_all().await?.is_empty() {
        for director in sample_directors() {
            gateway.directors.insert(director).await?;
            report.directors += 1;
        }
    }

    Ok(report)
}
