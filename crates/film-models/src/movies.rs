use film_core::AppError;
use film_core::serde::{deserialize_lenient_year, deserialize_trimmed_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::RecordId;

/// A stored movie. `director` is free text, not a reference to a director record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: RecordId,
    pub title: String,
    pub director: String,
    pub year: i32,
}

/// A validated movie ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub year: i32,
}

/// Request body for creating or replacing a movie.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct MovieInput {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(
        required(message = "title, director, year wajib diisi"),
        length(min = 1, message = "title, director, year wajib diisi")
    )]
    #[schema(value_type = String, example = "Parasite")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(
        required(message = "title, director, year wajib diisi"),
        length(min = 1, message = "title, director, year wajib diisi")
    )]
    #[schema(value_type = String, example = "Bong Joon-ho")]
    pub director: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_year")]
    #[validate(
        required(message = "title, director, year wajib diisi"),
        range(min = 1, message = "title, director, year wajib diisi")
    )]
    #[schema(value_type = i32, example = 2019)]
    pub year: Option<i32>,
}

impl TryFrom<MovieInput> for NewMovie {
    type Error = AppError;

    fn try_from(input: MovieInput) -> Result<Self, Self::Error> {
        input
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        match (input.title, input.director, input.year) {
            (Some(title), Some(director), Some(year)) => Ok(NewMovie {
                title,
                director,
                year,
            }),
            _ => Err(AppError::validation("title, director, year wajib diisi")),
        }
    }
}

impl NewMovie {
    pub fn into_movie(self, id: RecordId) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            year: self.year,
        }
    }
}
