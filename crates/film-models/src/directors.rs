use film_core::AppError;
use film_core::serde::{deserialize_lenient_year, deserialize_trimmed_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub id: RecordId,
    pub name: String,
    pub birth_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDirector {
    pub name: String,
    pub birth_year: i32,
}

/// Request body for creating or replacing a director.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectorInput {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(
        required(message = "name dan birthYear wajib diisi"),
        length(min = 1, message = "name dan birthYear wajib diisi")
    )]
    #[schema(value_type = String, example = "Bong Joon-ho")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_year")]
    #[validate(
        required(message = "name dan birthYear wajib diisi"),
        range(min = 1, message = "name dan birthYear wajib diisi")
    )]
    #[schema(value_type = i32, example = 1969)]
    pub birth_year: Option<i32>,
}

impl TryFrom<DirectorInput> for NewDirector {
    type Error = AppError;

    fn try_from(input: DirectorInput) -> Result<Self, Self::Error> {
        input
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        match (input.name, input.birth_year) {
            (Some(name), Some(birth_year)) => Ok(NewDirector { name, birth_year }),
            _ => Err(AppError::validation("name dan birthYear wajib diisi")),
        }
    }
}

impl NewDirector {
    pub fn into_director(self, id: RecordId) -> Director {
        Director {
            id,
            name: self.name,
            birth_year: self.birth_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_year_uses_camel_case() {
        let input: DirectorInput =
            serde_json::from_str(r#"{"name":"Tika","birthYear":"2006"}"#).unwrap();
        let draft = NewDirector::try_from(input).unwrap();
        assert_eq!(draft.birth_year, 2006);

        let json = serde_json::to_value(draft.into_director(RecordId::Int(1))).unwrap();
        assert_eq!(json["birthYear"], 2006);
        assert!(json.get("birth_year").is_none());
    }

    #[test]
    fn test_missing_birth_year_rejected() {
        let input: DirectorInput = serde_json::from_str(r#"{"name":"Royyan"}"#).unwrap();
        let err = NewDirector::try_from(input).unwrap_err();
        assert_eq!(err.error.to_string(), "name dan birthYear wajib diisi");
    }
}
