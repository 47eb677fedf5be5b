use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    Thriller,
    ScienceFiction,
    Fantasy,
    Mystery,
    Adventure,
    Crime,
    Family,
    Animation,
    Documentary,
    War,
}

impl Genre {
    pub const ALL: [Genre; 15] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
        Genre::Thriller,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Adventure,
        Genre::Crime,
        Genre::Family,
        Genre::Animation,
        Genre::Documentary,
        Genre::War,
    ];

    pub fn as_label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Family => "Family",
            Genre::Animation => "Animation",
            Genre::Documentary => "Documentary",
            Genre::War => "War",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_label() == label)
    }

    pub fn parse(label: &str) -> AppResult<Self> {
        Self::from_label(label)
            .ok_or_else(|| AppError::Validation(format!("not a valid genre type: {label:?}")))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Performer,
    Director,
    /// Stored and accepted with this exact spelling.
    Producor,
    Playwright,
    LightingDesign,
    SoundDesign,
    SetDesign,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Performer,
        Role::Director,
        Role::Producor,
        Role::Playwright,
        Role::LightingDesign,
        Role::SoundDesign,
        Role::SetDesign,
    ];

    pub fn as_label(self) -> &'static str {
        match self {
            Role::Performer => "Performer",
            Role::Director => "Director",
            Role::Producor => "Producor",
            Role::Playwright => "Playwright",
            Role::LightingDesign => "Lighting Design",
            Role::SoundDesign => "Sound Design",
            Role::SetDesign => "Set Design",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_label() == label)
    }

    pub fn parse(label: &str) -> AppResult<Self> {
        Self::from_label(label)
            .ok_or_else(|| AppError::Validation(format!("not a valid role type: {label:?}")))
    }
}

pub fn validate_rating(rating: i32) -> AppResult<i32> {
    if (1..=10).contains(&rating) {
        Ok(rating)
    } else {
        Err(AppError::Validation(format!("rating must be between 1 and 10, got {rating}")))
    }
}

pub fn validate_age(age: i32) -> AppResult<i32> {
    if age > 10 {
        Ok(age)
    } else {
        Err(AppError::Validation(format!("age must be greater than 10, got {age}")))
    }
}

pub fn validate_name(name: String) -> AppResult<String> {
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    Ok(name)
}

/// `image`, `title` and `description` may be `null` but must be present.
#[derive(Debug, Deserialize)]
pub struct NewMovie {
    #[serde(deserialize_with = "nullable")]
    pub image: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: Option<String>,
    pub genre: String,
    pub rating: i32,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
}

// A field using `deserialize_with` gets no implicit `None` when its key is missing.
fn nullable<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Option::deserialize(d)
}

#[derive(Debug, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Deserialize)]
pub struct NewCredit {
    pub actor_id: i32,
    pub movie_id: i32,
    pub role: String,
}

/// One assignable Actor column, as named in a PATCH body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActorField {
    Name(String),
    Age(i32),
}

impl ActorField {
    pub fn parse(key: &str, value: Value) -> AppResult<Self> {
        match key {
            "name" => Ok(ActorField::Name(from_value(key, value)?)),
            "age" => Ok(ActorField::Age(from_value(key, value)?)),
            other => Err(AppError::Validation(format!("actor has no updatable field {other:?}"))),
        }
    }
}

/// One assignable Credit column, as named in a PATCH body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CreditField {
    Role(String),
    MovieId(i32),
    ActorId(i32),
}

impl CreditField {
    pub fn parse(key: &str, value: Value) -> AppResult<Self> {
        match key {
            "role" => Ok(CreditField::Role(from_value(key, value)?)),
            "movie_id" => Ok(CreditField::MovieId(from_value(key, value)?)),
            "actor_id" => Ok(CreditField::ActorId(from_value(key, value)?)),
            other => Err(AppError::Validation(format!("credit has no updatable field {other:?}"))),
        }
    }
}

/// Parses every entry of a PATCH body, keeping the body's key order.
pub fn parse_fields<F>(
    body: Map<String, Value>,
    parse: impl Fn(&str, Value) -> AppResult<F>,
) -> AppResult<Vec<F>> {
    body.into_iter().map(|(key, value)| parse(&key, value)).collect()
}

fn from_value<T: serde::de::DeserializeOwned>(key: &str, value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| AppError::Validation(format!("{key}: {e}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn genre_labels_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_label(genre.as_label()), Some(genre));
        }
        assert_eq!(Genre::from_label("Science Fiction"), Some(Genre::ScienceFiction));
        assert!(Genre::parse("Western").is_err());
        assert!(Genre::parse("action").is_err());
    }

    #[test]
    fn role_keeps_literal_producor() {
        assert_eq!(Role::parse("Producor").unwrap(), Role::Producor);
        assert!(Role::parse("Producer").is_err());
        assert_eq!(Role::parse("Lighting Design").unwrap(), Role::LightingDesign);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_rating(0).is_err());
        assert_eq!(validate_rating(1).unwrap(), 1);
        assert_eq!(validate_rating(10).unwrap(), 10);
        assert!(validate_rating(11).is_err());
    }

    #[test]
    fn age_must_exceed_ten() {
        assert!(validate_age(10).is_err());
        assert!(validate_age(-3).is_err());
        assert_eq!(validate_age(11).unwrap(), 11);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_name(String::new()).is_err());
        assert_eq!(validate_name("Jane".to_string()).unwrap(), "Jane");
    }

    #[test]
    fn new_movie_accepts_null_text_but_requires_the_keys() {
        let movie: NewMovie = serde_json::from_value(json!({
            "image": null,
            "title": "T",
            "genre": "Drama",
            "rating": 3,
            "description": null
        }))
        .unwrap();
        assert_eq!(movie.image, None);
        assert_eq!(movie.title.as_deref(), Some("T"));

        let missing = serde_json::from_value::<NewMovie>(json!({
            "title": "T",
            "genre": "Drama",
            "rating": 3,
            "description": "d"
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn patch_fields_keep_body_order() {
        let body = json!({ "age": 40, "name": "Jane" });
        let Value::Object(map) = body else { unreachable!() };
        let fields = parse_fields(map, ActorField::parse).unwrap();
        assert_eq!(fields, vec![ActorField::Age(40), ActorField::Name("Jane".to_string())]);
    }

    #[test]
    fn patch_rejects_unknown_and_mistyped_keys() {
        assert!(ActorField::parse("id", json!(3)).is_err());
        assert!(ActorField::parse("age", json!("forty")).is_err());
        assert!(CreditField::parse("movies", json!([])).is_err());
        assert_eq!(CreditField::parse("movie_id", json!(2)).unwrap(), CreditField::MovieId(2));
    }
}
