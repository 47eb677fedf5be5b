//! JSON shapes returned by the resource handlers.
//!
//! Each relationship is embedded from one direction only and nested records
//! are always summaries, so a Movie/Actor/Credit graph serializes to a finite
//! tree no matter how densely it is linked.

use serde::Serialize;

use crate::entities::{actor, credit, movie};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieSummary {
    pub id: i32,
    pub image: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<i32>,
    pub description: Option<String>,
}

impl From<movie::Model> for MovieSummary {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            image: m.image,
            title: m.title,
            genre: m.genre,
            rating: m.rating,
            description: m.description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActorSummary {
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
}

impl From<actor::Model> for ActorSummary {
    fn from(a: actor::Model) -> Self {
        Self { id: a.id, name: a.name, age: a.age }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreditSummary {
    pub id: i32,
    pub role: String,
    pub movie_id: i32,
    pub actor_id: i32,
}

impl From<credit::Model> for CreditSummary {
    fn from(c: credit::Model) -> Self {
        Self { id: c.id, role: c.role, movie_id: c.movie_id, actor_id: c.actor_id }
    }
}

/// A credit seen from its movie: carries the actor, not the movie again.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieCredit {
    #[serde(flatten)]
    pub credit: CreditSummary,
    pub actors: Option<ActorSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub credits: Vec<MovieCredit>,
}

impl MovieDetail {
    pub fn new(movie: movie::Model, credits: Vec<(credit::Model, Option<actor::Model>)>) -> Self {
        Self {
            movie: movie.into(),
            credits: credits
                .into_iter()
                .map(|(c, a)| MovieCredit { credit: c.into(), actors: a.map(Into::into) })
                .collect(),
        }
    }
}

/// A credit seen from its actor: carries the movie, not the actor again.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActorCredit {
    #[serde(flatten)]
    pub credit: CreditSummary,
    pub movies: Option<MovieSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActorDetail {
    #[serde(flatten)]
    pub actor: ActorSummary,
    pub credits: Vec<ActorCredit>,
}

impl ActorDetail {
    pub fn new(actor: actor::Model, credits: Vec<(credit::Model, Option<movie::Model>)>) -> Self {
        Self {
            actor: actor.into(),
            credits: credits
                .into_iter()
                .map(|(c, m)| ActorCredit { credit: c.into(), movies: m.map(Into::into) })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreditDetail {
    #[serde(flatten)]
    pub credit: CreditSummary,
    pub movies: Option<MovieSummary>,
    pub actors: Option<ActorSummary>,
}

impl CreditDetail {
    pub fn new(
        credit: credit::Model,
        movie: Option<movie::Model>,
        actor: Option<actor::Model>,
    ) -> Self {
        Self { credit: credit.into(), movies: movie.map(Into::into), actors: actor.map(Into::into) }
    }
}
