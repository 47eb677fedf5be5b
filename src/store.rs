use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::{
    entities::{actor, credit, movie},
    error::{AppError, AppResult},
    models::{
        ActorField, CreditField, Genre, NewActor, NewCredit, NewMovie, Role, validate_age,
        validate_name, validate_rating,
    },
};

/// Data-model operations over an explicit connection handle.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn movies(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn movie(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn movie_credits(
        &self,
        movie_id: i32,
    ) -> AppResult<Vec<(credit::Model, Option<actor::Model>)>> {
        Ok(credit::Entity::find()
            .filter(credit::Column::MovieId.eq(movie_id))
            .order_by_asc(credit::Column::Id)
            .find_also_related(actor::Entity)
            .all(&self.db)
            .await?)
    }

    pub async fn create_movie(&self, input: NewMovie) -> AppResult<movie::Model> {
        let genre = Genre::parse(&input.genre)?;
        let rating = validate_rating(input.rating)?;

        let model = movie::ActiveModel {
            image: Set(input.image),
            title: Set(input.title),
            genre: Set(Some(genre.as_label().to_string())),
            rating: Set(Some(rating)),
            description: Set(input.description),
            ..Default::default()
        };
        let movie = model.insert(&self.db).await?;
        debug!(movie_id = movie.id, "created movie");
        Ok(movie)
    }

    pub async fn actors(&self) -> AppResult<Vec<actor::Model>> {
        Ok(actor::Entity::find().order_by_asc(actor::Column::Id).all(&self.db).await?)
    }

    pub async fn actor(&self, id: i32) -> AppResult<Option<actor::Model>> {
        Ok(actor::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn actor_credits(
        &self,
        actor_id: i32,
    ) -> AppResult<Vec<(credit::Model, Option<movie::Model>)>> {
        Ok(credit::Entity::find()
            .filter(credit::Column::ActorId.eq(actor_id))
            .order_by_asc(credit::Column::Id)
            .find_also_related(movie::Entity)
            .all(&self.db)
            .await?)
    }

    pub async fn create_actor(&self, input: NewActor) -> AppResult<actor::Model> {
        let name = validate_name(input.name)?;
        let age = validate_age(input.age)?;

        let model =
            actor::ActiveModel { name: Set(name), age: Set(Some(age)), ..Default::default() };
        let actor = model.insert(&self.db).await?;
        debug!(actor_id = actor.id, "created actor");
        Ok(actor)
    }

    /// Applies `fields` in order, committing after each one. A failing field
    /// leaves the earlier ones persisted.
    pub async fn update_actor(
        &self,
        mut actor: actor::Model,
        fields: Vec<ActorField>,
    ) -> AppResult<actor::Model> {
        for field in fields {
            let mut model = actor.into_active_model();
            match field {
                ActorField::Name(name) => model.name = Set(validate_name(name)?),
                ActorField::Age(age) => model.age = Set(Some(validate_age(age)?)),
            }
            actor = model.update(&self.db).await?;
            debug!(actor_id = actor.id, "updated actor field");
        }
        Ok(actor)
    }

    pub async fn delete_actor(&self, id: i32) -> AppResult<bool> {
        let res = actor::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(actor_id = id, rows = res.rows_affected, "deleted actor");
        Ok(res.rows_affected > 0)
    }

    pub async fn credits(&self) -> AppResult<Vec<credit::Model>> {
        Ok(credit::Entity::find().order_by_asc(credit::Column::Id).all(&self.db).await?)
    }

    pub async fn credit(&self, id: i32) -> AppResult<Option<credit::Model>> {
        Ok(credit::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// The movie and actor a credit points at; `None` for a dangling side.
    pub async fn credit_parties(
        &self,
        credit: &credit::Model,
    ) -> AppResult<(Option<movie::Model>, Option<actor::Model>)> {
        let movie = self.movie(credit.movie_id).await?;
        let actor = self.actor(credit.actor_id).await?;
        Ok((movie, actor))
    }

    pub async fn create_credit(&self, input: NewCredit) -> AppResult<credit::Model> {
        let role = Role::parse(&input.role)?;
        self.ensure_movie(input.movie_id).await?;
        self.ensure_actor(input.actor_id).await?;

        let model = credit::ActiveModel {
            role: Set(role.as_label().to_string()),
            movie_id: Set(input.movie_id),
            actor_id: Set(input.actor_id),
            ..Default::default()
        };
        let credit = model.insert(&self.db).await?;
        debug!(
            credit_id = credit.id,
            movie_id = credit.movie_id,
            actor_id = credit.actor_id,
            "created credit"
        );
        Ok(credit)
    }

    /// Validates every field, then commits them together.
    pub async fn update_credit(
        &self,
        credit: credit::Model,
        fields: Vec<CreditField>,
    ) -> AppResult<credit::Model> {
        if fields.is_empty() {
            return Ok(credit);
        }

        let mut model = credit.into_active_model();
        for field in fields {
            match field {
                CreditField::Role(role) => {
                    model.role = Set(Role::parse(&role)?.as_label().to_string());
                },
                CreditField::MovieId(movie_id) => {
                    self.ensure_movie(movie_id).await?;
                    model.movie_id = Set(movie_id);
                },
                CreditField::ActorId(actor_id) => {
                    self.ensure_actor(actor_id).await?;
                    model.actor_id = Set(actor_id);
                },
            }
        }

        let credit = model.update(&self.db).await?;
        debug!(credit_id = credit.id, "updated credit");
        Ok(credit)
    }

    pub async fn delete_credit(&self, id: i32) -> AppResult<bool> {
        let res = credit::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(credit_id = id, rows = res.rows_affected, "deleted credit");
        Ok(res.rows_affected > 0)
    }

    async fn ensure_movie(&self, id: i32) -> AppResult<()> {
        match self.movie(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::Validation(format!("movie_id {id} does not reference a movie"))),
        }
    }

    async fn ensure_actor(&self, id: i32) -> AppResult<()> {
        match self.actor(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::Validation(format!("actor_id {id} does not reference an actor"))),
        }
    }
}
