use std::{marker::PhantomData, sync::Arc};

use axum::{
    Json, Router,
    extract::{FromRequest, FromRequestParts, Path, State},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Map, Value};

use crate::{
    AppState,
    entities::{actor, credit},
    error::{AppError, AppResult},
    models::{ActorField, CreditField, NewActor, NewCredit, NewMovie, parse_fields},
    store::Store,
    views::{ActorDetail, ActorSummary, CreditDetail, CreditSummary, MovieDetail, MovieSummary},
};

/// JSON body whose rejections (bad syntax, wrong types, missing keys) are
/// reported as validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);

pub trait Resource {
    const NAME: &'static str;
}

pub struct Actors;

impl Resource for Actors {
    const NAME: &'static str = "Actor";
}

pub struct Credits;

impl Resource for Credits {
    const NAME: &'static str = "Credit";
}

/// Integer id path segment; anything else answers the resource's 404.
pub struct Id<R>(pub i32, PhantomData<R>);

impl<S, R> FromRequestParts<S> for Id<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound(R::NAME))?;
        Ok(Self(id, PhantomData))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/actors", get(list_actors).post(create_actor))
        .route("/actors/{id}", get(get_actor).patch(update_actor).delete(delete_actor))
        .route("/movies", get(list_movies).post(create_movie))
        .route("/credits", get(list_credits).post(create_credit))
        .route("/credits/{id}", get(get_credit).patch(update_credit).delete(delete_credit))
        .with_state(state)
}

pub async fn list_actors(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<ActorSummary>>> {
    let actors = state.store.actors().await?;
    Ok(Json(actors.into_iter().map(Into::into).collect()))
}

pub async fn create_actor(
    State(state): State<Arc<AppState>>,
    Payload(input): Payload<NewActor>,
) -> AppResult<(StatusCode, Json<ActorDetail>)> {
    let actor = state.store.create_actor(input).await?;
    Ok((StatusCode::CREATED, Json(ActorDetail::new(actor, Vec::new()))))
}

pub async fn get_actor(
    State(state): State<Arc<AppState>>,
    Id(id, _): Id<Actors>,
) -> AppResult<Json<ActorDetail>> {
    let actor = state.store.actor(id).await?.ok_or(AppError::NotFound("Actor"))?;
    Ok(Json(actor_detail(&state.store, actor).await?))
}

pub async fn update_actor(
    State(state): State<Arc<AppState>>,
    Id(id, _): Id<Actors>,
    payload: Result<Payload<Map<String, Value>>, AppError>,
) -> AppResult<(StatusCode, Json<ActorDetail>)> {
    let actor = state.store.actor(id).await?.ok_or(AppError::NotFound("Actor"))?;
    let Payload(body) = payload?;
    let mut fields = parse_fields(body, ActorField::parse)?;
    // Only the first field of the body is applied; the rest are checked but dropped.
    fields.truncate(1);

    let actor = state.store.update_actor(actor, fields).await?;
    Ok((StatusCode::ACCEPTED, Json(actor_detail(&state.store, actor).await?)))
}

pub async fn delete_actor(
    State(state): State<Arc<AppState>>,
    Id(id, _): Id<Actors>,
) -> AppResult<StatusCode> {
    if state.store.delete_actor(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Actor"))
    }
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MovieSummary>>> {
    let movies = state.store.movies().await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Payload<NewMovie>, AppError>,
) -> Response {
    let result = async {
        let Payload(input) = payload?;
        let movie = state.store.create_movie(input).await?;
        let credits = state.store.movie_credits(movie.id).await?;
        Ok::<_, AppError>(MovieDetail::new(movie, credits))
    }
    .await;

    match result {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(err) => err.respond(state.config.legacy_status_codes),
    }
}

pub async fn list_credits(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<CreditSummary>>> {
    let credits = state.store.credits().await?;
    Ok(Json(credits.into_iter().map(Into::into).collect()))
}

pub async fn create_credit(
    State(state): State<Arc<AppState>>,
    payload: Result<Payload<NewCredit>, AppError>,
) -> Response {
    let result = async {
        let Payload(input) = payload?;
        let credit = state.store.create_credit(input).await?;
        credit_detail(&state.store, credit).await
    }
    .await;

    match result {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(err) => err.respond(state.config.legacy_status_codes),
    }
}

pub async fn get_credit(
    State(state): State<Arc<AppState>>,
    Id(id, _): Id<Credits>,
) -> AppResult<Json<CreditDetail>> {
    let credit = state.store.credit(id).await?.ok_or(AppError::NotFound("Credit"))?;
    Ok(Json(credit_detail(&state.store, credit).await?))
}

pub async fn update_credit(
    State(state): State<Arc<AppState>>,
    Id(id, _): Id<Credits>,
    payload: Result<Payload<Map<String, Value>>, AppError>,
) -> AppResult<(StatusCode, Json<CreditDetail>)> {
    let credit = state.store.credit(id).await?.ok_or(AppError::NotFound("Credit"))?;
    let Payload(body) = payload?;
    let fields = parse_fields(body, CreditField::parse)?;

    let credit = state.store.update_credit(credit, fields).await?;
    Ok((StatusCode::ACCEPTED, Json(credit_detail(&state.store, credit).await?)))
}

pub async fn delete_credit(
    State(state): State<Arc<AppState>>,
    Id(id, _): Id<Credits>,
) -> Response {
    match state.store.delete_credit(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => AppError::NotFound("Credit").respond(state.config.legacy_status_codes),
        Err(err) => err.into_response(),
    }
}

async fn actor_detail(store: &Store, actor: actor::Model) -> AppResult<ActorDetail> {
    let credits = store.actor_credits(actor.id).await?;
    Ok(ActorDetail::new(actor, credits))
}

async fn credit_detail(store: &Store, credit: credit::Model) -> AppResult<CreditDetail> {
    let (movie, actor) = store.credit_parties(&credit).await?;
    Ok(CreditDetail::new(credit, movie, actor))
}
