use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, PlayerFilterQuery, UpdatePlayerDto},
    },
    server::{
        controller::{extract::JsonBody, param::PlayerPageParam},
        error::AppError,
        model::{
            filter::PlayerFilter,
            player::{CreatePlayerParams, PageRequest, UpdatePlayerParams},
        },
        service::player::PlayerService,
        state::AppState,
    },
};

pub static PLAYER_TAG: &str = "player";

#[utoipa::path(
    get,
    path = "/rest/players",
    tag = PLAYER_TAG,
    params(PlayerFilterQuery, PlayerPageParam),
    responses(
        (status = 200, description = "Page of players matching the filter", body = Vec<PlayerDto>),
        (status = 400, description = "Unknown token or invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerFilterQuery>,
    Query(page): Query<PlayerPageParam>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PlayerFilter::from_query(query)?;
    let page = PageRequest::from_query(&page.order, page.page_number, page.page_size)?;

    let players = PlayerService::new(&state.db)
        .get_paginated(&filter, page)
        .await?;

    let dto: Vec<PlayerDto> = players.into_iter().map(|player| player.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/rest/players/count",
    tag = PLAYER_TAG,
    params(PlayerFilterQuery),
    responses(
        (status = 200, description = "Number of players matching the filter", body = u64),
        (status = 400, description = "Unknown race or profession token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_count(
    State(state): State<AppState>,
    Query(query): Query<PlayerFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PlayerFilter::from_query(query)?;

    let count = PlayerService::new(&state.db).count(&filter).await?;

    Ok((StatusCode::OK, Json(count)))
}

#[utoipa::path(
    post,
    path = "/rest/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 200, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Missing, malformed or invalid player data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePlayerParams::from_dto(payload)?;

    let player = PlayerService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    get,
    path = "/rest/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerDto),
        (status = 400, description = "ID is not positive", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    post,
    path = "/rest/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Invalid ID, malformed or invalid player data", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdatePlayerParams::from_dto(payload)?;

    let player = PlayerService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/rest/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted player"),
        (status = 400, description = "ID is not positive", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    PlayerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::OK)
}
