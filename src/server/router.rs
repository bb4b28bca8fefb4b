use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    },
    server::{
        controller::player::{
            self, create_player, delete_player, get_player, get_players, get_players_count,
            update_player,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Playerboard", description = "Player administration API"),
    paths(
        player::get_players,
        player::get_players_count,
        player::create_player,
        player::get_player,
        player::update_player,
        player::delete_player,
    ),
    components(schemas(PlayerDto, CreatePlayerDto, UpdatePlayerDto, ErrorDto)),
    tags((name = "player", description = "Player management endpoints")),
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rest/players", get(get_players).post(create_player))
        .route("/rest/players/count", get(get_players_count))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
