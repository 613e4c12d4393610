//! Reservations API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/reservations", post(handler::create).get(handler::list))
        .route(
            "/reservations/{id}",
            get(handler::get_by_id)
                .put(handler::update_status)
                .delete(handler::delete),
        )
}
