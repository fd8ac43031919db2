use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers::disponibility};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/disponibilities",
            get(disponibility::list_disponibilities).post(disponibility::create_disponibility),
        )
        .route(
            "/disponibilities/:id",
            get(disponibility::get_disponibility)
                .put(disponibility::update_disponibility)
                .delete(disponibility::delete_disponibility),
        )
}
