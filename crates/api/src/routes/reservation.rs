use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers::reservation};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/reservations/:id",
            get(reservation::get_reservation)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
}
