use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers::user};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/:id",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
}
