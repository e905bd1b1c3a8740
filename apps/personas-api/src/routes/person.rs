//! Person routes

use axum::routing::get;
use axum::Router;
use personas_domain::PersonRepository;

use crate::handlers::person::{
    create_person, delete_person, get_person, list_people, update_person,
};
use crate::AppState;

/// Create person CRUD routes
pub fn routes<R>() -> Router<AppState<R>>
where
    R: PersonRepository + 'static,
{
    Router::new()
        .route("/people", get(list_people::<R>).post(create_person::<R>))
        .route(
            "/people/:document",
            get(get_person::<R>)
                .put(update_person::<R>)
                .delete(delete_person::<R>),
        )
}
