//! REST API handlers for menu operations
//!
//! This module implements the HTTP endpoints the menu screens call: listing
//! and filtering dishes, adding and removing them, dish details and the
//! per-course average prices.

use super::{error::MenuError, helpers::*, models::*, state::SharedState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

/// Creates routes for menu-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu", get(list_menu).post(add_dish))
        .route("/menu/averages", get(average_prices))
        .route("/menu/stats", get(menu_statistics))
        .route("/menu/:id", get(get_dish).delete(remove_dish))
}

/// Endpoint: GET /menu?course=<Starter|Main|Dessert|Beverage|all>
/// Returns the dishes of one course, or the whole menu, in menu order.
async fn list_menu(
    State(state): State<SharedState>,
    Query(query): Query<FilterInput>,
) -> Result<Json<Vec<Dish>>, MenuError> {
    let selector = CourseSelector::parse(query.course.as_deref())?;

    let menu = state.menu.read().await;
    let dishes: Vec<Dish> = menu.filter(selector).into_iter().cloned().collect();
    debug!(%selector, count = dishes.len(), "listed menu");

    Ok(Json(dishes))
}

/// Endpoint: POST /menu
/// Validates the draft, gives it a fresh id and puts it at the top of the menu.
async fn add_dish(
    State(state): State<SharedState>,
    Json(draft): Json<DishDraft>,
) -> Result<impl IntoResponse, MenuError> {
    let dish = build_dish(draft)?;

    state.menu.write().await.add(dish.clone());
    info!(id = %dish.id, name = %dish.dish_name, course = %dish.course, "dish added");

    Ok((StatusCode::CREATED, Json(dish)))
}

/// Endpoint: GET /menu/averages
async fn average_prices(State(state): State<SharedState>) -> Json<Vec<CourseAverage>> {
    let averages = state.menu.read().await.average_price_by_course();
    Json(averages)
}

/// Endpoint: GET /menu/stats
/// Total dish count plus the per-course averages.
async fn menu_statistics(State(state): State<SharedState>) -> Json<MenuStatistics> {
    let stats = state.menu.read().await.statistics();
    Json(stats)
}

/// Endpoint: GET /menu/:id
async fn get_dish(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Dish>, MenuError> {
    let dish = state.menu.read().await.get_by_id(&id).cloned();
    dish.map(Json).ok_or(MenuError::DishNotFound(id))
}

/// Endpoint: DELETE /menu/:id
/// Idempotent: removing an unknown id still succeeds.
async fn remove_dish(State(state): State<SharedState>, Path(id): Path<String>) -> StatusCode {
    let removed = state.menu.write().await.remove(&id);
    if let Some(removed) = removed {
        info!(id = %removed.id, name = %removed.dish_name, "dish removed");
    } else {
        debug!(%id, "remove requested for unknown dish");
    }

    StatusCode::NO_CONTENT
}
