//! MCP (Model Context Protocol) route handlers
//!
//! This module exposes the menu operations as MCP tools over JSON-RPC.
//! It exports `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::menu::{
    helpers::{build_dish, format_menu_summary, format_price},
    models::{CourseSelector, Dish, DishDraft, DishIdInput, FilterInput},
    state::{AppState, SharedState},
    MenuError,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(error = %e.body_text(), "rejected MCP request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    debug!(method = method_name, ?id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(err) => {
                    debug!(tool = tool_name, error = %err, "tool call failed");
                    rpc_error(id, INVALID_PARAMS, err.to_string())
                }
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "unknown MCP method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn course_schema() -> Value {
    json!({ "type": "string", "enum": ["Starter", "Main", "Dessert", "Beverage"] })
}

fn id_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "id": { "type": "string" } },
        "required": ["id"],
        "additionalProperties": false
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": ADD_DISH_TOOL,
                "title": "Add dish",
                "description": "Adds a dish to the top of the menu and returns it with its new id.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dishName": { "type": "string" },
                        "description": { "type": "string", "default": "" },
                        "course": course_schema(),
                        "price": { "type": ["number", "string"], "exclusiveMinimum": 0 }
                    },
                    "required": ["dishName", "course", "price"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_DISH_TOOL,
                "title": "Remove dish",
                "description": "Removes the dish with the given id; unknown ids are ignored.",
                "inputSchema": id_schema()
            },
            {
                "name": GET_DISH_TOOL,
                "title": "Dish details",
                "description": "Returns the dish with the given id.",
                "inputSchema": id_schema()
            },
            {
                "name": AVERAGE_PRICES_TOOL,
                "title": "Average price by course",
                "description": "Returns the number of dishes and the average dish price of every course on the menu.",
                "inputSchema": {
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                }
            },
            {
                "name": FILTER_MENU_TOOL,
                "title": "Filter menu",
                "description": "Returns the menu, optionally restricted to one course.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "course": { "type": "string", "description": "Course name or \"all\"" }
                    },
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub async fn handle_tool_call(
    state: &AppState,
    name: &str,
    args: Value,
) -> Result<Value, ToolError> {
    match name {
        ADD_DISH_TOOL => handle_add_dish_tool(state, args).await,
        REMOVE_DISH_TOOL => handle_remove_dish_tool(state, args).await,
        GET_DISH_TOOL => handle_get_dish_tool(state, args).await,
        AVERAGE_PRICES_TOOL => handle_average_prices_tool(state).await,
        FILTER_MENU_TOOL => handle_filter_menu_tool(state, args).await,
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

async fn handle_add_dish_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let draft: DishDraft = parse_args(args)?;
    let dish = build_dish(draft)?;

    let count = {
        let mut menu = state.menu.write().await;
        menu.add(dish.clone());
        menu.len()
    };
    info!(id = %dish.id, name = %dish.dish_name, course = %dish.course, "dish added");

    let message = format!(
        "Added {} ({}) at {}. The menu now has {} dish(es).",
        dish.dish_name,
        dish.course,
        format_price(dish.price),
        count
    );
    Ok(tool_result(message, json!({ "dish": dish })))
}

async fn handle_remove_dish_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let input: DishIdInput = parse_args(args)?;

    let removed = state.menu.write().await.remove(&input.id);
    let message = match &removed {
        Some(dish) => {
            info!(id = %dish.id, name = %dish.dish_name, "dish removed");
            format!("Removed {}.", dish.dish_name)
        }
        None => format!("No dish with id {} was on the menu.", input.id),
    };

    Ok(tool_result(
        message,
        json!({ "id": input.id, "removed": removed.is_some() }),
    ))
}

async fn handle_get_dish_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let input: DishIdInput = parse_args(args)?;

    let dish = state.menu.read().await.get_by_id(&input.id).cloned();
    let dish = dish.ok_or(MenuError::DishNotFound(input.id))?;

    let message = format!(
        "{} ({}) {}: {}",
        dish.dish_name,
        dish.course,
        format_price(dish.price),
        dish.description
    );
    Ok(tool_result(message, json!({ "dish": dish })))
}

async fn handle_average_prices_tool(state: &AppState) -> Result<Value, ToolError> {
    let stats = state.menu.read().await.statistics();

    let message = if stats.averages.is_empty() {
        "The menu is empty.".to_string()
    } else {
        let averages = stats
            .averages
            .iter()
            .map(|a| format!("{}: {}", a.course, a.average_price))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} dish(es). {}", stats.total_items, averages)
    };

    Ok(tool_result(message, json!(stats)))
}

async fn handle_filter_menu_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let input: FilterInput = parse_args(args)?;
    let selector = CourseSelector::parse(input.course.as_deref())?;

    let dishes: Vec<Dish> = {
        let menu = state.menu.read().await;
        menu.filter(selector).into_iter().cloned().collect()
    };

    let message = if dishes.is_empty() {
        format!("No dishes for {selector}.")
    } else {
        format!("{selector}: {}", format_menu_summary(&dishes))
    };

    Ok(tool_result(
        message,
        json!({ "course": selector.to_string(), "dishes": dishes }),
    ))
}
