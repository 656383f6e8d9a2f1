//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use crate::menu::MenuError;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// MCP Constants
// =============================================================================

/// Adds a dish to the top of the menu
pub const ADD_DISH_TOOL: &str = "add_dish";
/// Removes a dish by id
pub const REMOVE_DISH_TOOL: &str = "remove_dish";
/// Returns a single dish by id
pub const GET_DISH_TOOL: &str = "get_dish";
/// Returns the average price per course
pub const AVERAGE_PRICES_TOOL: &str = "average_prices";
/// Returns the menu, optionally restricted to one course
pub const FILTER_MENU_TOOL: &str = "filter_menu";
/// Server identifier
pub const SERVER_NAME: &str = "menu-service-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error codes used by the server
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Why a `tools/call` could not be completed
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error(transparent)]
    Menu(#[from] MenuError),
}
