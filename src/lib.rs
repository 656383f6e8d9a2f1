//! Restaurant Menu Library
//!
//! This library provides the in-memory restaurant menu (dishes, per-course
//! average prices, guest filtering) together with its REST and MCP (Model
//! Context Protocol) boundaries.

// Domain modules
pub mod mcp;
pub mod menu;

// Infrastructure
pub mod config;
pub mod router;
