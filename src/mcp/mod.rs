//! MCP (Model Context Protocol) server implementation
//!
//! This module provides a stdio-based MCP server using the official `rmcp` SDK.
//! It exposes the ribbon vocabulary and prompt enhancement to AI clients.

mod server;

pub use server::{EnhancePromptParams, RibbonService};
