//! # Taskboard API Server Library
//!
//! This library provides the HTTP binding for the taskboard backend. Every
//! route constructs a typed request, sends it through the mediator from
//! `taskboard-core`, and serializes the result back to the client.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
