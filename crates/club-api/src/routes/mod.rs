//! Route definitions
//!
//! All API routes organized by resource.

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::{event_types, events, health, members};
use crate::state::AppState;

/// Create the main API router with all resource routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(event_type_routes())
        .merge(event_routes())
        .merge(member_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Event type routes
fn event_type_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/eventTypes",
            get(event_types::list_event_types).post(event_types::create_event_type),
        )
        .route(
            "/eventTypes/:id",
            get(event_types::get_event_type)
                .put(event_types::update_event_type)
                .delete(event_types::delete_event_type),
        )
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        // Member CRUD
        .route("/members", get(members::list_members).post(members::create_member))
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        // Preferred event types
        .route(
            "/members/:id/eventTypes",
            get(members::list_preferences).post(members::add_preference),
        )
        .route(
            "/members/:id/eventTypes/:event_type_id",
            delete(members::remove_preference),
        )
        // Registrations
        .route(
            "/members/:id/events",
            get(members::list_registrations).post(members::add_registration),
        )
        .route(
            "/members/:id/events/:event_id",
            delete(members::remove_registration),
        )
}
