//! Server-side web application and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameters and form validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Sessions, authentication guard and error pages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, templates, settings)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions and templates
//! - **Router** (`router`) - Axum route configuration
//! - **Templates** (`template`) - Embedded page templates and rendering
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session; the controller resolves the viewer through `AuthGuard`
//! 3. **Controller** parses path and form input, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and renders the page template
//! 7. **Middleware** renders the error template for bare 404 and 500 responses

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod template;
pub mod util;

#[cfg(test)]
mod test;
