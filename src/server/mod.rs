//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: API endpoints, the import pipeline, data
//! access and infrastructure services. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, importers and import jobs
//! - **Data Layer** (`data/`) - Repositories, the upsert helper and reference lookups
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard and the OAuth session wrapper
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, services)
//! - **Startup** (`startup`) - Initialization of database, sessions, clients and the admin account
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document assembly
//! - **Scheduler** (`scheduler/`) - Cron jobs for scheduled imports and token cleanup
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** checks the bearer token with `AuthGuard` and calls a service
//! 3. **Service** executes business logic and orchestrates data operations
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
