//! # Pokéleague
//!
//! Participation manager for a Pokémon league: a server-rendered admin
//! surface for creating trainers and granting or revoking administrator
//! rights, built on axum with a small dependency-injection layer.
//!
//! ## Features
//!
//! - **Dependency Injection**: thread-safe container with `Arc<dyn Trait>` bindings
//! - **Controller-based Routing**: `#[controller]` + `#[routes]` generate axum routers
//! - **Modules**: `#[module]` registers bindings, providers and controllers
//! - **Form Binding**: url-encoded forms validated with `validator`, errors as per-field flags
//! - **Flash Messages**: one-shot messages carried across post/redirect/get
//! - **Localization**: Fluent message catalogs selected from `Accept-Language`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pokeleague::app::{self, AppModule};
//! use pokeleague::config::{AppConfig, ConfigService};
//! use pokeleague::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load(&ConfigService::from_env())?;
//!     let mut container = app::infrastructure(&config)?;
//!     AppModule::register(&mut container)?;
//!
//!     let router = app::build_router(container)?;
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()?)
//!         .await
//!         .map_err(|e| LeagueError::Internal(e.to_string()))?;
//!     axum::serve(listener, router)
//!         .with_graceful_shutdown(shutdown_signal())
//!         .await
//!         .map_err(|e| LeagueError::Internal(e.to_string()))
//! }
//! ```

// The macros emit `::pokeleague::...` paths, which must also resolve in here.
extern crate self as pokeleague;

pub mod app;
pub mod config;
pub mod di;
pub mod error;
pub mod i18n;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod modules;
pub mod web;

// Re-export core types
pub use di::{Container, ContainerBuilder, Injectable};
pub use error::{LeagueError, Result};
pub use module::Module;

// Re-export macros
pub use pokeleague_macro::{
    Injectable as DeriveInjectable, controller, form, get, module, param, post, routes,
};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use pokeleague::prelude::*;
/// ```
pub mod prelude {
    pub use crate::di::{Container, ContainerBuilder, Injectable};
    pub use crate::error::{LeagueError, Result};
    pub use crate::interceptor::{Interceptor, InterceptorResult, Next};
    pub use crate::lifecycle::shutdown_signal;
    pub use crate::module::Module;
    pub use crate::{
        DeriveInjectable as Injectable, controller, form, get, module, param, post, routes,
    };
    pub use async_trait::async_trait;
    pub use axum::{
        Router,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
