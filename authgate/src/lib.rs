//! Delegating authentication middleware for axum services.
//!
//! `authgate` forwards each inbound request's session material to a remote
//! auth service, classifies the verdict, binds the resolved [`AuthData`]
//! into the request's extensions, and optionally gates downstream handlers
//! by role membership. The auth decision itself is made elsewhere — this
//! crate only consumes it.
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use authgate::{
//!     AuthGateConfig, AuthGateState, HttpAuthClient, Role, RoleGateLayer, auth_middleware,
//! };
//! use axum::{Router, middleware, routing::get};
//!
//! let config = AuthGateConfig::default();
//! let client = HttpAuthClient::new(&config)?;
//! let state = AuthGateState::new(Arc::new(client));
//!
//! let admin = Router::new()
//!     .route("/admin", get(admin_handler))
//!     .layer(RoleGateLayer::new([Role::Admin, Role::Moderator]));
//!
//! // The auth layer is added last so it runs first; the role gate sees
//! // the identity it bound.
//! let app: Router = Router::new()
//!     .merge(admin)
//!     .layer(middleware::from_fn_with_state(state, auth_middleware));
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod client;
pub mod config;
pub mod extract;
pub mod middleware;
pub mod problem;
pub mod role_gate;

pub use authgate_sdk::{AuthCheckClient, AuthCheckError, AuthData, Role};
pub use client::HttpAuthClient;
pub use config::{AuthGateConfig, DenialConvention, ForwardMode};
pub use extract::AuthIdentity;
pub use middleware::{AuthGateState, auth_middleware};
pub use problem::Problem;
pub use role_gate::RoleGateLayer;
