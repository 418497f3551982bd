//! SDK for the authgate delegation middleware.
//!
//! Defines the surface that consumers program against: the
//! [`AuthCheckClient`] trait for delegation checks, the domain models
//! ([`AuthData`], [`Role`]), and the [`AuthCheckError`] taxonomy. The
//! HTTP-backed implementation and the axum middleware live in the
//! `authgate` crate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

pub use api::AuthCheckClient;
pub use error::AuthCheckError;
pub use models::{AuthData, Role};
