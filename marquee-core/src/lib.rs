//! # Marquee Core
//!
//! Core library for the Marquee movie catalog API, providing the domain
//! types, validation engine, and store abstractions behind the HTTP layer.
//!
//! ## Overview
//!
//! `marquee-core` is the foundation of the Marquee workspace, offering:
//!
//! - **Movie type**: the catalog entity with its domain validation rules
//! - **Runtime codec**: the `"<minutes> mins"` JSON representation
//! - **Validator**: named field-error accumulation for 422 responses
//! - **Filters**: page/page-size bounds and safelisted sort derivation
//! - **Store port**: trait-based movie persistence with a PostgreSQL
//!   implementation
//!
//! ## Architecture
//!
//! The crate is organized into a handful of small modules:
//!
//! - [`movie`]: the `Movie` entity and its validation pass
//! - [`runtime`]: the `Runtime` newtype and its codec
//! - [`validator`]: the field-error accumulator
//! - [`filters`]: list-query filtering, sorting, and pagination
//! - [`store`]: the `MovieStore` port and `PostgresMovieStore`

pub mod error;
pub mod filters;
pub mod movie;
pub mod runtime;
pub mod store;
pub mod validator;

pub use error::{Result, StoreError};
pub use filters::{Filters, SortDirection, validate_filters};
pub use movie::{Movie, validate_movie};
pub use runtime::{InvalidRuntimeFormat, Runtime};
pub use store::{MovieStore, postgres::PostgresMovieStore};
pub use validator::Validator;
