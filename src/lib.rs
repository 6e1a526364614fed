//! Student attendance record-keeping backend.
//!
//! REST service built on Actix Web: a student roster with derived UIDs and
//! an attendance ledger keyed by (student, calendar day).
//!
//! # Architecture
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: authentication and authorization middleware
//! - `models`: data model definitions
//! - `routes`: API routing layer
//! - `runtime`: runtime lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: helper functions

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
