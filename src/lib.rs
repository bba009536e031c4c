//! Core library exports for the ReaderBuddy service.
//!
//! This crate implements a reading tracker: a book catalog with per-user
//! reading logs, plus tagged bookmarks with substring search. The `data`
//! feature compiles only the persistence/domain layer; the default `server`
//! feature adds forms, services and Actix-web routes.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
