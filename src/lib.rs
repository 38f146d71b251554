//! FuelForge Library
//!
//! Nutrition and fitness tracking: reference food and exercise tables, an
//! aggregation engine for macros, body metrics and workout volume, a SQLite
//! record store and clients for the AI food scanner and coach.

pub mod ai;
pub mod build_info;
pub mod config;
pub mod db;
pub mod engine;
pub mod models;
pub mod motivation;
pub mod reference;
pub mod store;
pub mod tracker;
pub mod workout;
