//! askdb - ask a small student database questions in plain English.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod query;
pub mod safety;
pub mod web;
