//! CILC - Campus Learning Dashboard calendar core
//!
//! This crate implements the session calendar behind the CILC dashboard:
//! range computation and filtering over session records, navigation between
//! day/week/month views, and the thin client for the remote session API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
