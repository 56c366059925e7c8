//! Networking layer: session HTTP client, wire types, and resource gateways.
//!
//! ARCHITECTURE
//! ============
//! `http` owns the one point of contact with the backend (cookies, CSRF,
//! logging, error taxonomy). `api` maps each domain operation onto exactly
//! one `http` call. Pages never touch HTTP directly.

pub mod api;
pub mod http;
pub mod types;
