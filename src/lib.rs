//! Startup Panorama - Brazilian startup-investment dashboard backend
//!
//! This crate exposes the dashboard's statistics API: route handlers that
//! forward prompts plus JSON response-schemas to a generative-AI endpoint,
//! parse the returned JSON and reshape it into the frontend contract.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
