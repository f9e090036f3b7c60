//! Study Compass - Study Recommendation Engine
//!
//! This crate implements the recommendation subsystem of the Study Compass
//! learning platform: it assembles per-subject performance, learning-profile,
//! and study-activity data into a context, runs a set of independent rule
//! generators over it, prioritizes the candidates, and manages each
//! recommendation's lifecycle (active -> applied/dismissed/expired).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
