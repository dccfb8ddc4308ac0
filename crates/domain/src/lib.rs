//! # jellyreboot-domain
//!
//! Pure domain model for the jellyreboot container dashboard client.
//!
//! ## Responsibilities
//! - Hold the **credentials** of a session and derive the Basic auth header
//! - Describe the **payloads** returned by `/status` and `/restart`
//! - Model the **view** state machine (login form vs. status panel)
//! - Provide the **restart guard** that keeps restarts from overlapping
//! - Define the error kinds every session operation can fail with
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Transport and UI boundaries are expressed as traits in the `app` crate.

pub mod credentials;
pub mod error;
pub mod guard;
pub mod status;
pub mod view;
