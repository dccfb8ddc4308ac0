//! # jellyreboot-app
//!
//! Application layer — the session use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HttpTransport` — issue a request against the management API
//!   - `Ui` — toggle views, write status text, raise alerts
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `SessionClient` — login, fetch status, restart, logout, command dispatch
//! - Own the session state (credentials, visible view, restart guard)
//!
//! ## Dependency rule
//! Depends on `jellyreboot-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Concurrency
//! Everything runs on one cooperative UI loop. Port futures are not required
//! to be `Send`, and session state uses `Cell`/`RefCell`.

pub mod ports;
pub mod services;
