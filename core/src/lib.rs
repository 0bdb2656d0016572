//! I/O-free core of the fetch/CRUD demo.
//!
//! # Overview
//! `RestClient` builds `HttpRequest` values and parses `HttpResponse` values
//! for the placeholder REST API without touching the network. The view
//! models in [`views`] hold all UI state and return [`Fetch`] effects for
//! the host to execute (host-does-IO pattern), so every state transition,
//! including out-of-order responses, is testable without a runtime.
//!
//! # Design
//! - Each loading/error pair is one [`FetchChannel`].
//! - Dependent fetches are keyed by the selection captured at issuance;
//!   stale outcomes are discarded on settle.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod channel;
pub mod client;
pub mod effect;
pub mod error;
pub mod http;
pub mod types;
pub mod views;

pub use channel::{FetchChannel, Phase};
pub use client::RestClient;
pub use effect::{Fetch, FetchKey, Outcome};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Company, Post, PostDraft, Todo, User};
pub use views::{BasicFetchView, CrudFormView, DependentFetchView, RootView, Stats};
