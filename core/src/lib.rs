//! Client core for the to-do service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host plugs in a
//! [`Transport`] that performs the round-trip; [`SyncLayer`] drives it and
//! folds each response into the client's [`ViewState`].
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The server is authoritative. `ViewState` is a disposable projection,
//!   replaced wholesale on load and patched from each mutation response.
//! - With the default `ureq` feature, [`UreqTransport`] is a ready-made
//!   blocking transport.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod sync;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::{ApiError, SyncError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use sync::{SyncLayer, Transport};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{CreateTodo, Todo, UpdateTodo};
pub use view::ViewState;
