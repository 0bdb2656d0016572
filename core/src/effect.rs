//! Effects handed from the views to the host.
//!
//! A view never performs I/O. Operations that need the network return a
//! `Fetch`: the request to execute plus a `FetchKey` naming what the result
//! belongs to. The host runs the request and passes the key and the
//! `Outcome` back to `RootView::settle`.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Result of executing a `Fetch`. Transport failures arrive as
/// `ApiError::Transport`.
pub type Outcome = Result<HttpResponse, ApiError>;

/// Identifies the view channel an outcome settles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchKey {
    Todos,
    Users,
    /// Captures the selection at issuance time; compared against the live
    /// selection when the outcome arrives. `seq` tells apart two fetches
    /// for the same owner.
    Posts { owner_id: String, seq: u64 },
    CrudList,
    CrudCreate,
    CrudUpdate { id: u32 },
    CrudDelete { id: u32 },
}

/// A request the host must execute on behalf of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub key: FetchKey,
    pub request: HttpRequest,
}

impl Fetch {
    pub fn new(key: FetchKey, request: HttpRequest) -> Self {
        Self { key, request }
    }
}
