//! View models for the three demo sections and their root composition.
//!
//! Each view owns its state exclusively and exposes operations that either
//! mutate that state directly (pure transitions) or return a `Fetch` for the
//! host to execute. Outcomes come back through the view's `settle_*`
//! methods, normally routed by `RootView::settle`.

mod basic;
mod crud;
mod dependent;
mod root;

pub use basic::BasicFetchView;
pub use crud::CrudFormView;
pub use dependent::{DependentFetchView, Stats};
pub use root::RootView;
