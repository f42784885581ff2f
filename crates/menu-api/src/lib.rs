//! # Menu API
//! 
//! HTTP handlers, the HTML menu renderer, and the response envelope.

pub mod handlers;
pub mod render;
pub mod error;
pub mod response;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
