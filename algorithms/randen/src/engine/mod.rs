//! Execution Engine
//!
//! CPU dispatch and the sponge state machine primitives.

pub mod dispatcher;
pub mod sponge;

pub use dispatcher::get_active_backend_name;
