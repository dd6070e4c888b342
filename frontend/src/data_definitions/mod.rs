//! Frontend-only data definitions.

pub mod route_state;
