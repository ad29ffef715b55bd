//! Stateless helper services.

pub mod video;
