//! Shared core of the candidate portal.
//!
//! Everything here is target-agnostic: the browser specifics (storage, clock,
//! HTTP) live behind the ports in [`cache`], [`fetch`] and [`submit`] and are
//! implemented by the `frontend` crate. The `backend` crate only needs
//! [`model::config`].

pub mod cache;
pub mod fetch;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod photo;
pub mod submit;
pub mod upload;
