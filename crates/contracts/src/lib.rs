//! Shared contracts between the Gudangin frontend and its REST backend:
//! aggregate types, list-row DTOs, table query/page shapes and bulk
//! operation payloads.

pub mod domain;
pub mod shared;
pub mod system;
