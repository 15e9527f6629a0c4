//! Server-only plumbing: the memoized database pool and the cached dataset
//! loader behind the server functions.

pub mod db;
pub mod loader;
