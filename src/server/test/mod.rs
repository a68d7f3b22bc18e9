//! In-process HTTP tests driving the full router.

mod client;
