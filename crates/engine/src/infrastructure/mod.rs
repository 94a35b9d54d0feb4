//! Infrastructure boundary.
//!
//! Port traits only - concrete adapters (database, LLM service, image
//! generation backend) live outside this repository.

pub mod ports;
