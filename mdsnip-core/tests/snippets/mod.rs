//! Snippet tests
//!
//! Extraction from the fixture cheat sheet and full pipeline runs with stub collaborators.

mod extract;
mod pipeline;
