// Assessment domain — pure, request-scoped logic.
// Scoring and goal extraction do no I/O so they unit-test without a network.

pub mod goal;
pub mod models;
pub mod scoring;
