//! Collaborator seams.
//!
//! The pipeline never talks to the network or a scoring model directly; it
//! goes through these traits so transports and scorers stay swappable.

pub mod fetcher;
pub mod scorer;
