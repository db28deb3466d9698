/// Catalog service module
///
/// This module handles everything that talks to the remote catalog:
/// - Domain records and the lenient wire format (model.rs)
/// - The network seam and its HTTP implementation (client.rs)
/// - Fetch error taxonomy (error.rs)

pub mod client;
pub mod error;
pub mod model;

#[cfg(test)]
pub mod scripted;
