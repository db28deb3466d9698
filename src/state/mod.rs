/// State management module
///
/// This module handles all view state, including:
/// - Fetch status and request generations (status.rs)
/// - Paginated list retrieval (list.rs)
/// - Single-entity detail retrieval (detail.rs)
/// - The combined page/dialog state machine (view.rs)

pub mod detail;
pub mod list;
pub mod status;
pub mod view;
