/// Sprite resolution and fallback module
///
/// This module handles:
/// - Building ordered candidate URL chains per entity (resolver.rs)
/// - The forward-only fallback transition (fallback.rs)
/// - Per-image rendering-site bookkeeping (slot.rs)
/// - Fetching and verifying one tier's bytes (loader.rs)

pub mod fallback;
pub mod loader;
pub mod resolver;
pub mod slot;
