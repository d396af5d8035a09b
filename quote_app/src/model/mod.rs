//! Data model types held by the app while it runs.
//!
//! This module groups the transient UI-side types:
//! - `quote` — quotes prepared for display with a locally generated date.
//! - `category` — the fixed category set and the no-op selection state.
pub mod category;
pub mod quote;
