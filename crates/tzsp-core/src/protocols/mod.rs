//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets, ranges and wire constants (source of truth)
//! - `reader`: bounds-checked byte access
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Decoders are pure and contain no I/O. `tzsp` handles the encapsulation and
//! `ieee80211` the wireless frame carried inside it.

pub mod ieee80211;
pub mod tzsp;
