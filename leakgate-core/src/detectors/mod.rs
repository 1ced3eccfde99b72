// leakgate-core/src/detectors/mod.rs
//! Concrete implementations of the `WordDetector` trait.
//!
//! * `content`: the alphabet-run entropy detector and the scan driver.
//! * `aggressive`: the opt-in whole-word raw-byte entropy detector.

pub mod aggressive;
pub mod content;

pub use aggressive::AggressiveDetector;
pub use content::ContentDetector;
