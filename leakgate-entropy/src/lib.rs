// leakgate-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
pub mod candidates;
pub mod entropy;

pub use alphabet::{Alphabet, BASE64_SYMBOLS};
pub use candidates::Candidates;
pub use entropy::{byte_entropy, shannon_entropy};
