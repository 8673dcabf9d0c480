//! Counting bloom filter: probabilistic set membership with removal.
//!
//! A contains query answers either "probably present" or "definitely not
//! present"; false positives are possible, false negatives are not. Slots
//! hold counters instead of bits, so previously inserted elements can be
//! removed by decrementing their slots.

mod hash;
pub mod set_membership;

pub use set_membership::counting_bloom::{CounterOverflow, CounterUnderflow, CountingBloomFilter};
pub use set_membership::{SetMembership, SetRemoval};
