use crate::hash::Hashes;
use crate::set_membership::{SetMembership, SetRemoval};
use num_traits::{CheckedAdd, CheckedSub, Unsigned};
use std::f64::consts::LN_2;
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

/// Bloom filter variant with a counter per slot instead of a bit, so
/// inserted elements can be removed again.
///
/// Queries have one-sided error: `contains` returning `false` means the
/// element is definitely not present, `true` means it probably is. Removing
/// an element that was never inserted (or removing more times than it was
/// inserted) can desynchronize slots shared with other elements and induce
/// false negatives for those; that is inherent to counting bloom filters.
#[derive(Clone)]
pub struct CountingBloomFilter<T, H, C = u8> {
    counters: Vec<C>,
    num_hashes: usize,
    capacity: usize,
    items: usize,
    build_hasher: H,
    _phantom: PhantomData<T>,
}

impl<T, H, C> CountingBloomFilter<T, H, C>
where
    C: Copy + Unsigned,
{
    pub fn new(num_slots: usize, num_hashes: usize, build_hasher: H) -> Self {
        assert!(num_slots > 0, "num_slots must be > 0");
        assert!(num_hashes > 0, "num_hashes must be > 0");
        // Capacity implied by m and k, inverted from k = (m / n) * ln 2.
        let capacity = (num_slots as f64 * LN_2 / num_hashes as f64) as usize;
        Self {
            counters: vec![C::zero(); num_slots],
            num_hashes,
            capacity,
            items: 0,
            build_hasher,
            _phantom: PhantomData,
        }
    }

    pub fn with_probability(num_items: usize, probability: f64, build_hasher: H) -> Self {
        assert!(num_items > 0, "num_items must be > 0");
        assert!(
            0. < probability && probability < 1.,
            "probability must be in the range (0, 1)"
        );
        let num_slots =
            (-1. * num_items as f64 * probability.ln() / (LN_2 * LN_2)).ceil() as usize;
        let num_hashes = ((num_slots as f64 / num_items as f64) * LN_2).round().max(1.) as usize;
        let mut filter = Self::new(num_slots, num_hashes, build_hasher);
        filter.capacity = num_items;
        filter
    }

    pub fn num_slots(&self) -> usize {
        self.counters.len()
    }

    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Successful inserts minus successful removes, not a count of distinct
    /// elements.
    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    pub fn clear(&mut self) {
        self.counters.fill(C::zero());
        self.items = 0;
    }
}

impl<T, H, C> CountingBloomFilter<T, H, C>
where
    T: Hash,
    H: BuildHasher,
{
    fn slots(&self, item: &T) -> Vec<usize> {
        // Materialized so a failed insert/remove can undo what it applied.
        Hashes::new(
            item,
            self.counters.len() as u64,
            self.num_hashes,
            &self.build_hasher,
        )
        .collect()
    }
}

impl<T, H, C> SetMembership<T> for CountingBloomFilter<T, H, C>
where
    T: Hash,
    H: BuildHasher,
    C: Copy + Unsigned + CheckedAdd + CheckedSub,
{
    type InsertError = CounterOverflow;

    fn contains(&self, item: &T) -> bool {
        let mut hashes = Hashes::new(
            item,
            self.counters.len() as u64,
            self.num_hashes,
            &self.build_hasher,
        );
        hashes.all(|slot| !self.counters[slot].is_zero())
    }

    fn insert(&mut self, item: &T) -> Result<(), Self::InsertError> {
        let slots = self.slots(item);
        for (applied, &slot) in slots.iter().enumerate() {
            match self.counters[slot].checked_add(&C::one()) {
                Some(count) => self.counters[slot] = count,
                None => {
                    // Undo this call's increments; the exact undo also keeps
                    // the call atomic when indices collide on one slot.
                    for &slot in &slots[..applied] {
                        self.counters[slot] = self.counters[slot] - C::one();
                    }
                    return Err(CounterOverflow);
                }
            }
        }
        self.items += 1;
        Ok(())
    }
}

impl<T, H, C> SetRemoval<T> for CountingBloomFilter<T, H, C>
where
    T: Hash,
    H: BuildHasher,
    C: Copy + Unsigned + CheckedAdd + CheckedSub,
{
    type RemoveError = CounterUnderflow;

    fn remove(&mut self, item: &T) -> Result<(), Self::RemoveError> {
        let slots = self.slots(item);
        for (applied, &slot) in slots.iter().enumerate() {
            match self.counters[slot].checked_sub(&C::one()) {
                Some(count) => self.counters[slot] = count,
                None => {
                    for &slot in &slots[..applied] {
                        self.counters[slot] = self.counters[slot] + C::one();
                    }
                    return Err(CounterUnderflow);
                }
            }
        }
        // Counter sums bound successful removes by successful inserts, so
        // this never underflows.
        self.items -= 1;
        Ok(())
    }
}

impl<T, H, C> Debug for CountingBloomFilter<T, H, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CountingBloomFilter {{ num_slots: {}, num_hashes: {}, capacity: {}, items: {} }}",
            self.counters.len(),
            self.num_hashes,
            self.capacity,
            self.items
        )
    }
}

#[derive(Debug, Clone)]
pub struct CounterOverflow;

impl std::fmt::Display for CounterOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "counter overflow")
    }
}

impl std::error::Error for CounterOverflow {}

#[derive(Debug, Clone)]
pub struct CounterUnderflow;

impl std::fmt::Display for CounterUnderflow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "counter underflow")
    }
}

impl std::error::Error for CounterUnderflow {}
