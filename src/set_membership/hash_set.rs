use crate::set_membership::{SetMembership, SetRemoval};
use std::collections::HashSet;
use std::convert::Infallible;
use std::hash::Hash;

impl<T> SetMembership<T> for HashSet<T>
where
    T: Clone + Eq + Hash,
{
    type InsertError = Infallible;

    fn contains(&self, item: &T) -> bool {
        HashSet::<T>::contains(self, item)
    }

    fn insert(&mut self, item: &T) -> Result<(), Self::InsertError> {
        HashSet::<T>::insert(self, item.clone());
        Ok(())
    }
}

impl<T> SetRemoval<T> for HashSet<T>
where
    T: Clone + Eq + Hash,
{
    type RemoveError = NotPresent;

    fn remove(&mut self, item: &T) -> Result<(), Self::RemoveError> {
        if HashSet::<T>::remove(self, item) {
            Ok(())
        } else {
            Err(NotPresent)
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotPresent;

impl std::fmt::Display for NotPresent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "not present")
    }
}

impl std::error::Error for NotPresent {}
