pub mod counting_bloom;
pub mod hash_set;

pub trait SetMembership<T> {
    type InsertError;

    fn contains(&self, item: &T) -> bool;
    fn insert(&mut self, item: &T) -> Result<(), Self::InsertError>;
}

pub trait SetRemoval<T>: SetMembership<T> {
    type RemoveError;

    fn remove(&mut self, item: &T) -> Result<(), Self::RemoveError>;
}
