//! Core traits for store operations.

use movie_store::MovieStore;

/// A read-only operation.
///
/// Receives a shared borrow of the store and therefore cannot change it.
pub trait MovieQuery: Send + Sync {
    type Output;

    /// Returns the name of this operation (for logging)
    fn name(&self) -> &str;

    fn run(&self, store: &MovieStore) -> Self::Output;
}

/// A mutating operation.
///
/// Consumes itself and receives an exclusive borrow of the store. Runs to
/// completion without suspending, so a caller holding a write lock observes
/// it as a single atomic step.
pub trait MovieCommand: Send + Sync {
    type Output;

    /// Returns the name of this operation (for logging)
    fn name(&self) -> &str;

    fn execute(self, store: &mut MovieStore) -> Self::Output;
}
