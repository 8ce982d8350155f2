//! Unit of work - the atomic scope around a sequence of repository calls

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::DomainError;

/// Future returned by the closure handed to [`UnitOfWork::run`]
pub type WorkFuture<'t, T, E> = BoxFuture<'t, Result<T, E>>;

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Transactional handle passed to every repository call inside `run`
    type Tx: Send + 'static;

    /// Run `work` inside one transaction.
    ///
    /// Commits when `work` returns `Ok` and rolls back when it returns `Err`.
    /// If `work` panics, or the returned future is dropped before completion,
    /// the handle's drop rolls the transaction back; panics keep unwinding.
    /// Failing to begin or commit surfaces as `E::from(DomainError)`.
    async fn run<T, E, F>(&self, work: F) -> Result<T, E>
    where
        T: Send,
        E: From<DomainError> + Send,
        F: for<'t> FnOnce(&'t mut Self::Tx) -> WorkFuture<'t, T, E> + Send;
}
