//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async SQL helpers that
//! accept any Postgres executor (a pool, a connection or a transaction) as
//! the first argument.

pub mod todo_repo;
pub mod user_repo;

pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
