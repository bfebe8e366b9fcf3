//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models from
//! `server::model`. They are generic over `ConnectionTrait` so services can run them
//! against the shared connection or inside a transaction.

pub mod course;
pub mod participation;
pub mod scheduler;
pub mod syllabus;
pub mod topic;
pub mod training;
pub mod user;

#[cfg(test)]
mod test;
