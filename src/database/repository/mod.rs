//! One function per SQL statement, grouped by table.
//!
//! Functions take the shared pool by reference and return `DatabaseError`, so
//! unique-constraint violations arrive already classified by constraint name.

pub mod cities;
pub mod states;
pub mod temperatures;
