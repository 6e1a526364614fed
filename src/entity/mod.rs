//! SeaORM entity definitions.
//!
//! These entities exist for database operations only and are kept separate
//! from the business models in the `models` module. The storage layer runs
//! CRUD through them and converts into business models at the boundary.

pub mod prelude;

pub mod attendance_records;
pub mod students;
pub mod users;
