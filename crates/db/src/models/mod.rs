//! Row structs for the `todos` table.
//!
//! Each row converts into its `todos_core` entity; the HTTP layer never sees
//! a row type directly. Users carry no data beyond their name, so they have
//! no row struct.

pub mod todo;
