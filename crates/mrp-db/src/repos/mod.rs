//! Repository modules implementing CRUD operations for all MRP entities.
//!
//! Each module adds methods to `MrpService` via `impl MrpService` blocks.

pub mod project;
pub mod run;
pub mod source;
pub mod step;
