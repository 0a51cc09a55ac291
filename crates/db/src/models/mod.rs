//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Row mapping is static and explicit; there is no
//! reflection-style schema binding.

pub mod annotation;
