//! Domain modules (vertical slices): types, wire types, sub-clients.

pub mod admin;
