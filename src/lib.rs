//! Client for a catalog of content creators kept in a hosted
//! table-REST store.
//!
//! [`store`] speaks the HTTP protocol, [`creators`] gives it typed CRUD
//! operations, [`seed`] resets the table to a sample set, and [`view`]
//! plus [`cli`] present the records.

pub mod cli;
pub mod config;
pub mod creators;
pub mod logging;
pub mod seed;
pub mod store;
pub mod view;
