// Library root
// -----------
// This crate exposes a small library surface for the movie catalog CLI.
// The binary (`main.rs`) wires these modules into the interactive menu.
//
// Module responsibilities:
// - `config`: Reads the catalog path and metadata service settings from
//   the environment.
// - `error`: Typed failures from the store and catalog operations.
// - `model`: The `Movie` record as stored on disk.
// - `store`: Whole-file load/save of the catalog JSON array.
// - `catalog`: Display, add, update, delete, search, filter and import
//   operations. Each one is a fresh load/transform/save cycle.
// - `api`: Blocking client for the OMDb search endpoint.
// - `ui`: Terminal menu flows built on `dialoguer`.
//
// Everything except `ui` is usable without a terminal, which is how the
// integration tests drive it.
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
