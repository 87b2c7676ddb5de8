//! Offline batch loaders that seed the Record Store.
//!
//! Loaders talk to the connection directly; they never go through
//! `AutomobileService`.

pub mod csv_loader;
