//! Browser event wiring. Handlers translate DOM events into `PageEvent`s and
//! leave every decision to `client_core`.

pub mod form;
pub mod listeners;
