//! Page vocabulary shared by the behavior core and the browser front end.

pub mod domain;
pub mod error;
pub mod protocol;
