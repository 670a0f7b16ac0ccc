//! Glue between the DOM and `client_core`: element binding, the `Surface`
//! implementation, and the runtime that arms scheduled tasks.

pub mod elements;
pub mod runtime;
pub mod surface;

pub use elements::Elements;
pub use runtime::Runtime;
pub use surface::WebSurface;
