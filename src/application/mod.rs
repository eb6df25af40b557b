//! Application layer: use cases on top of the domain
//!
//! Turns textual tree input and settings into traversal reports.

pub mod error;
pub mod error_ext;
pub mod traverse;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use traverse::{TraversalReport, TraversalService};
