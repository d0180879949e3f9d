//! View selection and action routing

pub mod coordinator;
pub mod selection;

pub use coordinator::ViewCoordinator;
pub use selection::{FetchRequest, ViewSelection};
