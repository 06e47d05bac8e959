//! Pipeline module - orchestrates the unification stages

pub mod columns;
pub mod combine;
pub mod error;
pub mod finalize;
pub mod impute;
pub mod loader;
pub mod schema;
pub mod unify;

pub use columns::*;
pub use combine::*;
pub use error::PipelineError;
pub use finalize::*;
pub use impute::*;
pub use loader::*;
pub use schema::*;
pub use unify::*;
