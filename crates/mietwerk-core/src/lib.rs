pub mod clauses;
pub mod context;
pub mod error;
pub mod format;
pub mod keys;
pub mod model;
pub mod normalize;
pub mod validate;

pub use context::{RenderContext, RenderValue, build_render_context};
pub use error::ClauseError;
pub use model::{Decisions, Facts};
pub use validate::{ValidationReport, validate};
