//! Domain types for postdraft
//!
//! A generation is a single request/response exchange: the request carries the
//! topic and style knobs, the result carries the filtered drafts and a token
//! estimate. Neither outlives the request that created it.

mod request;
mod result;
mod style;

pub use request::{DEFAULT_LENGTH, GenerationRequest, MIN_POST_COUNT};
pub use result::GenerationResult;
pub use style::{Audience, Tone};
