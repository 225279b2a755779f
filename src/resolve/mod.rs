//! Reference resolution.
//!
//! The engine that turns raw mode values into token values:
//! - `normalize` - canonical literals (hex/rgba colours, font-weight fix)
//! - `ModeResolver` - which mode of a variable applies in a context
//! - `Resolver` - symbolic references or cycle-safe alias following
//! - `classify` - token kind inference for renderers

mod alias;
mod classify;
mod mode;
mod normalize;

pub use alias::{Layer, PrimitivePathMap, Resolution, Resolver};
pub use classify::classify;
pub use mode::{ModeResolver, ResolutionContext};
pub use normalize::{color_string, normalize};
