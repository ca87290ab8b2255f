//! Platform-agnostic logic behind the results view.

pub mod format;
pub mod image;
pub mod registry;

pub use image::{Attempt, ImageResolver, ImageSource, ImageStatus, Transition};
pub use registry::{ImageSignal, ItemKey, LoadOutcome, ResolverRegistry};
