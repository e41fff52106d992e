//! # Transforms
//!
//! The uniform call interface, [`Transform`], and the composers built on it:
//! * [`Identity`], [`FnTransform`], and [`Chain`] for basic composition.
//! * [`IterateBatch`] to apply a transform per batch item.
//! * [`TextClassificationPipeline`] to transform ``(label, text)`` pairs.

mod iterate_batch;
mod text_classification;
mod transform;

#[doc(inline)]
pub use iterate_batch::*;
#[doc(inline)]
pub use text_classification::*;
#[doc(inline)]
pub use transform::*;
