//! # Vocabulary
//!
//! The concrete [`StringVocab`], and the transforms wrapping a [`crate::capabilities::Vocabulary`]:
//! * [`PretrainedSubwordVocab`] - built from a pretrained subword model.
//! * [`VocabTransform`] - nested batch lookup.
//! * [`ScriptVocabTransform`] - flat sequence lookup.

mod pretrained_vocab;
mod string_vocab;
mod vocab_options;
mod vocab_transforms;

#[doc(inline)]
pub use pretrained_vocab::*;
#[doc(inline)]
pub use string_vocab::*;
#[doc(inline)]
pub use vocab_options::*;
#[doc(inline)]
pub use vocab_transforms::*;
