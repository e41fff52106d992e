//! # `wordpipe` Text Classification Transforms
//!
//! Small, composable transforms for text classification data pipelines.
//!
//! Each transform wraps an already-built collaborator - a pretrained subword
//! model, a vocabulary, a vector table, a tokenizer - and exposes the uniform
//! [`Transform`] call interface, so transforms can be chained.
//!
//! See:
//! * [`capabilities`] for the collaborator traits.
//! * [`transforms`] for [`Transform`] and the composers built on it.
//! * [`functional`] for ``iterate_batch`` / ``vocab_func`` / ``vector_func`` / ``tokenizer_func``.
//! * [`vocab`] for [`StringVocab`] and the vocabulary transforms.
//! * [`tensor`] for id-to-array conversion.
//! * [`vectors`] for [`StaticVectors`].
//! * [`tokenize`] for concrete tokenizers.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use wordpipe::{
//!     RegexTokenizer, StringVocab, TextClassificationPipeline, TextTokenizer, ToLongTensor,
//!     Transform, VocabOptions, functional::vocab_func, transform_fn,
//! };
//!
//! # fn main() -> wordpipe::WPResult<()> {
//! let tokenizer = RegexTokenizer::basic_english()?;
//! let corpus = ["The cat sat.", "The dog ran!"];
//!
//! let vocab: StringVocab<u32> = StringVocab::build_from_iterator(
//!     corpus
//!         .iter()
//!         .map(|line| tokenizer.tokenize(line))
//!         .collect::<wordpipe::WPResult<Vec<_>>>()?,
//!     &VocabOptions::default()
//!         .with_specials(["<unk>"])
//!         .with_default_token(Some("<unk>")),
//! )?;
//!
//! let text_transform = transform_fn(|text: &str| Ok(vec![tokenizer.tokenize(text)?]))
//!     .then(vocab_func(vocab))
//!     .then(transform_fn(|ids: Vec<u32>| Ok(vec![ids])))
//!     .then(ToLongTensor);
//!
//! let label_transform = transform_fn(|label: &str| Ok(u8::from(label == "pos")));
//!
//! let pipeline = TextClassificationPipeline::new(label_transform, text_transform);
//! let (label, tensor) = pipeline.apply(("pos", "The cat ran."))?;
//!
//! assert_eq!(label, 1);
//! assert_eq!(tensor.dim(), (1, 4));
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub mod capabilities;
pub mod errors;
pub mod functional;
pub mod tensor;
pub mod tokenize;
pub mod transforms;
pub mod types;
pub mod vectors;
pub mod vocab;

#[doc(inline)]
pub use capabilities::{SubwordModel, TextTokenizer, VectorTable, Vocabulary};
#[doc(inline)]
pub use errors::{WPResult, WordpipeError};
#[doc(inline)]
pub use tensor::{ToLongTensor, to_long_tensor};
#[doc(inline)]
pub use tokenize::{RegexTokenizer, WhitespaceTokenizer};
#[doc(inline)]
pub use transforms::{
    Chain, FnTransform, Identity, IterateBatch, TextClassificationPipeline, Transform,
    iterate_batch, transform_fn,
};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vectors::{StaticVectors, VectorOptions};
#[doc(inline)]
pub use vocab::{
    PretrainedSubwordVocab, ScriptVocabTransform, StringVocab, VocabOptions, VocabTransform,
};
