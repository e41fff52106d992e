//! # Testing Tools

use crate::{
    capabilities::SubwordModel,
    errors::{WPResult, WordpipeError},
};

/// A [`SubwordModel`] backed by a fixed piece list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceListModel {
    pieces: Vec<String>,
    unknown_id: usize,
}

impl PieceListModel {
    /// Create a new model.
    ///
    /// ## Arguments
    /// * `pieces` - The pieces, in model-id order.
    /// * `unknown_id` - The id of the unknown piece.
    pub fn new<W, S>(
        pieces: W,
        unknown_id: usize,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            pieces: pieces.into_iter().map(|s| s.as_ref().to_string()).collect(),
            unknown_id,
        }
    }
}

impl SubwordModel for PieceListModel {
    fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    fn id_to_piece(
        &self,
        id: usize,
    ) -> WPResult<String> {
        self.pieces
            .get(id)
            .cloned()
            .ok_or(WordpipeError::IndexOutOfRange {
                index: id,
                len: self.pieces.len(),
            })
    }

    fn unknown_id(&self) -> usize {
        self.unknown_id
    }
}
