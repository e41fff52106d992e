//! # Static Word Vectors
//!
//! [`StaticVectors`] is an in-memory [`VectorTable`],
//! loadable from ``GloVe`` / ``word2vec`` style text files:
//!
//! ```text
//! 3 4
//! the 0.1 0.2 0.3 0.4
//! cat 0.5 0.6 0.7 0.8
//! sat 0.9 1.0 1.1 1.2
//! ```
//!
//! The optional first ``count dim`` line is skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ndarray::{Array1, Array2};

use crate::{
    capabilities::VectorTable,
    errors::{WPResult, WordpipeError},
    types::WPHashMap,
};

/// Options for loading and querying [`StaticVectors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VectorOptions {
    /// Retry unknown tokens in lowercase before falling back to zeros.
    pub lower_case_backup: bool,

    /// Stop loading after this many vectors.
    pub max_vectors: Option<usize>,
}

impl VectorOptions {
    /// Sets the lowercase fallback.
    pub fn set_lower_case_backup(
        &mut self,
        lower_case_backup: bool,
    ) {
        self.lower_case_backup = lower_case_backup;
    }

    /// Sets the lowercase fallback.
    pub fn with_lower_case_backup(
        mut self,
        lower_case_backup: bool,
    ) -> Self {
        self.set_lower_case_backup(lower_case_backup);
        self
    }

    /// Sets the load limit.
    pub fn set_max_vectors(
        &mut self,
        max_vectors: Option<usize>,
    ) {
        self.max_vectors = max_vectors;
    }

    /// Sets the load limit.
    pub fn with_max_vectors(
        mut self,
        max_vectors: Option<usize>,
    ) -> Self {
        self.set_max_vectors(max_vectors);
        self
    }
}

/// In-memory ``{ token -> [f32; dim] }`` table.
///
/// Unknown tokens map to the zero vector.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticVectors {
    options: VectorOptions,
    stoi: WPHashMap<String, usize>,
    vectors: Array2<f32>,
}

impl StaticVectors {
    /// Build from ``(token, vector)`` entries.
    ///
    /// Repeated tokens keep their first vector.
    ///
    /// ## Arguments
    /// * `dim` - The vector length.
    /// * `entries` - The token vectors.
    /// * `options` - Query options.
    ///
    /// ## Returns
    /// A new table; or `Parse` if an entry is not `dim` long.
    pub fn from_entries<W, S>(
        dim: usize,
        entries: W,
        options: VectorOptions,
    ) -> WPResult<Self>
    where
        W: IntoIterator<Item = (S, Vec<f32>)>,
        S: AsRef<str>,
    {
        let mut stoi: WPHashMap<String, usize> = WPHashMap::default();
        let mut data: Vec<f32> = Vec::new();

        for (token, vector) in entries {
            let token = token.as_ref();
            if vector.len() != dim {
                return Err(WordpipeError::Parse(format!(
                    "vector for {token:?} has length {}, expected {dim}",
                    vector.len()
                )));
            }
            if stoi.contains_key(token) {
                log::debug!("skipping repeated vector for {token:?}");
                continue;
            }
            stoi.insert(token.to_string(), stoi.len());
            data.extend(vector);
        }

        let vectors = Array2::from_shape_vec((stoi.len(), dim), data)?;

        Ok(Self {
            options,
            stoi,
            vectors,
        })
    }

    /// Load from a text reader.
    ///
    /// Each line is ``token v1 v2 ... vN``; blank lines are skipped.
    /// The vector length is taken from the first vector line.
    pub fn from_reader<R: BufRead>(
        reader: R,
        options: VectorOptions,
    ) -> WPResult<Self> {
        let mut dim: Option<usize> = None;
        let mut entries: Vec<(String, Vec<f32>)> = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            if options.max_vectors.is_some_and(|max| entries.len() >= max) {
                break;
            }

            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else {
                continue;
            };
            let fields: Vec<&str> = fields.collect();

            if line_no == 0
                && fields.len() == 1
                && token.parse::<usize>().is_ok()
                && fields[0].parse::<usize>().is_ok()
            {
                continue;
            }

            let vector = fields
                .iter()
                .map(|f| f.parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
                .map_err(|e| WordpipeError::Parse(format!("line {}: {e}", line_no + 1)))?;

            match dim {
                None => dim = Some(vector.len()),
                Some(d) if d != vector.len() => {
                    return Err(WordpipeError::Parse(format!(
                        "line {}: vector length {}, expected {d}",
                        line_no + 1,
                        vector.len()
                    )));
                }
                Some(_) => {}
            }

            entries.push((token.to_string(), vector));
        }

        let vectors = Self::from_entries(dim.unwrap_or(0), entries, options)?;
        log::debug!(
            "loaded {} vectors of dim {}",
            vectors.len(),
            vectors.dim()
        );
        Ok(vectors)
    }

    /// Load from a text file.
    ///
    /// See [`Self::from_reader`].
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        options: VectorOptions,
    ) -> WPResult<Self> {
        let path = path.as_ref();
        log::info!("loading vectors from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?), options)
    }

    /// The number of vectors in the table.
    pub fn len(&self) -> usize {
        self.stoi.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.stoi.is_empty()
    }

    /// The table options.
    pub fn options(&self) -> &VectorOptions {
        &self.options
    }

    fn find(
        &self,
        token: &str,
    ) -> Option<usize> {
        if let Some(&index) = self.stoi.get(token) {
            return Some(index);
        }
        if self.options.lower_case_backup {
            return self.stoi.get(&token.to_lowercase()).copied();
        }
        None
    }

    /// Get the vector for a single token.
    ///
    /// ## Returns
    /// The token's vector, or zeros for unknown tokens.
    pub fn get_vector(
        &self,
        token: &str,
    ) -> Array1<f32> {
        match self.find(token) {
            Some(index) => self.vectors.row(index).to_owned(),
            None => Array1::zeros(self.dim()),
        }
    }
}

impl VectorTable for StaticVectors {
    fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    fn get_vectors<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> WPResult<Array2<f32>> {
        let mut out = Array2::zeros((tokens.len(), self.dim()));
        for (mut row, token) in out.rows_mut().into_iter().zip(tokens) {
            if let Some(index) = self.find(token.as_ref()) {
                row.assign(&self.vectors.row(index));
            }
        }
        Ok(out)
    }
}
