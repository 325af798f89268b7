//! Chunk descriptor computation
//!
//! Produces chunk descriptors (contiguous intervals or strided index
//! sequences) that partition the 1-based index range `[1, n]` into `k`
//! pieces, for use with parallel execution. Chunk numbering depends only on
//! the call arguments, never on any runtime thread identity, so the same
//! arguments always describe the same work.

use std::fmt;
use std::iter::FusedIterator;
use thiserror::Error;

/// Errors that can occur during chunk computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk count must be greater than 0")]
    InvalidChunkCount,

    #[error("chunk index {i} out of bounds, expected 1..={k}")]
    ChunkIndexOutOfBounds { i: usize, k: usize },
}

/// Strategy for assigning indices to chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Consecutive indices per chunk (e.g., [1-100], [101-200], ...)
    /// Good for cache locality when accessing contiguous memory regions
    #[default]
    Batch,

    /// Interleaved indices across chunks (e.g., [1,4,7,...], [2,5,8,...], ...)
    /// Good for load balancing when per-index cost correlates with position
    Scatter,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Batch => write!(f, "batch"),
            Strategy::Scatter => write!(f, "scatter"),
        }
    }
}

/// A single chunk descriptor over the 1-based index range `[1, n]`
///
/// Chunks are either:
/// - A contiguous inclusive interval of indices
/// - A strided set of indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// Contiguous inclusive interval [start, stop]; empty when stop < start
    Interval { start: usize, stop: usize },

    /// Strided indices: start, start+step, start+2*step, ... (count of them)
    Strided {
        start: usize,
        step: usize,
        count: usize,
    },
}

impl Chunk {
    /// Returns the number of indices in this chunk
    pub fn len(&self) -> usize {
        match self {
            Chunk::Interval { start, stop } => (stop + 1).saturating_sub(*start),
            Chunk::Strided { count, .. } => *count,
        }
    }

    /// Returns true if this chunk has no indices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `index` is a member of this chunk
    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Chunk::Interval { start, stop } => index >= start && index <= stop,
            Chunk::Strided { start, step, count } => {
                count > 0
                    && index >= start
                    && index <= start + (count - 1) * step
                    && (index - start) % step == 0
            }
        }
    }

    /// Returns the first and last member indices, or `None` if empty
    pub fn bounds(&self) -> Option<(usize, usize)> {
        match *self {
            Chunk::Interval { start, stop } if stop >= start => Some((start, stop)),
            Chunk::Strided { start, step, count } if count > 0 => {
                Some((start, start + (count - 1) * step))
            }
            _ => None,
        }
    }

    /// Returns an iterator over the member indices in increasing order
    pub fn indices(&self) -> ChunkIndices {
        match *self {
            Chunk::Interval { start, stop } => ChunkIndices {
                next: start,
                step: 1,
                remaining: (stop + 1).saturating_sub(start),
            },
            Chunk::Strided { start, step, count } => ChunkIndices {
                next: start,
                step,
                remaining: count,
            },
        }
    }

    /// Returns the 1-based member indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.indices().collect()
    }

    /// Returns the member indices shifted to 0-based (for slice indexing)
    pub fn to_vec_0based(&self) -> Vec<usize> {
        self.indices().map(|i| i - 1).collect()
    }
}

/// Iterator over the member indices of a chunk
#[derive(Debug, Clone)]
pub struct ChunkIndices {
    next: usize,
    step: usize,
    remaining: usize,
}

impl Iterator for ChunkIndices {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            None
        } else {
            let val = self.next;
            self.next += self.step;
            self.remaining -= 1;
            Some(val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ChunkIndices {}

impl FusedIterator for ChunkIndices {}

/// Compute the batch chunk for index i (1-based)
///
/// The first `n % k` chunks get one extra element, so no two chunks differ
/// in size by more than 1 and larger chunks always come first. Start and
/// stop are closed-form in i, keeping the computation O(1).
fn batch_chunk(n: usize, k: usize, i: usize) -> Chunk {
    let q = n / k;
    let r = n % k;
    if i <= r {
        let start = (i - 1) * (q + 1) + 1;
        Chunk::Interval {
            start,
            stop: start + q,
        }
    } else {
        // q == 0 (n < k) makes this interval empty: [n+1, n]
        let start = r * (q + 1) + (i - 1 - r) * q + 1;
        Chunk::Interval {
            start,
            stop: start + q - 1,
        }
    }
}

/// Compute the scatter chunk for index i (1-based)
///
/// Chunk i holds {i, i+k, i+2k, ...} intersected with [1, n].
fn scatter_chunk(n: usize, k: usize, i: usize) -> Chunk {
    let count = if n >= i { (n - i) / k + 1 } else { 0 };
    Chunk::Strided {
        start: i,
        step: k,
        count,
    }
}

/// Compute the descriptor of chunk `i` of `k` over the index range `[1, n]`
///
/// # Arguments
///
/// * `n` - Total number of items being chunked (0 is valid)
/// * `k` - Number of chunks (must be >= 1; `k > n` yields empty chunks)
/// * `i` - Which chunk, 1-based (must be in `1..=k`)
/// * `strategy` - How indices are assigned to chunks
///
/// # Returns
///
/// The chunk descriptor, or an error if `k` or `i` is out of range.
///
/// For fixed `(n, k, strategy)`, the descriptors for `i = 1..=k` partition
/// `[1, n]` exactly: every index belongs to exactly one chunk.
///
/// # Example
///
/// ```
/// use chunks::{chunk, Chunk, Strategy};
///
/// let c = chunk(7, 3, 1, Strategy::Batch).unwrap();
/// assert_eq!(c, Chunk::Interval { start: 1, stop: 3 });
///
/// let c = chunk(7, 3, 1, Strategy::Scatter).unwrap();
/// assert_eq!(c.to_vec(), vec![1, 4, 7]);
/// ```
pub fn chunk(n: usize, k: usize, i: usize, strategy: Strategy) -> Result<Chunk, ChunkError> {
    if k == 0 {
        return Err(ChunkError::InvalidChunkCount);
    }
    if i == 0 || i > k {
        return Err(ChunkError::ChunkIndexOutOfBounds { i, k });
    }

    Ok(match strategy {
        Strategy::Batch => batch_chunk(n, k, i),
        Strategy::Scatter => scatter_chunk(n, k, i),
    })
}

/// Compute the chunk of `items` for chunk index `i` of `k`
///
/// Takes `n` from `items.len()`; the returned descriptor holds 1-based
/// indices (use [`Chunk::to_vec_0based`] or subtract 1 when indexing).
pub fn chunk_of<T>(items: &[T], k: usize, i: usize, strategy: Strategy) -> Result<Chunk, ChunkError> {
    chunk(items.len(), k, i, strategy)
}

/// Lazy iterator over all `k` chunks of `[1, n]`, in chunk-index order
///
/// Yields `(Chunk, i)` pairs for `i = 1..=k`. Cloning restarts the sequence;
/// iteration holds no state beyond the two cursors.
#[derive(Debug, Clone)]
pub struct Chunks {
    n: usize,
    k: usize,
    strategy: Strategy,
    front: usize,
    back: usize,
}

impl Chunks {
    fn descriptor(&self, i: usize) -> Chunk {
        match self.strategy {
            Strategy::Batch => batch_chunk(self.n, self.k, i),
            Strategy::Scatter => scatter_chunk(self.n, self.k, i),
        }
    }
}

impl Iterator for Chunks {
    type Item = (Chunk, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        Some((self.descriptor(i), i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back + 1).saturating_sub(self.front);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Chunks {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let i = self.back;
        self.back -= 1;
        Some((self.descriptor(i), i))
    }
}

impl ExactSizeIterator for Chunks {}

impl FusedIterator for Chunks {}

/// Enumerate all `k` chunks of the index range `[1, n]`
///
/// Returns a lazy iterator of `(Chunk, i)` pairs in increasing order of `i`.
/// Invalid arguments fail here, before the first element is produced.
///
/// # Example
///
/// ```
/// use chunks::{chunks, Strategy};
///
/// let sizes: Vec<usize> = chunks(7, 3, Strategy::Batch)
///     .unwrap()
///     .map(|(c, _)| c.len())
///     .collect();
/// assert_eq!(sizes, vec![3, 2, 2]);
/// ```
pub fn chunks(n: usize, k: usize, strategy: Strategy) -> Result<Chunks, ChunkError> {
    if k == 0 {
        return Err(ChunkError::InvalidChunkCount);
    }
    Ok(Chunks {
        n,
        k,
        strategy,
        front: 1,
        back: k,
    })
}

/// Enumerate all `k` chunks of `items`, taking `n` from `items.len()`
pub fn chunks_of<T>(items: &[T], k: usize, strategy: Strategy) -> Result<Chunks, ChunkError> {
    chunks(items.len(), k, strategy)
}
