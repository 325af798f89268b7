//! Chunks: deterministic index-range partitioning for parallel workloads
//!
//! This crate computes which indices of a collection belong to which chunk,
//! so that independent workers can each take one chunk without overlap and
//! without coordination. It performs no scheduling and no parallel execution
//! itself; every computation is pure, so descriptors can be requested from
//! any number of threads concurrently.
//!
//! Two strategies are available: [`Strategy::Batch`] assigns contiguous
//! blocks whose sizes differ by at most one, and [`Strategy::Scatter`]
//! interleaves indices with stride `k`, which spreads positionally-correlated
//! expensive items evenly across chunks.
//!
//! Indices are 1-based, matching the convention of the numeric workloads the
//! crate partitions; subtract 1 (or use [`Chunk::to_vec_0based`]) when
//! indexing Rust slices.
//!
//! # Example
//!
//! Summing a slice across worker threads, one chunk per worker:
//!
//! ```
//! use chunks::{chunks, Strategy};
//!
//! let data: Vec<u64> = (1..=1000).collect();
//! let nworkers = 4;
//!
//! let total: u64 = std::thread::scope(|s| {
//!     let handles: Vec<_> = chunks(data.len(), nworkers, Strategy::Batch)
//!         .unwrap()
//!         .map(|(chunk, _)| {
//!             let data = &data;
//!             s.spawn(move || chunk.indices().map(|i| data[i - 1]).sum::<u64>())
//!         })
//!         .collect();
//!     handles.into_iter().map(|h| h.join().unwrap()).sum()
//! });
//!
//! assert_eq!(total, data.iter().sum::<u64>());
//! ```

pub mod chunks;

// Re-export main types at crate root
pub use crate::chunks::{
    chunk, chunk_of, chunks, chunks_of, Chunk, ChunkError, ChunkIndices, Chunks, Strategy,
};
