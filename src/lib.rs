//! Integer sorting through a binary trie ("bitrie").
//!
//! Each value is inserted into a binary trie keyed on its bits, most significant first, with a
//! counter at the terminal node. An in-order walk of the trie then visits the values in ascending
//! order, and each is emitted as many times as it was inserted.
//!
//! ```rust
//! assert_eq!(
//!     bitrie::sort(&[128u8, 64, 32, 16, 8, 4, 2, 1]),
//!     vec![1, 2, 4, 8, 16, 32, 64, 128]
//! );
//! ```
//!
//! Memory use is one node per distinct bit prefix, so at most `distinct values * bit width`
//! nodes. Keys may be any primitive integer up to `u128`.

pub mod error;
pub mod iter;
pub mod keys;
mod node;
pub mod sorter;
pub mod tree;

pub use error::SortError;
pub use keys::BitKey;
pub use sorter::{sort, try_sort, BitWidth, Sorter};
pub use tree::{Bitrie, TrieStats};
