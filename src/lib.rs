//! # Seqsort
//!
//! `seqsort` sorts two small sequences and prints them before and after, to show how a
//! caller has to tell a sort routine where a sequence ends.
//!
//! - A **bounded integer sequence** ([`IntArray`]) is handed to the sort as a start of run
//!   ([`RunStart`]) that has no length of its own. The caller passes the count it declared.
//! - A **dynamic character sequence** (`Vec<char>`) carries its own length. It can be handed
//!   over as a copy ([`sort_by_value`], the caller sees nothing change) or as a borrow
//!   ([`sort_by_ref`], the caller sees it sorted).
//!
//! ## Usage
//!
//! ```rust
//! use seqsort::prelude::*;
//!
//! let mut array = IntArray::demo();
//! sort_run(array.run_start(), IntArray::num_elements()).unwrap();
//! assert_eq!(array.as_slice(), &[2, 10, 10, 35, 43, 62, 77, 85, 93, 345]);
//!
//! let mut chars = DEMO_CHARS.to_vec();
//! sort_by_value(chars.clone(), |_| ());
//! assert_eq!(chars, DEMO_CHARS);
//!
//! sort_by_ref(&mut chars);
//! assert_eq!(chars, [' ', 'a', 'b', 'o', 'o', 't', 't', 'y']);
//! ```
//!
//! ## The element count pitfall
//!
//! A callee that works out the count from the width of its start reference gets
//! [`RunStart::decayed_count`], which is 2 on 64-bit targets no matter how long the run is.
//! Sorting with it only sorts a prefix:
//!
//! ```rust
//! use seqsort::prelude::*;
//!
//! let mut array = IntArray::demo();
//! let count = RunStart::<i32>::decayed_count();
//! sort_run(array.run_start(), count).unwrap();
//! assert!(!is_ascending(array.as_slice()));
//! ```
//!
//! A count past the end of the run is refused with [`SortError::CountOutOfBounds`].

pub mod algo;
pub mod core;
pub mod demo;
pub mod display;
pub mod error;
pub use crate::algo::{is_ascending, sort_by_ref, sort_by_value, sort_run};
pub use crate::core::{DEMO_CHARS, DEMO_INTS, DisplayElement, IntArray, Label, RunStart};
pub use crate::demo::Demo;
pub use crate::error::{DemoError, SortError};

pub mod prelude {
    pub use crate::algo::{is_ascending, sort_by_ref, sort_by_value, sort_run};
    pub use crate::core::{DEMO_CHARS, DEMO_INTS, IntArray, RunStart};
    pub use crate::error::SortError;
}
