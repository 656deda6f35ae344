//! `fskit_io_fs` v1:
//! Small synchronous filesystem convenience library.
//!
//! Modules:
//! - `copy`   : recursive tree copy with destination-path derivation
//! - `read`   : bounded head reads with UTF-8-safe decoding
//! - `check`  : directory emptiness inspection
//! - `remove` : shallow folder content cleanup
//! - `spec`   : shared error taxonomy
//! - `util`   : shared helper functions
//!
//! All operations block on filesystem I/O and keep no state between calls;
//! callers needing parallelism run invocations on their own threads.

pub mod check;
pub mod copy;
pub mod read;
pub mod remove;
pub mod spec;
mod util;

pub use check::is_folder_empty;
pub use copy::{copy_directory, derive_destination_dir};
pub use read::{head, head_to_string, head_to_string_with_message};
pub use remove::cleanup_folder;
pub use spec::FsOpError;
