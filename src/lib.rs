//! # Spacetab
//!
//! `spacetab` converts the whitespace conventions of text files: leading spaces to
//! tabs or tabs to spaces, and Unix line endings to DOS or back. It works on a single
//! file or on every regular file in a directory, optionally recursively.
//!
//! Each file is read into memory, rewritten in one left-to-right pass ([`transform`]),
//! and written back through a temporary file that is renamed over the original.
//! Nothing checks whether a file is text; binary files are converted like any other.
//!
//! # Features
//!
//! - `parallel`: Converts files on a Rayon thread pool.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use spacetab::{LineMode, SpaceMode, SpacetabBuilder, spacetab};
//!
//! let options = SpacetabBuilder::new("src")
//!     .recursive(true)
//!     .spaces_per_tab(4)
//!     .space_mode(SpaceMode::SpacesToTabs)
//!     .line_mode(LineMode::ToUnix)
//!     .build();
//!
//! let report = spacetab(options).expect("Invalid options");
//!
//! for file in report.converted() {
//!     println!("Converted: {}", file.path.display());
//! }
//! ```

mod buffer;
mod engine;
mod error;
mod options;
pub mod output;
pub mod paths;
mod transform;
mod types;
mod walker;

pub use engine::{convert_file, enumerate_entries, spacetab};
pub use error::{FailureKind, SpacetabError};
pub use options::{
    ConversionConfig, DEFAULT_SPACES_PER_TAB, LineMode, SpaceMode, SpacetabBuilder,
    SpacetabOptions,
};
pub use transform::transform;
pub use types::{ConversionReport, EntryKind, FileEntry, FileFailure, FileReport, FileStatus};
