//! Interaction with the operator.
//!
//! The relocation operations never read stdin themselves; frontends provide
//! a [`Prompter`] that asks the questions however suits them.

use std::io;
use std::path::PathBuf;

/// Interactive decisions an operation may need from the operator.
pub trait Prompter {
    /// Ask a yes/no question. `false` aborts the operation with no changes.
    fn confirm(&self, message: &str) -> io::Result<bool>;

    /// Let the operator pick any number of `options` by index.
    ///
    /// Returned indices are used in the order given; an empty selection
    /// aborts the operation.
    fn select(&self, header: &str, options: &[String]) -> io::Result<Vec<usize>>;

    /// Ask for a filesystem path. `None` means no answer was given.
    fn input_path(&self, prompt: &str) -> io::Result<Option<PathBuf>>;
}
