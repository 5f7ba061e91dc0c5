//! Standard voices.
//!
//! One variant per file. Each implements [`Voice`] with a line fixed at
//! construction; none carries mutable state or a lifecycle beyond
//! construction and drop.
//!
//! [`Voice`]: menagerie_core::Voice

mod cat;
mod dog;

pub use cat::Cat;
pub use dog::Dog;
