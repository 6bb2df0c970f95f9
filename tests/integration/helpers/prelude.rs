pub use super::binary;
pub use super::project::{tempdir, Project};
pub use predicates::prelude::*;
