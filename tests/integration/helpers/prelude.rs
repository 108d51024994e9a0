pub use super::fake_tools::FakeTools;
pub use super::project_builder::tempdir;
pub use super::{binary, output_contains, CreateArgs};
pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;
