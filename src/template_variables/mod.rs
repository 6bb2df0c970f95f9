mod authors;
mod project_dir;
pub mod project_name;

pub use authors::{get_authors, Authors};
pub use project_dir::ProjectDir;
pub use project_name::ProjectName;
