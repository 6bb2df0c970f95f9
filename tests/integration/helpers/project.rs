use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

/// A scratch directory the binary runs against, with helpers to seed and
/// inspect its contents.
pub struct Project {
    pub root: TempDir,
}

pub fn tempdir() -> Project {
    Project {
        root: tempfile::Builder::new()
            .prefix("project-creator")
            .tempdir()
            .unwrap(),
    }
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root.path().join(path).exists()
    }

    pub fn read(&self, path: &str) -> String {
        let path = self.root.path().join(path);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("couldn't read file {path:?}"))
    }

    pub fn file(self, name: &str, contents: impl AsRef<str>) -> Self {
        let path = self.root.path().join(name);
        let parent = path
            .parent()
            .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));

        fs::create_dir_all(parent)
            .unwrap_or_else(|_| panic!("couldn't create {parent:?} directory"));

        fs::File::create(&path)
            .unwrap_or_else(|_| panic!("couldn't create file {path:?}"))
            .write_all(contents.as_ref().as_bytes())
            .unwrap_or_else(|_| panic!("couldn't write to file {path:?}"));

        self
    }
}
