#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the header-guard binary.
#[macro_export]
macro_rules! header_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("header-guard"))
    };
}

pub const JS_TEMPLATE: &str = "/* Copyright (c) {year} Example Corp */\n";
pub const SH_TEMPLATE: &str = "# Copyright (c) {year} Example Corp\n";

/// A temporary project with a `headers/` template directory.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture whose template directory holds `.js` and `.sh` headers.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_file("headers/copyright.js", JS_TEMPLATE);
        fixture.create_file("headers/copyright.sh", SH_TEMPLATE);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn headers_dir(&self) -> PathBuf {
        self.dir.path().join("headers")
    }

    /// Command running inside the fixture with its template directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = crate::header_guard!();
        cmd.current_dir(self.path())
            .env_remove("HEADER_GUARD_HEADERS")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("--headers")
            .arg(self.headers_dir());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The JS template as it is inserted this year.
pub fn js_header_this_year() -> String {
    use chrono::Datelike;
    JS_TEMPLATE.replace("{year}", &chrono::Local::now().year().to_string())
}
