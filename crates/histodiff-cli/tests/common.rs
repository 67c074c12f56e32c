//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const BEFORE: &str = "\
 num     #instances         #bytes  class name
----------------------------------------------
   1:            10            100  com.example.Foo
   2:             3             30  com.example.Bar
   3:             1             16  com.example.Same
Total            14            146
";

pub const AFTER: &str = "\
 num     #instances         #bytes  class name
----------------------------------------------
   1:            15            150  com.example.Foo
   2:             1             16  com.example.Same
   3:             2            512  com.example.New Thing
Total            18            678
";

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Write a histogram dump into the fixture directory
    pub fn write_histogram(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write histogram");
        path
    }

    /// Standard before/after pair
    pub fn sample_pair(&self) -> (PathBuf, PathBuf) {
        (
            self.write_histogram("before.histo", BEFORE),
            self.write_histogram("after.histo", AFTER),
        )
    }

    pub fn missing_path(&self) -> PathBuf {
        self.temp_dir.path().join("does-not-exist.histo")
    }

    pub fn command(&self) -> Command {
        assert_cmd::cargo::cargo_bin_cmd!("histodiff")
    }
}
