//! Common test utilities for routepack integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test application tree for integration tests
#[allow(dead_code)]
pub struct TestApp {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the application root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestApp {
    /// Create an empty application root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create an application with a users route and convention-matched files
    pub fn with_users_fixture() -> Self {
        let app = Self::new();
        app.write_file(
            "config/routes.json",
            r#"[
                {"path": "/users(.:format)", "verb": "GET", "name": "users",
                 "defaults": {"controller": "users", "action": "index"}},
                {"path": "/users/:id(.:format)", "verb": "GET", "name": "user",
                 "defaults": {"controller": "users", "action": "show"}},
                {"path": "/rails/info", "verb": "GET",
                 "defaults": {"controller": "rails/info", "action": "index"}}
            ]"#,
        );
        app.write_file(
            "app/controllers/users_controller.rb",
            "class UsersController < ApplicationController\n  def index\n    @users = User.all\n  end\nend\n",
        );
        app.write_file("app/views/users/index.html.erb", "<h1>Users</h1>\n");
        app.write_file("app/models/user.rb", "class User < ApplicationRecord\nend\n");
        app
    }

    /// Command invoking the routepack binary against this application root
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("routepack").expect("binary builds");
        cmd.arg("-C").arg(&self.path);
        cmd
    }

    /// Write a file relative to the application root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the application root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists relative to the application root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of the bundles currently in the store
    pub fn bundle_names(&self) -> Vec<String> {
        let store = self.path.join("route_extracts");
        if !store.is_dir() {
            return Vec::new();
        }
        let mut names: Vec<String> = std::fs::read_dir(&store)
            .expect("Failed to read store")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Handcraft a dated bundle with a minimal well-formed manifest
    ///
    /// `name` follows `{grouping}_{action}_{YYYYMMDD}_{HHMMSS}`.
    pub fn write_bundle(&self, name: &str) {
        let bundle = format!("route_extracts/{name}");
        self.write_file(&format!("{bundle}/models/user.rb"), "class User; end\n");
        self.write_file(
            &format!("{bundle}/manifest.json"),
            r#"{
  "version": "0.1.0",
  "generated_at": "2026-08-01T12:00:00Z",
  "route": {
    "grouping": "users",
    "action": "index",
    "http_method": "GET",
    "display_name": "users",
    "raw_path": "/users(.:format)"
  },
  "options": {
    "mode": "mvc",
    "include_packages": true,
    "include_tests": false,
    "categories": ["models"]
  },
  "files": {
    "count": 1,
    "list": ["models/user.rb"]
  },
  "size": {
    "total_formatted": "15 B",
    "by_type": {".rb": 1}
  }
}
"#,
        );
    }
}
