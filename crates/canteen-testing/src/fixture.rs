//! Request-body fixtures under `fixtures/http/`.

use std::path::{Path, PathBuf};

use serde_json::Value;

pub struct Fixture;

impl Fixture {
    /// Load `fixtures/http/<name>.json`.
    ///
    /// ```no_run
    /// use canteen_testing::fixture::Fixture;
    /// let body = Fixture::request("user_signup");
    /// ```
    pub fn request(name: &str) -> Value {
        let path = fixtures_dir().join("http").join(format!("{name}.json"));
        let contents = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("fixture {} unreadable: {e}", path.display()));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("fixture {name} is not JSON: {e}"))
    }

    /// Load a request body and replace top-level keys.
    pub fn request_with(name: &str, overrides: &[(&str, Value)]) -> Value {
        let mut body = Self::request(name);
        let Some(object) = body.as_object_mut() else {
            panic!("fixture {name} is not a JSON object");
        };
        for (key, value) in overrides {
            object.insert((*key).to_owned(), value.clone());
        }
        body
    }
}

/// Nearest ancestor of the calling crate that holds a `fixtures/` directory.
fn fixtures_dir() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().expect("current dir"));
    start
        .ancestors()
        .map(|dir| dir.join("fixtures"))
        .find(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new("fixtures").to_path_buf())
}
