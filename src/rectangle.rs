use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Two opposite corners, `(a, b)` and `(c, d)`, of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rectangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Rectangle {
    pub fn area(&self) -> f64 {
        let width = (self.c - self.a).abs();
        let height = (self.d - self.b).abs();
        width * height
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }
}
