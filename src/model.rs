//! Recipe record produced for every complete post

use serde::{Deserialize, Serialize};

/// One recipe extracted from a listing post
///
/// Field order matches the key order of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub author: String,
    /// Free-form date text as shown on the page, never parsed
    pub date: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
