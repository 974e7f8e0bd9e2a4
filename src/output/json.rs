//! JSON export of scraped recipes
//!
//! Recipes are written as a pretty-printed array (2-space indentation) with
//! non-ASCII text kept verbatim.

use crate::model::Recipe;
use crate::output::OutputResult;
use std::fs;
use std::path::Path;

/// Writes recipes to `output_path` as a JSON array
///
/// # Arguments
///
/// * `recipes` - The recipes, in scrape order
/// * `output_path` - Path where the JSON file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(OutputError)` - Failed to serialize or write
pub fn write_recipes_json(recipes: &[Recipe], output_path: &Path) -> OutputResult<()> {
    let json = format_recipes_json(recipes)?;
    fs::write(output_path, json)?;
    Ok(())
}

/// Formats recipes as a pretty-printed JSON array
pub fn format_recipes_json(recipes: &[Recipe]) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(recipes)?)
}
