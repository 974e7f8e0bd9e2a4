//! Recipe extraction from a single listing post
//!
//! Each post must carry all five field markers. A post missing any of them
//! is reported as incomplete and skipped by the caller; it never produces a
//! partial record.

use crate::config::{parse_selector, SelectorConfig};
use crate::model::Recipe;
use crate::ConfigError;
use scraper::{ElementRef, Selector};

/// Outcome of extracting one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Every field was found
    Complete(Recipe),

    /// One or more field markers were absent
    Incomplete {
        /// Names of the missing fields, in record order
        missing: Vec<&'static str>,
    },
}

impl Extraction {
    /// Returns the recipe if the post was complete
    pub fn into_recipe(self) -> Option<Recipe> {
        match self {
            Self::Complete(recipe) => Some(recipe),
            Self::Incomplete { .. } => None,
        }
    }
}

/// Extracts recipes from post elements using compiled field selectors
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    title: Selector,
    author: Selector,
    date: Selector,
    ingredients: Selector,
    instructions: Selector,
}

impl RecordExtractor {
    /// Compiles the field selectors
    ///
    /// # Returns
    ///
    /// * `Ok(RecordExtractor)` - All selectors compiled
    /// * `Err(ConfigError)` - A selector is empty or not valid CSS
    pub fn new(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title: parse_selector("title", &config.title)?,
            author: parse_selector("author", &config.author)?,
            date: parse_selector("date", &config.date)?,
            ingredients: parse_selector("ingredients", &config.ingredients)?,
            instructions: parse_selector("instructions", &config.instructions)?,
        })
    }

    /// Extracts a recipe from one post element
    ///
    /// Each field is the first descendant of `post` matching its selector.
    /// Text fields are trimmed; list fields are the trimmed, non-empty text
    /// nodes of the block in document order.
    pub fn extract(&self, post: ElementRef<'_>) -> Extraction {
        let title = post.select(&self.title).next();
        let author = post.select(&self.author).next();
        let date = post.select(&self.date).next();
        let ingredients = post.select(&self.ingredients).next();
        let instructions = post.select(&self.instructions).next();

        match (title, author, date, ingredients, instructions) {
            (Some(title), Some(author), Some(date), Some(ingredients), Some(instructions)) => {
                Extraction::Complete(Recipe {
                    title: element_text(title),
                    author: element_text(author),
                    date: element_text(date),
                    ingredients: text_fragments(ingredients),
                    instructions: text_fragments(instructions),
                })
            }
            (title, author, date, ingredients, instructions) => {
                let missing = [
                    ("title", title.is_none()),
                    ("author", author.is_none()),
                    ("date", date.is_none()),
                    ("ingredients", ingredients.is_none()),
                    ("instructions", instructions.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();

                Extraction::Incomplete { missing }
            }
        }
    }
}

/// Trimmed text content of an element
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed, non-empty text nodes of an element in document order
fn text_fragments(element: ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}
