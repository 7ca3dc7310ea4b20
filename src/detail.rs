//! Accessors for the full recipe record shown in the detail view.

use serde_json::Value;

use crate::model::RecipeDetail;

/// Number of numbered ingredient slots in a record
pub const INGREDIENT_SLOTS: usize = 20;

/// One ingredient line with its (possibly empty) measure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub ingredient: String,
    pub measure: String,
}

impl RecipeDetail {
    /// Ingredient/measure pairs in slot order, skipping blank ingredients
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let ingredient = self.text_field(&format!("strIngredient{}", i))?;
                let measure = self
                    .text_field(&format!("strMeasure{}", i))
                    .unwrap_or_default();
                Some(Ingredient {
                    ingredient,
                    measure,
                })
            })
            .collect()
    }

    /// Instruction paragraphs, split on line breaks with blank lines dropped
    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect()
    }

    pub fn formatted_instructions(&self) -> String {
        self.instruction_steps().join("\n\n")
    }

    /// Comma-separated tags as a list
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Video link, if the record has a non-empty one
    pub fn video_url(&self) -> Option<&str> {
        non_blank(self.youtube.as_deref())
    }

    /// Original recipe link, if the record has a non-empty one
    pub fn source_url(&self) -> Option<&str> {
        non_blank(self.source.as_deref())
    }

    // Trimmed, non-empty string value of an unmodelled field
    fn text_field(&self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
