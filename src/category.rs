/// Ingredient terms that also pull in a slice of a broader category.
pub const CATEGORY_ALIASES: [(&str, &str); 6] = [
    ("chicken", "Chicken"),
    ("meat", "Beef"),
    ("cheese", "Miscellaneous"),
    ("pasta", "Pasta"),
    ("tomato", "Vegetarian"),
    ("fish", "Seafood"),
];

/// Returns the category mapped to `term`, if the lowercased term is an exact alias.
pub fn category_for(term: &str) -> Option<&'static str> {
    let lowered = term.to_lowercase();
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, category)| *category)
}
