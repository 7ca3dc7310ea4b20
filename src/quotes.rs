use chrono::{Datelike, Local, NaiveDate};

pub const QUOTES: [&str; 10] = [
    "A mother's love is the secret ingredient in every meal.",
    "No recipe is complete without mama's touch.",
    "Mama's cooking is the taste of home.",
    "Every dish tells the story of mama's love.",
    "Mama's hands create flavors that last forever.",
    "The warmth of a meal is the warmth of a mother's heart.",
    "Cooking with love is mama's greatest recipe.",
    "Mama's kitchen is where happiness begins.",
    "A recipe written with love tastes better than gold.",
    "Home is where mama is, and her food too.",
];

/// Quote for the given date; rotates with the day of the month.
pub fn daily_quote(date: NaiveDate) -> &'static str {
    QUOTES[date.day() as usize % QUOTES.len()]
}

pub fn today_quote() -> &'static str {
    daily_quote(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_by_day_of_month() {
        let first = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let tenth = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let eleventh = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();

        assert_eq!(daily_quote(first), QUOTES[1]);
        assert_eq!(daily_quote(tenth), QUOTES[0]);
        assert_eq!(daily_quote(eleventh), daily_quote(first));
    }

    #[test]
    fn test_today_is_one_of_the_quotes() {
        assert!(QUOTES.contains(&today_quote()));
    }
}
