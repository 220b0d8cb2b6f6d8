//! Numeric and temporal entity patterns.
//!
//! Matches MONEY, PERCENT, TIME, DATE, QUANTITY, ORDINAL and CARDINAL spans
//! over a tagged token sequence. At each position the labels are tried in that
//! order and the first match wins, so "$5 million" is money rather than a
//! cardinal and "2 hours" is a time rather than a date.

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

use crate::analysis::ner::{Entity, EntityLabel};

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "hundredth", "thousandth", "millionth",
];

static NUMBER_WORD_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| NUMBER_WORDS.iter().copied().collect());

static ORDINAL_WORD_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| ORDINAL_WORDS.iter().copied().collect());

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d{1,3}(,\d{3})+|\d+)(\.\d+)?$|^\.\d+$").expect("valid number pattern")
});

static CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").expect("valid clock pattern")
});

static CLOCK_WITH_MERIDIEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(1[0-2]|0?[1-9])(:[0-5]\d)?(am|pm)$").expect("valid meridiem pattern")
});

static NUMERIC_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+(st|nd|rd|th)$").expect("valid ordinal pattern"));

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(1[1-9]|20)\d{2}$").expect("valid year pattern"));

static DECADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((1[1-9]|20)?\d0s|'\d0s)$").expect("valid decade pattern"));

static MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+(\.\d+)?(km|kg|cm|mm|mg|ml|lbs?|mph|kph|kmh|gb|mb|kb|tb|ghz|mhz|kw|mw)$")
        .expect("valid measurement pattern")
});

const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥", "₹", "US$", "C$", "A$"];

const CURRENCY_WORDS: &[&str] = &[
    "dollar", "dollars", "euro", "euros", "cent", "cents", "yen", "yuan", "rupee", "rupees",
    "bucks", "usd", "eur", "gbp", "jpy", "francs", "pesos", "won", "bitcoin", "bitcoins",
];

const PERCENT_WORDS: &[&str] = &["%", "percent", "pct"];

const TIME_UNITS: &[&str] = &[
    "second", "seconds", "minute", "minutes", "hour", "hours", "min", "mins", "hrs",
];

const DATE_UNITS: &[&str] = &[
    "day", "days", "week", "weeks", "month", "months", "year", "years", "decade", "decades",
    "century", "centuries", "weekend", "weekends", "quarter", "quarters",
];

const DAY_PARTS: &[&str] = &["morning", "afternoon", "evening", "night", "tonight"];

const QUANTITY_UNITS: &[&str] = &[
    "km", "kilometer", "kilometers", "kilometre", "kilometres", "mile", "miles", "meter",
    "meters", "metre", "metres", "cm", "centimeters", "mm", "millimeters", "foot", "feet", "ft",
    "inch", "inches", "yard", "yards", "kg", "kilogram", "kilograms", "gram", "grams", "g",
    "pound", "pounds", "lb", "lbs", "ounce", "ounces", "oz", "ton", "tons", "tonnes", "liter",
    "liters", "litre", "litres", "gallon", "gallons", "ml", "degree", "degrees", "mph",
    "acre", "acres", "hectare", "hectares", "gb", "mb", "tb", "kb", "gigabytes", "megabytes",
    "terabytes", "watts", "kilowatts", "volts", "calories",
];

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.",
    "Sep.", "Sept.", "Oct.", "Nov.", "Dec.",
];

const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const RELATIVE_DAYS: &[&str] = &["today", "yesterday", "tomorrow"];

const RELATIVE_MODIFIERS: &[&str] = &["last", "next", "this", "past", "coming", "previous"];

const HOLIDAYS: &[&[&str]] = &[
    &["New", "Year", "'s", "Eve"],
    &["New", "Year", "'s", "Day"],
    &["New", "Year", "'s"],
    &["Christmas", "Eve"],
    &["Christmas"],
    &["Easter"],
    &["Thanksgiving"],
    &["Halloween"],
    &["Ramadan"],
    &["Hanukkah"],
    &["Diwali"],
    &["Independence", "Day"],
    &["Valentine", "'s", "Day"],
];

/// Words before a bare month name that make it a date ("in May").
const MONTH_CONTEXT: &[&str] = &["in", "on", "since", "until", "by", "of", "during", "early", "late", "mid", "last", "next", "this"];

const SCALE_WORDS: &[&str] = &["hundred", "thousand", "million", "billion", "trillion", "dozen"];

/// Find every pattern entity in `words`, left to right, without overlaps.
///
/// `tags` are the Penn Treebank tags aligned with `words`.
pub fn find_all(words: &[&str], tags: &[&str]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut i = 0;
    while i < words.len() {
        match match_at(words, tags, i) {
            Some(entity) => {
                i = entity.end;
                entities.push(entity);
            }
            None => i += 1,
        }
    }
    entities
}

/// The highest priority pattern entity starting at token `i`.
pub fn match_at(words: &[&str], tags: &[&str], i: usize) -> Option<Entity> {
    let matchers: [(EntityLabel, fn(&[&str], &[&str], usize) -> Option<usize>); 7] = [
        (EntityLabel::Money, money),
        (EntityLabel::Percent, percent),
        (EntityLabel::Time, time),
        (EntityLabel::Date, date),
        (EntityLabel::Quantity, quantity),
        (EntityLabel::Ordinal, ordinal),
        (EntityLabel::Cardinal, cardinal),
    ];

    matchers.iter().find_map(|(label, matcher)| {
        matcher(words, tags, i)
            .filter(|&end| end > i)
            .map(|end| Entity::new(i, end, *label))
    })
}

fn lower(word: &str) -> String {
    word.to_lowercase()
}

fn is_one_of(word: &str, list: &[&str]) -> bool {
    let word = lower(word);
    list.contains(&word.as_str())
}

/// A digit or spelled-out number, including "twenty-five".
fn is_number(word: &str) -> bool {
    if NUMBER.is_match(word) {
        return true;
    }
    let word = lower(word);
    word.split('-')
        .all(|part| !part.is_empty() && NUMBER_WORD_SET.contains(part))
}

/// End of the number run starting at `i`: "3", "1.5 million", "two hundred".
fn number_run(words: &[&str], i: usize) -> Option<usize> {
    let first = words.get(i)?;
    let article_scale = matches!(lower(first).as_str(), "a" | "an")
        && words.get(i + 1).is_some_and(|w| is_one_of(w, SCALE_WORDS));
    if !is_number(first) && !article_scale {
        return None;
    }

    let mut end = i + 1;
    while let Some(word) = words.get(end) {
        if is_number(word) {
            end += 1;
        } else if lower(word) == "and"
            && words.get(end + 1).is_some_and(|w| is_number(w))
            && NUMBER_WORD_SET.contains(lower(words[end - 1]).as_str())
        {
            end += 2;
        } else {
            break;
        }
    }
    Some(end)
}

/// "$ 5", "€ 3.2 billion", "5 dollars", "$5".
fn money(words: &[&str], _tags: &[&str], i: usize) -> Option<usize> {
    let word = words[i];
    if CURRENCY_SYMBOLS.contains(&word) {
        return number_run(words, i + 1);
    }
    if let Some(rest) = CURRENCY_SYMBOLS.iter().find_map(|s| word.strip_prefix(s))
        && is_number(rest)
    {
        let end = number_run(words, i + 1).unwrap_or(i + 1);
        return Some(end);
    }
    let end = number_run(words, i)?;
    words
        .get(end)
        .filter(|w| is_one_of(w, CURRENCY_WORDS))
        .map(|_| end + 1)
}

/// "50 %", "twelve percent", "3 per cent".
fn percent(words: &[&str], _tags: &[&str], i: usize) -> Option<usize> {
    let end = number_run(words, i)?;
    let next = words.get(end)?;
    if is_one_of(next, PERCENT_WORDS) {
        return Some(end + 1);
    }
    if lower(next) == "per" && words.get(end + 1).is_some_and(|w| lower(w) == "cent") {
        return Some(end + 2);
    }
    None
}

/// "10:30", "5pm", "7 a.m.", "noon", "this morning", "two hours".
fn time(words: &[&str], _tags: &[&str], i: usize) -> Option<usize> {
    let word = words[i];
    let lowered = lower(word);

    if CLOCK_WITH_MERIDIEM.is_match(word) {
        return Some(i + 1);
    }
    let clock_like = CLOCK.is_match(word)
        || word
            .parse::<u32>()
            .is_ok_and(|hour| (1..=12).contains(&hour));
    if clock_like
        && let Some(next) = words.get(i + 1)
        && matches!(lower(next).as_str(), "am" | "pm" | "a.m." | "p.m." | "o'clock")
    {
        return Some(i + 2);
    }
    if CLOCK.is_match(word) {
        return Some(i + 1);
    }

    if matches!(lowered.as_str(), "noon" | "midnight" | "tonight") {
        return Some(i + 1);
    }
    if (RELATIVE_MODIFIERS.contains(&lowered.as_str())
        || RELATIVE_DAYS.contains(&lowered.as_str())
        || WEEKDAYS.contains(&word))
        && words.get(i + 1).is_some_and(|w| is_one_of(w, DAY_PARTS))
    {
        return Some(i + 2);
    }

    let end = number_run(words, i)?;
    words
        .get(end)
        .filter(|w| is_one_of(w, TIME_UNITS))
        .map(|_| end + 1)
}

/// Day of month: "5", "21st".
fn is_day(word: &str) -> bool {
    let digits = word.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix_ok = digits.len() == word.len() || NUMERIC_ORDINAL.is_match(word);
    suffix_ok && digits.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d))
}

fn is_year(word: &str) -> bool {
    YEAR.is_match(word)
}

/// Extend a month at `i` over a following day and year: "May 5 , 2024".
fn month_span(words: &[&str], i: usize) -> usize {
    let mut end = i + 1;
    if words.get(end).is_some_and(|w| is_day(w)) {
        end += 1;
    }
    if words.get(end) == Some(&",") && words.get(end + 1).is_some_and(|w| is_year(w)) {
        end += 2;
    } else if words.get(end).is_some_and(|w| is_year(w)) {
        end += 1;
    }
    end
}

/// Holidays, calendar dates, weekdays, relative dates, durations and years.
fn date(words: &[&str], tags: &[&str], i: usize) -> Option<usize> {
    let word = words[i];
    let lowered = lower(word);

    if let Some(holiday) = HOLIDAYS
        .iter()
        .find(|h| words[i..].starts_with(h))
    {
        return Some(i + holiday.len());
    }

    if MONTHS.contains(&word) {
        let end = month_span(words, i);
        let ambiguous = matches!(word, "May" | "March");
        let has_context = end > i + 1
            || i.checked_sub(1)
                .is_some_and(|p| is_one_of(words[p], MONTH_CONTEXT) || is_day(words[p]));
        if !ambiguous || has_context {
            return Some(end);
        }
    }

    // "5 May 2024", "21st of June"
    if is_day(word) {
        let of = usize::from(words.get(i + 1).is_some_and(|w| lower(w) == "of"));
        if words.get(i + 1 + of).is_some_and(|w| MONTHS.contains(w)) {
            let month_end = i + 2 + of;
            return Some(if words.get(month_end).is_some_and(|w| is_year(w)) {
                month_end + 1
            } else {
                month_end
            });
        }
    }

    if WEEKDAYS.contains(&word) {
        let mut end = i + 1;
        if words.get(end) == Some(&",") && words.get(end + 1).is_some_and(|w| MONTHS.contains(w)) {
            end = month_span(words, end + 1);
        }
        return Some(end);
    }

    if RELATIVE_DAYS.contains(&lowered.as_str()) {
        return Some(i + 1);
    }

    if RELATIVE_MODIFIERS.contains(&lowered.as_str())
        && let Some(next) = words.get(i + 1)
        && (is_one_of(next, DATE_UNITS) || WEEKDAYS.contains(next) || MONTHS.contains(next))
    {
        return Some(i + 2);
    }

    if DECADE.is_match(word) {
        return Some(i + 1);
    }

    if let Some(end) = number_run(words, i)
        && words.get(end).is_some_and(|w| is_one_of(w, DATE_UNITS))
    {
        let ago = words
            .get(end + 1)
            .is_some_and(|w| matches!(lower(w).as_str(), "ago" | "old" | "later" | "earlier"));
        return Some(end + 1 + usize::from(ago));
    }

    if is_year(word)
        && tags.get(i).is_some_and(|t| *t == "CD")
        && !tags.get(i + 1).is_some_and(|t| t.starts_with("NN"))
    {
        return Some(i + 1);
    }

    None
}

/// "5 km", "3.2 kilograms", "10km".
fn quantity(words: &[&str], _tags: &[&str], i: usize) -> Option<usize> {
    if MEASUREMENT.is_match(words[i]) {
        return Some(i + 1);
    }
    let end = number_run(words, i)?;
    words
        .get(end)
        .filter(|w| is_one_of(w, QUANTITY_UNITS))
        .map(|_| end + 1)
}

/// "first", "21st".
fn ordinal(words: &[&str], _tags: &[&str], i: usize) -> Option<usize> {
    let word = words[i];
    let lowered = lower(word);
    // "a second" is a duration, not a position
    if lowered == "second"
        && i.checked_sub(1)
            .is_some_and(|p| matches!(lower(words[p]).as_str(), "a" | "one" | "per"))
    {
        return None;
    }
    (NUMERIC_ORDINAL.is_match(word) || ORDINAL_WORD_SET.contains(lowered.as_str())).then_some(i + 1)
}

fn cardinal(words: &[&str], _tags: &[&str], i: usize) -> Option<usize> {
    number_run(words, i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ner::annotate;

    fn find(sentence: &str) -> Vec<(String, &'static str)> {
        let (words, tags) = annotate(sentence);
        find_all(&words, &tags)
            .into_iter()
            .map(|e| (words[e.start..e.end].join(" "), e.label.as_str()))
            .collect()
    }

    #[test]
    fn test_money() {
        assert_eq!(find("It costs $ 5"), vec![("$ 5".to_string(), "MONEY")]);
        assert_eq!(
            find("a $ 3.2 billion deal"),
            vec![("$ 3.2 billion".to_string(), "MONEY")]
        );
        assert_eq!(find("twenty dollars"), vec![("twenty dollars".to_string(), "MONEY")]);
    }

    #[test]
    fn test_percent() {
        assert_eq!(find("up 50 %"), vec![("50 %".to_string(), "PERCENT")]);
        assert_eq!(find("ten percent"), vec![("ten percent".to_string(), "PERCENT")]);
        assert_eq!(find("3 per cent"), vec![("3 per cent".to_string(), "PERCENT")]);
    }

    #[test]
    fn test_time() {
        assert_eq!(find("at 10:30 today")[0], ("10:30".to_string(), "TIME"));
        assert_eq!(find("at 5pm"), vec![("5pm".to_string(), "TIME")]);
        assert_eq!(find("at 7 a.m."), vec![("7 a.m.".to_string(), "TIME")]);
        assert_eq!(find("this morning"), vec![("this morning".to_string(), "TIME")]);
        assert_eq!(find("for two hours"), vec![("two hours".to_string(), "TIME")]);
    }

    #[test]
    fn test_date() {
        assert_eq!(
            find("on January 5 , 2024"),
            vec![("January 5 , 2024".to_string(), "DATE")]
        );
        assert_eq!(find("on 5 May 2024"), vec![("5 May 2024".to_string(), "DATE")]);
        assert_eq!(find("in May"), vec![("May".to_string(), "DATE")]);
        assert!(find("May/MD I/PRP come/VB").is_empty());
        assert_eq!(find("on Monday"), vec![("Monday".to_string(), "DATE")]);
        assert_eq!(find("see you tomorrow"), vec![("tomorrow".to_string(), "DATE")]);
        assert_eq!(find("last year"), vec![("last year".to_string(), "DATE")]);
        assert_eq!(find("three years ago"), vec![("three years ago".to_string(), "DATE")]);
        assert_eq!(find("founded in 2002"), vec![("2002".to_string(), "DATE")]);
        assert_eq!(find("in the 1990s"), vec![("1990s".to_string(), "DATE")]);
        assert_eq!(find("on Christmas Eve"), vec![("Christmas Eve".to_string(), "DATE")]);
    }

    #[test]
    fn test_quantity_ordinal_cardinal() {
        assert_eq!(find("ran 5 km"), vec![("5 km".to_string(), "QUANTITY")]);
        assert_eq!(find("weighs 10 pounds"), vec![("10 pounds".to_string(), "QUANTITY")]);
        assert_eq!(find("ran 10km"), vec![("10km".to_string(), "QUANTITY")]);
        assert_eq!(find("the first time"), vec![("first".to_string(), "ORDINAL")]);
        assert_eq!(find("the 21st"), vec![("21st".to_string(), "ORDINAL")]);
        assert_eq!(find("wait a second"), vec![]);
        assert_eq!(find("1,000 people"), vec![("1,000".to_string(), "CARDINAL")]);
        assert_eq!(
            find("two hundred and fifty cats"),
            vec![("two hundred and fifty".to_string(), "CARDINAL")]
        );
        assert_eq!(find("a million fans"), vec![("a million".to_string(), "CARDINAL")]);
    }

    #[test]
    fn test_year_before_noun_is_cardinal() {
        assert_eq!(find("1500 soldiers"), vec![("1500".to_string(), "CARDINAL")]);
    }

    #[test]
    fn test_no_numbers() {
        assert!(find("Elon Musk founded SpaceX").is_empty());
    }
}
