//! Known names.
//!
//! Entries are written as Treebank token sequences and matched case
//! sensitively, longest first. People are found three ways: a known first
//! name extended over the capitalized tokens after it, a known surname on its
//! own, or any capitalized run after an honorific ("Dr. Jane Roe").

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::ner::{Entity, EntityLabel};

const ORGANIZATIONS: &[&str] = &[
    "Google", "Alphabet", "Apple", "Microsoft", "Amazon", "SpaceX", "Tesla", "Meta", "Facebook",
    "Twitter", "Instagram", "WhatsApp", "YouTube", "OpenAI", "Anthropic", "DeepMind", "Netflix",
    "IBM", "Intel", "AMD", "Nvidia", "NVIDIA", "Oracle", "Samsung", "Sony", "Toyota", "Honda",
    "Ford", "Boeing", "Airbus", "Nike", "Adidas", "Disney", "Marvel", "Pixar", "Walmart",
    "Starbucks", "McDonald 's", "Coca-Cola", "PepsiCo", "Uber", "Airbnb", "Spotify", "Reddit",
    "LinkedIn", "Salesforce", "Adobe", "Cisco", "Huawei", "Alibaba", "Tencent", "Baidu",
    "Goldman Sachs", "JPMorgan", "Morgan Stanley", "Bank of America", "Wells Fargo",
    "BlackRock", "Berkshire Hathaway", "NASA", "FBI", "CIA", "NSA", "FDA", "EPA", "IRS",
    "NATO", "UNESCO", "UNICEF", "WHO", "IMF", "United Nations", "European Union", "EU",
    "World Bank", "Red Cross", "Congress", "Senate", "Parliament", "Pentagon", "Harvard",
    "Harvard University", "MIT", "Stanford", "Stanford University", "Yale", "Princeton",
    "Oxford University", "Cambridge University", "BBC", "CNN", "Reuters", "Bloomberg",
    "New York Times", "The New York Times", "Washington Post", "Wall Street Journal",
    "Associated Press", "Akatsuki", "Hidden Leaf Village",
];

const PLACES: &[&str] = &[
    "United States", "United States of America", "U.S.", "U.S.A.", "USA", "America", "UK",
    "U.K.", "United Kingdom", "Britain", "Great Britain", "England", "Scotland", "Wales",
    "Ireland", "Canada", "Mexico", "Brazil", "Argentina", "Chile", "Peru", "Colombia",
    "France", "Germany", "Italy", "Spain", "Portugal", "Netherlands", "Belgium", "Switzerland",
    "Austria", "Sweden", "Norway", "Denmark", "Finland", "Poland", "Greece", "Turkey",
    "Russia", "Ukraine", "China", "Japan", "Korea", "South Korea", "North Korea", "India",
    "Pakistan", "Bangladesh", "Indonesia", "Vietnam", "Thailand", "Philippines", "Malaysia",
    "Singapore", "Australia", "New Zealand", "Egypt", "Nigeria", "Kenya", "South Africa",
    "Ethiopia", "Morocco", "Israel", "Iran", "Iraq", "Saudi Arabia", "Jordan", "Syria",
    "Qatar", "United Arab Emirates", "UAE", "New York", "New York City", "NYC",
    "Los Angeles", "San Francisco", "Chicago", "Boston", "Seattle", "Austin", "Houston",
    "Dallas", "Miami", "Atlanta", "Denver", "Philadelphia", "Washington", "Washington D.C.",
    "Las Vegas", "Hollywood", "California", "Texas", "Florida", "Nevada", "Ohio", "Georgia",
    "Virginia", "Massachusetts", "Illinois", "Michigan", "Arizona", "Hawaii", "Alaska",
    "London", "Paris", "Berlin", "Madrid", "Rome", "Milan", "Amsterdam", "Brussels", "Vienna",
    "Zurich", "Geneva", "Stockholm", "Oslo", "Copenhagen", "Dublin", "Lisbon", "Athens",
    "Moscow", "Kyiv", "Istanbul", "Tokyo", "Osaka", "Kyoto", "Beijing", "Shanghai",
    "Hong Kong", "Taipei", "Taiwan", "Seoul", "Mumbai", "Delhi", "New Delhi", "Bangalore",
    "Dubai", "Cairo", "Lagos", "Nairobi", "Sydney", "Melbourne", "Toronto", "Vancouver",
    "Montreal", "Mexico City", "Rio de Janeiro", "Buenos Aires", "Konoha",
];

const LOCATIONS: &[&str] = &[
    "Europe", "Asia", "Africa", "North America", "South America", "Latin America",
    "Antarctica", "Oceania", "Middle East", "Silicon Valley", "Mount Everest", "Everest",
    "Himalayas", "Alps", "Andes", "Rocky Mountains", "Sahara", "Amazon River",
    "Amazon rainforest", "Nile", "Mississippi River", "Pacific", "Pacific Ocean", "Atlantic",
    "Atlantic Ocean", "Indian Ocean", "Arctic", "Mediterranean", "Caribbean", "Mars", "Jupiter",
    "Saturn", "Venus", "Milky Way",
];

const GROUPS: &[&str] = &[
    "American", "Americans", "British", "English", "French", "German", "Germans", "Italian",
    "Italians", "Spanish", "Mexican", "Mexicans", "Canadian", "Canadians", "Brazilian",
    "Russian", "Russians", "Ukrainian", "Chinese", "Japanese", "Korean", "Indian", "Indians",
    "Pakistani", "Australian", "European", "Europeans", "Asian", "Asians", "African",
    "Africans", "Arab", "Arabs", "Arabic", "Israeli", "Iranian", "Turkish", "Greek", "Dutch",
    "Swedish", "Irish", "Scottish", "Portuguese", "Polish", "Christian", "Christians",
    "Catholic", "Catholics", "Muslim", "Muslims", "Jewish", "Jews", "Hindu", "Hindus",
    "Buddhist", "Buddhists", "Democrat", "Democrats", "Democratic", "Republican",
    "Republicans", "Latino", "Latinos", "Hispanic", "Hebrew",
];

/// Language names that are never a nationality or group.
const LANGUAGES: &[&str] = &[
    "Mandarin", "Cantonese", "Hindi", "Urdu", "Bengali", "Swahili", "Esperanto", "Tagalog",
    "Sanskrit", "Farsi", "Yiddish", "Latin", "Gaelic",
];

/// Group names that read as a language in the right context.
const LANGUAGE_GROUPS: &[&str] = &[
    "English", "French", "German", "Spanish", "Italian", "Chinese", "Japanese", "Korean",
    "Russian", "Arabic", "Portuguese", "Dutch", "Greek", "Turkish", "Swedish", "Polish",
    "Hebrew",
];

const LANGUAGE_CUES_BEFORE: &[&str] = &[
    "speak", "speaks", "spoke", "spoken", "speaking", "in", "into", "learn", "learns",
    "learned", "learning", "study", "studies", "studied", "studying", "teach", "teaches",
    "taught", "fluent", "write", "writes", "wrote", "translate", "translated", "from",
];

const LANGUAGE_CUES_AFTER: &[&str] = &[
    "language", "translation", "speaker", "speakers", "subtitles", "grammar", "dictionary",
];

const EVENTS: &[&str] = &[
    "World War I", "World War II", "World War 2", "Cold War", "Civil War", "Vietnam War",
    "Olympics", "Olympic Games", "World Cup", "Super Bowl", "Wimbledon", "Tour de France",
    "Renaissance", "Industrial Revolution", "French Revolution", "Great Depression",
    "Holocaust", "Brexit", "Hurricane Katrina", "Fourth Great Ninja War", "Chunin Exams",
];

const PRODUCTS: &[&str] = &[
    "iPhone", "iPad", "iPod", "MacBook", "Mac", "Apple Watch", "AirPods", "Windows",
    "Android", "Linux", "ChatGPT", "GPT-4", "GPT-3", "Claude", "Gemini", "Falcon 9",
    "Falcon Heavy", "Starship", "Dragon", "Model S", "Model 3", "Model X", "Model Y",
    "Cybertruck", "PlayStation", "Xbox", "Nintendo Switch", "Kindle", "Alexa", "Siri",
    "Photoshop", "Excel", "Boeing 747", "Python", "Rust",
];

const FACILITIES: &[&str] = &[
    "White House", "Eiffel Tower", "Statue of Liberty", "Golden Gate Bridge", "Brooklyn Bridge",
    "Empire State Building", "Burj Khalifa", "Taj Mahal", "Great Wall", "Great Wall of China",
    "Colosseum", "Big Ben", "Buckingham Palace", "Kremlin", "Louvre", "Times Square",
    "Central Park", "Heathrow", "JFK", "Wembley", "Madison Square Garden", "Hogwarts",
];

const LAWS: &[&str] = &[
    "Constitution", "First Amendment", "Second Amendment", "Bill of Rights",
    "Affordable Care Act", "Obamacare", "Civil Rights Act", "Patriot Act", "Magna Carta",
    "GDPR", "Geneva Convention", "Paris Agreement",
];

const WORKS_OF_ART: &[&str] = &[
    "Mona Lisa", "Hamlet", "Macbeth", "Romeo and Juliet", "Harry Potter", "Star Wars",
    "Lord of the Rings", "The Lord of the Rings", "Game of Thrones", "The Godfather",
    "Bible", "Quran", "Odyssey", "Iliad", "Starry Night", "The Great Gatsby", "Naruto Shippuden",
];

const FIRST_NAMES: &[&str] = &[
    "Elon", "Bill", "Steve", "Mark", "Jeff", "Tim", "Sundar", "Satya", "Larry", "Sergey",
    "Warren", "Barack", "Michelle", "Donald", "Joe", "Kamala", "Hillary", "George", "John",
    "James", "Robert", "Michael", "William", "David", "Richard", "Thomas", "Charles", "Daniel",
    "Matthew", "Anthony", "Paul", "Peter", "Andrew", "Joshua", "Kevin", "Brian", "Jason",
    "Ryan", "Jacob", "Nicholas", "Eric", "Jonathan", "Stephen", "Sam", "Samuel", "Benjamin",
    "Alexander", "Patrick", "Jack", "Henry", "Albert", "Isaac", "Nikola", "Marie", "Ada",
    "Alan", "Grace", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara",
    "Susan", "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra",
    "Ashley", "Emily", "Emma", "Olivia", "Sophia", "Anna", "Maria", "Laura", "Rachel",
    "Hannah", "Julia", "Alice", "Taylor", "Oprah", "Lionel", "Cristiano", "Serena", "Roger",
    "Rafael", "Novak", "Leonardo", "Vincent", "Pablo", "Wolfgang", "Ludwig", "Frida",
    "Sasuke", "Sakura", "Kakashi", "Itachi", "Hinata", "Tony", "Bruce", "Clark", "Diana",
    "Harry", "Hermione", "Ron", "Luke", "Leia", "Frodo",
];

const SURNAMES: &[&str] = &[
    "Musk", "Gates", "Jobs", "Zuckerberg", "Bezos", "Cook", "Pichai", "Nadella", "Page",
    "Brin", "Buffett", "Obama", "Trump", "Biden", "Harris", "Clinton", "Bush", "Lincoln",
    "Einstein", "Newton", "Darwin", "Curie", "Tesla", "Edison", "Turing", "Lovelace",
    "Hopper", "Shakespeare", "Picasso", "Mozart", "Beethoven", "Messi", "Ronaldo",
    "Federer", "Nadal", "Djokovic", "Altman", "Putin", "Zelensky", "Merkel", "Macron",
    "Modi", "Gandhi", "Mandela", "Churchill", "Napoleon", "Uzumaki", "Uchiha", "Hatake",
    "Stark", "Wayne", "Kent", "Potter", "Skywalker", "Baggins",
];

const HONORIFICS: &[&str] = &[
    "Mr.", "Mr", "Mrs.", "Mrs", "Ms.", "Ms", "Dr.", "Dr", "Prof.", "Professor", "Sir", "Dame",
    "Lord", "Lady", "President", "Senator", "Sen.", "Governor", "Gov.", "Mayor", "Judge",
    "Justice", "King", "Queen", "Prince", "Princess", "Pope", "Captain", "Capt.", "General",
    "Gen.", "Sgt.", "Officer", "Chancellor", "Minister", "Secretary", "Saint", "St.",
];

type Phrase = (Vec<&'static str>, EntityLabel);

/// Phrases keyed by their first token, each list sorted longest first.
static PHRASES: LazyLock<AHashMap<&'static str, Vec<Phrase>>> = LazyLock::new(|| {
    let tables: [(&[&str], EntityLabel); 10] = [
        (ORGANIZATIONS, EntityLabel::Org),
        (PLACES, EntityLabel::Gpe),
        (LOCATIONS, EntityLabel::Loc),
        (GROUPS, EntityLabel::Norp),
        (LANGUAGES, EntityLabel::Language),
        (EVENTS, EntityLabel::Event),
        (PRODUCTS, EntityLabel::Product),
        (FACILITIES, EntityLabel::Fac),
        (LAWS, EntityLabel::Law),
        (WORKS_OF_ART, EntityLabel::WorkOfArt),
    ];

    let mut phrases: AHashMap<&'static str, Vec<Phrase>> = AHashMap::new();
    for (entries, label) in tables {
        for entry in entries {
            let tokens: Vec<&'static str> = entry.split(' ').collect();
            phrases.entry(tokens[0]).or_default().push((tokens, label));
        }
    }
    for candidates in phrases.values_mut() {
        // stable, so earlier tables win among equal lengths
        candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }
    phrases
});

/// The longest known entity starting at token `i`, if any.
///
/// `tags` are the Penn Treebank tags aligned with `words`. An honorific match
/// starts after the title, so the returned entity may begin at `i + 1`.
pub fn lookup(words: &[&str], tags: &[&str], i: usize) -> Option<Entity> {
    let phrase = phrase_at(words, i);
    let person = person_at(words, tags, i);

    match (phrase, person) {
        (Some(p), Some(q)) if q.end > p.end => Some(q),
        (Some(p), _) => Some(p),
        (None, q) => q,
    }
}

fn phrase_at(words: &[&str], i: usize) -> Option<Entity> {
    let candidates = PHRASES.get(words[i])?;
    let (tokens, label) = candidates
        .iter()
        .find(|(tokens, _)| words[i..].starts_with(tokens))?;
    let end = i + tokens.len();

    let label = match label {
        EntityLabel::Norp if LANGUAGE_GROUPS.contains(&words[i]) && language_context(words, i, end) => {
            EntityLabel::Language
        }
        other => *other,
    };
    Some(Entity::new(i, end, label))
}

/// Whether the words around `start..end` read as talk about a language.
fn language_context(words: &[&str], start: usize, end: usize) -> bool {
    let before = start
        .checked_sub(1)
        .is_some_and(|p| LANGUAGE_CUES_BEFORE.contains(&words[p].to_lowercase().as_str()));
    let after = words
        .get(end)
        .is_some_and(|w| LANGUAGE_CUES_AFTER.contains(&w.to_lowercase().as_str()));
    // "in French" is a language, "in French cities" is not
    let followed_by_noun = words.get(end).is_some_and(|w| {
        w.chars().next().is_some_and(char::is_lowercase) && !LANGUAGE_CUES_AFTER.contains(w)
    });
    after || (before && !followed_by_noun)
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_proper(words: &[&str], tags: &[&str], i: usize) -> bool {
    words.get(i).is_some_and(|w| is_capitalized(w))
        && tags.get(i).is_some_and(|t| t.starts_with("NNP"))
}

/// Extend a name starting at `start` over the capitalized proper nouns after it.
fn name_end(words: &[&str], tags: &[&str], start: usize) -> usize {
    let mut end = start + 1;
    while is_proper(words, tags, end) || words.get(end).is_some_and(|w| SURNAMES.contains(w)) {
        end += 1;
    }
    end
}

fn person_at(words: &[&str], tags: &[&str], i: usize) -> Option<Entity> {
    let word = words[i];

    if HONORIFICS.contains(&word) && is_proper(words, tags, i + 1) {
        let end = name_end(words, tags, i + 1);
        return Some(Entity::new(i + 1, end, EntityLabel::Person));
    }
    // sentence-initial "Mark" or "Cook" may be a verb
    let tagged_proper = tags.get(i).is_some_and(|t| t.starts_with("NNP"));
    if FIRST_NAMES.contains(&word) {
        let end = name_end(words, tags, i);
        if tagged_proper || end > i + 1 {
            return Some(Entity::new(i, end, EntityLabel::Person));
        }
    }
    if SURNAMES.contains(&word) && tagged_proper {
        return Some(Entity::new(i, i + 1, EntityLabel::Person));
    }
    None
}

/// Whether `word` is a known given name.
pub fn is_first_name(word: &str) -> bool {
    FIRST_NAMES.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ner::annotate;

    fn find(sentence: &str, i: usize) -> Option<(String, &'static str)> {
        let (words, tags) = annotate(sentence);
        lookup(&words, &tags, i).map(|e| (words[e.start..e.end].join(" "), e.label.as_str()))
    }

    #[test]
    fn test_known_names() {
        assert_eq!(find("SpaceX launched", 0), Some(("SpaceX".to_string(), "ORG")));
        assert_eq!(
            find("the Golden Gate Bridge", 1),
            Some(("Golden Gate Bridge".to_string(), "FAC"))
        );
        assert_eq!(find("to New York City", 1), Some(("New York City".to_string(), "GPE")));
        assert_eq!(find("near the Amazon River", 2), Some(("Amazon River".to_string(), "LOC")));
        assert_eq!(find("bought Amazon stock", 1), Some(("Amazon".to_string(), "ORG")));
        assert_eq!(find("spaceX", 0), None);
    }

    #[test]
    fn test_language_context() {
        assert_eq!(find("She speaks French", 2), Some(("French".to_string(), "LANGUAGE")));
        assert_eq!(find("the French army", 1), Some(("French".to_string(), "NORP")));
        assert_eq!(find("in French cities", 1), Some(("French".to_string(), "NORP")));
        assert_eq!(find("Learning Mandarin", 1), Some(("Mandarin".to_string(), "LANGUAGE")));
    }

    #[test]
    fn test_people() {
        assert_eq!(find("Elon Musk founded SpaceX", 0), Some(("Elon Musk".to_string(), "PERSON")));
        assert_eq!(find("ask Musk", 1), Some(("Musk".to_string(), "PERSON")));
        assert_eq!(find("Dr. Jane Roe spoke", 0), Some(("Jane Roe".to_string(), "PERSON")));
        assert!(is_first_name("Elon"));
    }

    #[test]
    fn test_phrase_and_person_prefer_longer() {
        // "Tesla" is both an organization and a surname
        assert_eq!(find("Tesla sells cars", 0), Some(("Tesla".to_string(), "ORG")));
        assert_eq!(
            find("Nikola Tesla invented things", 0),
            Some(("Nikola Tesla".to_string(), "PERSON"))
        );
    }
}
