//! Lorem ipsum text composition.
//!
//! Word tables plus the sentence, paragraph and title builders used by
//! [`LoremSource`](super::LoremSource). All builders take the RNG by
//! reference so one seeded stream drives a whole run.

use rand::Rng;

// ============================================================================
// Word tables
// ============================================================================

/// Latin filler vocabulary.
const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium",
    "doloremque", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis",
    "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur",
    "odit", "fugit", "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui",
    "ratione", "sequi", "nesciunt", "neque", "dolorem", "ipsum", "dolor", "amet",
    "consectetur", "adipisci", "velit", "non", "numquam", "eius", "modi", "tempora",
    "incidunt", "ut", "labore", "dolore", "magnam", "aliquam", "quaerat", "enim", "ad",
    "minima", "veniam", "quis", "nostrum", "exercitationem", "ullam", "corporis",
    "nemo", "ipsam", "voluptas", "suscipit", "laboriosam", "nisi", "aliquid", "ex", "ea",
    "commodi", "autem", "vel", "eum", "iure", "reprehenderit", "in", "voluptate", "esse",
    "quam", "nihil", "molestiae", "iusto", "odio", "dignissimos", "ducimus", "blanditiis",
    "praesentium", "laudantium", "totam", "rem", "voluptatum", "deleniti", "atque",
    "corrupti", "quos", "quas", "molestias", "excepturi", "sint", "occaecati", "cupiditate",
    "provident", "perspiciatis", "unde", "omnis", "iste", "natus", "error", "similique",
    "culpa", "officia", "deserunt", "mollitia", "animi", "id", "est", "laborum", "harum",
    "quidem", "rerum", "facilis", "expedita", "distinctio", "nam", "libero", "tempore",
    "cum", "soluta", "nobis", "eligendi", "optio", "cumque", "impedit", "quo", "porro",
    "quisquam", "minus", "quod", "maxime", "placeat", "facere", "possimus", "assumenda",
    "repellendus", "temporibus", "quibusdam", "officiis", "debitis", "necessitatibus",
    "saepe", "eveniet", "voluptates", "repudiandae", "recusandae", "itaque", "earum", "hic",
    "tenetur", "a", "sapiente", "delectus", "reiciendis", "voluptatibus", "maiores",
    "doloribus", "asperiores", "repellat",
];

/// Title adjectives.
const ADJECTIVES: &[&str] = &[
    "Silent", "Golden", "Broken", "Hidden", "Last", "Forgotten", "Crimson", "Distant",
    "Wandering", "Burning", "Quiet", "Endless", "Painted", "Shattered", "Winter", "Little",
    "Bitter", "Hollow", "Secret", "Northern",
];

/// Title nouns.
const NOUNS: &[&str] = &[
    "Garden", "River", "House", "Mountain", "Sea", "Kingdom", "Lantern", "Harvest", "Orchard",
    "Road", "Mirror", "Letter", "Island", "Tower", "Promise", "Storm", "Bridge", "Shadow",
    "Voyage", "Season",
];

/// Title abstractions, used after "of".
const ABSTRACTS: &[&str] = &[
    "Time", "Memory", "Glass", "Light", "Ashes", "Dreams", "Salt", "Stars", "Bones", "Rain",
    "Silence", "Fortune",
];

/// Words per sentence: 4 base words plus up to 6 more.
const SENTENCE_BASE_WORDS: usize = 4;
const SENTENCE_EXTRA_WORDS: usize = 6;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, table: &[&'a str]) -> &'a str {
    table[rng.random_range(0..table.len())]
}

// ============================================================================
// Builders
// ============================================================================

/// Builds one sentence: capitalized first word, single spaces, final period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word_count = SENTENCE_BASE_WORDS + rng.random_range(0..=SENTENCE_EXTRA_WORDS);
    let mut out = String::new();
    for i in 0..word_count {
        let word = pick(rng, WORDS);
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

/// Builds a paragraph of exactly `sentences` sentences separated by spaces.
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a book-title-like string.
///
/// Never contains `'`, since titles are embedded in a single-quoted
/// template directive.
pub fn title<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.random_range(0..4) {
        0 => format!("The {} {}", pick(rng, ADJECTIVES), pick(rng, NOUNS)),
        1 => format!("{} of {}", pick(rng, NOUNS), pick(rng, ABSTRACTS)),
        2 => format!(
            "The {} of {} {}",
            pick(rng, NOUNS),
            pick(rng, ADJECTIVES),
            pick(rng, ABSTRACTS)
        ),
        _ => format!("{} {}", pick(rng, ADJECTIVES), pick(rng, ABSTRACTS)),
    }
}

/// Counts the sentences in a paragraph built by [`paragraph`].
#[must_use]
pub fn count_sentences(paragraph: &str) -> usize {
    paragraph.matches('.').count()
}
