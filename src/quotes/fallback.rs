//! Built-in quotes served when the upstream quote API is unavailable.

use crate::models::Quote;

/// (text, author, source, tags)
type Entry = (&'static str, &'static str, &'static str, &'static [&'static str]);

const FALLBACK: [Entry; 25] = [
    (
        "The best executive is the one who has sense enough to pick good men to do what he wants done, and self-restraint to keep from meddling with them while they do it.",
        "Theodore Roosevelt",
        "",
        &["success", "business", "courage", "wisdom", "leadership"],
    ),
    (
        "The simple things are also the most extraordinary things, and only the wise can see them.",
        "Paulo Coelho",
        "",
        &["growth", "life", "wisdom", "faith", "beauty"],
    ),
    (
        "Those who fail together, grow together.",
        "Chinese Proverb",
        "",
        &["growth", "success", "life", "friendship", "resilience"],
    ),
    (
        "Life and love are very precious when both are in full bloom.",
        "Louisa May Alcott",
        "",
        &["happiness", "life", "love", "precious", "bloom"],
    ),
    (
        "Only the very weak-minded refuse to be influenced by literature and poetry.",
        "Cassandra Clare",
        "",
        &["wisdom", "poetry"],
    ),
    (
        "Hard work pays off in the future. Laziness pays off now.",
        "Steven Wright",
        "",
        &["success", "work", "life", "future"],
    ),
    (
        "To be content means that you realize you contain what you seek.",
        "Alan Cohen",
        "",
        &["happiness", "life", "wisdom", "self-improvement"],
    ),
    (
        "Man is least himself when he talks in his own person. Give him a mask, and he will tell you the truth.",
        "Oscar Wilde",
        "",
        &["life", "wisdom", "relationships", "communication", "truth"],
    ),
    (
        "Sleep is good, he said, and books are better.",
        "George R. R. Martin",
        "",
        &["happiness", "life", "wisdom", "books", "reading"],
    ),
    (
        "Monday is a marathon. Tuesday is a breather. The rest of the week is pay-as-you-go.",
        "Nkwachukwu Ogbuagu",
        "",
        &["motivation", "business", "life", "wisdom", "humor"],
    ),
    (
        "The seasons are created for signs and the reasons are manifested by wonders.",
        "Hugh Mahn",
        "",
        &["growth", "philosophy", "life", "seasons", "wonders"],
    ),
    (
        "The slightest nudge can send a fruit pyramid collapsing into ruin\u{2026} Perhaps ancient fat people bumped into buildings and statues and made them fall. Perhaps this is the real reason Rome fell.",
        "Becky Siame",
        "",
        &["philosophy", "life", "humor", "history", "science"],
    ),
    (
        "Happiness is not by chance, but by choice.",
        "Jim Rohn",
        "",
        &["inspiration", "happiness", "life", "wisdom", "choice"],
    ),
    (
        "Now come the whispers bearing bouquets of moonbeams and sunlight tremblings.",
        "Aberjhani",
        "",
        &["inspiration", "life", "wisdom", "beauty", "poetry"],
    ),
    (
        "Today\u{2019}s Accomplishments Were Yesterday\u{2019}s Impossibilities.",
        "Robert H. Schuller",
        "",
        &["growth", "success", "ambition", "life", "wisdom"],
    ),
    (
        "The man who does not read has no advantage over the man who cannot read.",
        "Mark Twain",
        "",
        &["wisdom", "writing", "knowledge", "learning", "books"],
    ),
    (
        "Nobody has ever measured, not even poets, how much the heart can hold.",
        "Zelda Fitzgerald",
        "",
        &["life", "wisdom", "hope", "poetry"],
    ),
    (
        "Power attracts the corruptible. Suspect all who seek it ... We should grant power over our affairs only to those who are reluctant to hold it and then only under conditions that increase that reluctance.",
        "Frank Herbert",
        "Frank Herbert (1986). \u{201c}Chapterhouse: Dune\u{201d}, Berkley Trade",
        &["life", "wisdom", "power"],
    ),
    (
        "So often we quit on the first failure. We must persist long enough to achieve success.",
        "Lailah Gifty Akita",
        "",
        &["success", "courage", "life", "wisdom", "perseverance"],
    ),
    (
        "And the day came when the risk to remain tight in a bud was more painful than the risk it took to blossom.",
        "Ana",
        "",
        &["risk", "growth", "pain"],
    ),
    (
        "I don't go by the rule book\u{2026}I lead from the heart, not the head.",
        "Princess Diana",
        "",
        &["inspiration", "courage", "life", "wisdom", "freedom"],
    ),
    (
        "A life spent making mistakes is not only more honorable, but more useful than a life spent doing nothing.",
        "George Bernard Shaw",
        "",
        &["growth", "life", "wisdom"],
    ),
    (
        "Life is what happens to you when you are busy making other plans.",
        "John Lennon",
        "",
        &["change", "life", "wisdom", "opportunity"],
    ),
    (
        "Don\u{2019}t be pushed around by the fears in your mind. Be led by the dreams in your heart.",
        "Roy T. Bennett",
        "",
        &["inspiration", "courage", "fear", "wisdom", "dreams"],
    ),
    (
        "You never have to change anything you got up in the middle of the night to write.",
        "Saul Bellow",
        "",
        &["change", "life", "wisdom", "self-improvement", "writing"],
    ),
];

/// The fixed fallback list, in display order.
pub fn fallback_quotes() -> Vec<Quote> {
    FALLBACK
        .iter()
        .map(|(text, author, source, tags)| Quote {
            text: text.to_string(),
            author: author.to_string(),
            source: source.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}
