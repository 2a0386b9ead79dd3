// =============================================================================
// Lexicon polarity scorer
// =============================================================================
//
// Scores a text snippet into [-1, 1] by counting hits against small positive
// and negative word lists.  This is the stand-in for whatever NLP model the
// deployment wires in; everything upstream only sees text -> polarity.

/// Words that read bullish in a financial headline.
const POSITIVE_WORDS: &[&str] = &[
    "beat", "beats", "bullish", "buy", "gain", "gains", "growth", "jump", "jumps", "profit",
    "rally", "rallies", "record", "rise", "rises", "soar", "soars", "strong", "surge", "surges",
    "upgrade", "upgraded", "win", "wins",
];

/// Words that read bearish in a financial headline.
const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "crash", "crashes", "cut", "cuts", "decline", "declines", "downgrade",
    "downgraded", "drop", "drops", "fall", "falls", "fear", "fears", "lawsuit", "loss", "losses",
    "miss", "misses", "plunge", "plunges", "recall", "sell", "slump", "slumps", "weak",
];

/// Score a single snippet of text into [-1, 1].
///
/// The score is (positive hits - negative hits) / total hits; a snippet with
/// no sentiment-bearing words is neutral 0.0.  Output is clamped so a caller
/// can rely on the polarity bound without re-checking.
pub fn score_text(text: &str) -> f64 {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in tokens(text) {
        if POSITIVE_WORDS.contains(&token.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            negative += 1;
        }
    }

    let hits = positive + negative;
    if hits == 0 {
        return 0.0;
    }

    let score = (positive as f64 - negative as f64) / hits as f64;
    score.clamp(-1.0, 1.0)
}

/// Lowercased alphanumeric tokens of `text`.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}
