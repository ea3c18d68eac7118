//! Matcher audit - exhaustive invariant sweep
//!
//! Compares every secret in a word list against every guess in the same
//! list and checks each annotation against the matcher's guarantees.

use crate::core::{AnnotatedGuess, MatchState, Word, compare, compare_words};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Guarantees checked for every (secret, guess) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Annotation has one entry per guess letter
    LengthPreserved,
    /// Full match exactly where the letters agree
    FullMatchExact,
    /// Full plus partial matches of a letter never exceed its count in the secret
    NoOverCount,
    /// A word compared with itself is all full matches
    Identity,
    /// Words with no common letters are all no-match
    Disjoint,
    /// Repeated and string-based evaluation give the same answer
    Deterministic,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LengthPreserved => "length preservation",
            Self::FullMatchExact => "full-match exactness",
            Self::NoOverCount => "no duplicate over-count",
            Self::Identity => "identity",
            Self::Disjoint => "disjointness",
            Self::Deterministic => "determinism",
        };
        f.write_str(name)
    }
}

/// A failed guarantee for one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub secret: String,
    pub guess: String,
    pub property: Property,
}

/// Counts accumulated over a sweep
#[derive(Debug, Default, Clone)]
pub struct AuditTally {
    pub comparisons: usize,
    pub state_totals: [usize; 3],
    pub solved: usize,
    pub violations: Vec<Violation>,
}

impl AuditTally {
    fn merge(mut self, other: Self) -> Self {
        self.comparisons += other.comparisons;
        for (total, add) in self.state_totals.iter_mut().zip(other.state_totals) {
            *total += add;
        }
        self.solved += other.solved;
        self.violations.extend(other.violations);
        self
    }

    fn record(&mut self, secret: &Word, guess: &Word, annotated: &AnnotatedGuess) {
        self.comparisons += 1;
        for state in annotated.states() {
            self.state_totals[state_index(state)] += 1;
        }
        if annotated.is_solved() {
            self.solved += 1;
        }
        for property in violated_properties(secret, guess, annotated) {
            self.violations.push(Violation {
                secret: secret.text().to_string(),
                guess: guess.text().to_string(),
                property,
            });
        }
    }
}

/// Result of an audit run
#[derive(Debug)]
pub struct AuditReport {
    pub secrets_checked: usize,
    pub guesses_per_secret: usize,
    pub tally: AuditTally,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.tally.violations.is_empty()
    }
}

const fn state_index(state: MatchState) -> usize {
    match state {
        MatchState::NoMatch => 0,
        MatchState::PartialMatch => 1,
        MatchState::FullMatch => 2,
    }
}

/// Check one annotation against every guarantee
#[must_use]
pub fn violated_properties(
    secret: &Word,
    guess: &Word,
    annotated: &AnnotatedGuess,
) -> Vec<Property> {
    let mut violated = Vec::new();
    let s = secret.chars();
    let g = guess.chars();
    let letters = annotated.letters();

    if letters.len() != g.len() {
        violated.push(Property::LengthPreserved);
        // Positional checks are meaningless past this point
        return violated;
    }

    let exact = letters
        .iter()
        .enumerate()
        .all(|(i, l)| (l.state() == MatchState::FullMatch) == (g[i] == s[i]));
    if !exact {
        violated.push(Property::FullMatchExact);
    }

    let mut credited: FxHashMap<char, u8> = FxHashMap::default();
    for letter in letters {
        if letter.state() != MatchState::NoMatch {
            *credited.entry(letter.character()).or_insert(0) += 1;
        }
    }
    let available = secret.letter_counts();
    let over_counted = credited.iter().any(|(&c, &n)| {
        let in_secret = u8::try_from(c).ok().and_then(|b| available.get(&b).copied());
        n > in_secret.unwrap_or(0)
    });
    if over_counted {
        violated.push(Property::NoOverCount);
    }

    if secret == guess && !annotated.is_solved() {
        violated.push(Property::Identity);
    }

    let shares_letter = g.iter().any(|b| s.contains(b));
    if !shares_letter && annotated.states().any(|st| st != MatchState::NoMatch) {
        violated.push(Property::Disjoint);
    }

    let again = compare_words(secret, guess);
    let by_text = compare(secret.text(), guess.text()).ok();
    if &again != annotated || by_text.as_ref() != Some(annotated) {
        violated.push(Property::Deterministic);
    }

    violated
}

fn audit_secret(secret: &Word, guesses: &[Word]) -> AuditTally {
    let mut tally = AuditTally::default();
    for guess in guesses {
        let annotated = compare_words(secret, guess);
        tally.record(secret, guess, &annotated);
    }
    tally
}

/// Run the sweep over `words`, optionally limiting the number of secrets
///
/// Secrets are processed in parallel; every word in `words` is used as a
/// guess for each secret.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_audit(words: &[Word], limit: Option<usize>, show_progress: bool) -> AuditReport {
    let secrets: Vec<&Word> = words
        .iter()
        .take(limit.unwrap_or(words.len()))
        .collect();

    log::info!(
        "Auditing {} secrets against {} guesses",
        secrets.len(),
        words.len()
    );

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let tally = secrets
        .par_iter()
        .map(|&secret| {
            let tally = audit_secret(secret, words);
            pb.inc(1);
            tally
        })
        .reduce(AuditTally::default, AuditTally::merge);

    pb.finish_with_message("Complete!");

    AuditReport {
        secrets_checked: secrets.len(),
        guesses_per_secret: words.len(),
        tally,
        duration: start.elapsed(),
    }
}

/// Print an audit report
pub fn print_audit_report(report: &AuditReport) {
    let tally = &report.tally;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MATCHER AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Secrets:       {}", report.secrets_checked);
    println!("   Guesses each:  {}", report.guesses_per_secret);
    println!("   Comparisons:   {}", tally.comparisons);
    println!("   Solved pairs:  {}", tally.solved);
    println!("   Time taken:    {:.2}s", report.duration.as_secs_f64());

    let letters: usize = tally.state_totals.iter().sum();
    println!("\n📈 {}", "Letter states:".bright_cyan().bold());
    for state in MatchState::ALL {
        let count = tally.state_totals[state_index(state)];
        let pct = if letters > 0 {
            count as f64 / letters as f64 * 100.0
        } else {
            0.0
        };
        let label = format!("{state:<14}");
        let label = match state {
            MatchState::NoMatch => label.white(),
            MatchState::PartialMatch => label.yellow(),
            MatchState::FullMatch => label.green(),
        };
        println!("   {label} {count:>10} ({pct:5.1}%)");
    }

    println!();
    if report.passed() {
        println!("{}", "✅ All guarantees hold".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violations", tally.violations.len()).red().bold()
        );
        for v in tally.violations.iter().take(10) {
            println!(
                "   {} / {}: {}",
                v.secret.to_uppercase(),
                v.guess.to_uppercase(),
                v.property
            );
        }
    }
}
