pub mod lorem;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_PAST_DAYS: u32 = 365;
/// Upper bound on the sampling window, well inside chrono's representable range.
pub const MAX_PAST_DAYS: u32 = 100_000;

const SENTENCE_MIN_WORDS: usize = 3;
const SENTENCE_MAX_WORDS: usize = 10;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Source of the randomized fixture fields.
///
/// The generator only ever asks for text and past instants, so tests can swap in a
/// scripted source or a seeded [`RandomFaker`] and assert exact output.
pub trait FakeSource {
    /// An instant in the configured window before the anchor.
    fn past_timestamp(&mut self) -> DateTime<Utc>;

    /// `count` lowercase lorem words separated by single spaces.
    fn words(&mut self, count: usize) -> String;

    /// One capitalized lorem sentence ending in a period.
    fn sentence(&mut self) -> String;
}

pub struct RandomFaker {
    rng: StdRng,
    anchor: DateTime<Utc>,
    past_days: u32,
}

impl RandomFaker {
    pub fn seeded(seed: u64, anchor: DateTime<Utc>, past_days: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), anchor, past_days)
    }

    pub fn from_entropy(anchor: DateTime<Utc>, past_days: u32) -> Self {
        Self::with_rng(StdRng::from_os_rng(), anchor, past_days)
    }

    /// Seeded when `seed` is given, otherwise entropy-backed; anchored at the current time.
    pub fn now(seed: Option<u64>, past_days: u32) -> Self {
        let anchor = Utc::now();
        match seed {
            Some(seed) => Self::seeded(seed, anchor, past_days),
            None => Self::from_entropy(anchor, past_days),
        }
    }

    fn with_rng(rng: StdRng, anchor: DateTime<Utc>, past_days: u32) -> Self {
        Self {
            rng,
            // Output only carries milliseconds.
            anchor: anchor.trunc_subsecs(3),
            past_days: past_days.clamp(1, MAX_PAST_DAYS),
        }
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn past_days(&self) -> u32 {
        self.past_days
    }

    fn word(&mut self) -> &'static str {
        lorem::WORDS[self.rng.random_range(0..lorem::WORDS.len())]
    }
}

impl FakeSource for RandomFaker {
    fn past_timestamp(&mut self) -> DateTime<Utc> {
        let span = i64::from(self.past_days) * MILLIS_PER_DAY;
        let offset = self.rng.random_range(0..span);
        self.anchor
            .checked_sub_signed(Duration::milliseconds(offset))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn words(&mut self, count: usize) -> String {
        (0..count).map(|_| self.word()).collect::<Vec<_>>().join(" ")
    }

    fn sentence(&mut self) -> String {
        let count = self.rng.random_range(SENTENCE_MIN_WORDS..=SENTENCE_MAX_WORDS);
        let body = self.words(count);
        let mut chars = body.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::from("."),
        }
    }
}
