//! Content suggestions
//!
//! Hands out one post text at a time, picked uniformly at random from a
//! fixed corpus. The random source is injected so a seed reproduces the same
//! sequence. Consecutive calls may return the same text.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SuggestionsConfig;
use crate::error::{PostplanError, Result};

/// Corpus used when the configuration does not supply one
pub const DEFAULT_CORPUS: [&str; 8] = [
    "Just launched our new feature! 🚀 Check it out and let us know what you think.",
    "Monday motivation: Success is not final, failure is not fatal. Keep pushing forward! 💪",
    "Did you know? 73% of marketers believe social media is effective for their business. 📊",
    "Behind the scenes: Here's how we build amazing products for our customers. 🎯",
    "Weekend vibes! What are you working on this weekend? Share below! ✨",
    "Pro tip: Consistency is key to growing your social media presence. Post regularly! 📅",
    "Thank you to our amazing community! Your support means everything to us. ❤️",
    "New blog post alert! Learn how to automate your social media workflow. 🔗",
];

pub struct Suggestions<R = StdRng> {
    corpus: Vec<String>,
    rng: R,
}

impl<R: Rng> Suggestions<R> {
    /// # Errors
    ///
    /// Returns `PostplanError::InvalidInput` if `corpus` is empty.
    pub fn new(corpus: Vec<String>, rng: R) -> Result<Self> {
        if corpus.is_empty() {
            return Err(PostplanError::InvalidInput(
                "Suggestion corpus cannot be empty".to_string(),
            ));
        }
        Ok(Self { corpus, rng })
    }

    /// Pick one suggestion
    pub fn suggest(&mut self) -> &str {
        let index = self.rng.gen_range(0..self.corpus.len());
        &self.corpus[index]
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }
}

impl Suggestions<StdRng> {
    /// Built-in corpus with a deterministic seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            corpus: default_corpus(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Built-in corpus seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            corpus: default_corpus(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Corpus and seed taken from configuration, falling back to the
    /// built-in corpus and an entropy seed
    pub fn from_config(config: &SuggestionsConfig) -> Result<Self> {
        let corpus = config.corpus.clone().unwrap_or_else(default_corpus);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(corpus, rng)
    }
}

fn default_corpus() -> Vec<String> {
    DEFAULT_CORPUS.iter().map(|s| s.to_string()).collect()
}
