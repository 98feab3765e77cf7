//! Team name reconciliation for imported stat files.
//!
//! External files spell team names loosely ("The Sluggers", "sluggers!",
//! "Sluggers BC"). `TeamLookup` resolves those against the league's teams.
//! It is built per import and passed explicitly; resolutions are memoized in
//! an LRU cache owned by the lookup itself.

use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use tracing::debug;

use crate::cli::types::ids::TeamId;
use crate::storage::Team;

/// Minimum token overlap for a fuzzy match.
const MIN_JACCARD: f64 = 0.5;

const DEFAULT_CACHE_SIZE: usize = 256;

/// Words that carry no identity in team names.
const STOP_WORDS: &[&str] = &["the"];

/// Result of resolving a free-form team name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Normalized names are identical.
    Exact(TeamId),
    /// Unique containment or token-overlap match.
    Fuzzy(TeamId),
    /// Several teams match equally well.
    Ambiguous(Vec<TeamId>),
    NotFound,
}

impl MatchOutcome {
    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            MatchOutcome::Exact(id) | MatchOutcome::Fuzzy(id) => Some(*id),
            MatchOutcome::Ambiguous(_) | MatchOutcome::NotFound => None,
        }
    }
}

struct Candidate {
    team_id: TeamId,
    normalized: String,
    tokens: HashSet<String>,
}

/// Scoped lookup table from loosely spelled names to team IDs.
pub struct TeamLookup {
    candidates: Vec<Candidate>,
    resolved: LruCache<String, MatchOutcome>,
}

impl TeamLookup {
    pub fn new(teams: &[Team]) -> Self {
        Self::with_capacity(teams, DEFAULT_CACHE_SIZE)
    }

    pub fn with_capacity(teams: &[Team], capacity: usize) -> Self {
        let candidates = teams
            .iter()
            .map(|team| {
                let normalized = normalize_name(&team.name);
                Candidate {
                    team_id: team.team_id,
                    tokens: tokens(&normalized),
                    normalized,
                }
            })
            .collect();

        Self {
            candidates,
            resolved: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn contains(&self, team_id: TeamId) -> bool {
        self.candidates.iter().any(|c| c.team_id == team_id)
    }

    /// Resolve a name: exact, then unique word containment, then best token overlap.
    pub fn resolve(&mut self, name: &str) -> MatchOutcome {
        let normalized = normalize_name(name);
        if let Some(hit) = self.resolved.get(&normalized) {
            return hit.clone();
        }

        let outcome = self.match_normalized(&normalized);
        debug!(raw_name = name, ?outcome, "resolved team name");
        self.resolved.put(normalized, outcome.clone());
        outcome
    }

    fn match_normalized(&self, normalized: &str) -> MatchOutcome {
        if normalized.is_empty() {
            return MatchOutcome::NotFound;
        }

        let exact: Vec<TeamId> = self
            .candidates
            .iter()
            .filter(|c| c.normalized == normalized)
            .map(|c| c.team_id)
            .collect();
        if let Some(outcome) = single_or_ambiguous(exact, MatchOutcome::Exact) {
            return outcome;
        }

        // Containment is on whole words so "races" never matches "aces"
        let query_tokens = tokens(normalized);
        let containing: Vec<TeamId> = self
            .candidates
            .iter()
            .filter(|c| !c.tokens.is_empty())
            .filter(|c| query_tokens.is_subset(&c.tokens) || c.tokens.is_subset(&query_tokens))
            .map(|c| c.team_id)
            .collect();
        if let Some(outcome) = single_or_ambiguous(containing, MatchOutcome::Fuzzy) {
            return outcome;
        }

        let mut best_score = MIN_JACCARD;
        let mut best: Vec<TeamId> = Vec::new();
        for candidate in &self.candidates {
            let score = jaccard(&query_tokens, &candidate.tokens);
            if score > best_score {
                best_score = score;
                best = vec![candidate.team_id];
            } else if score == best_score {
                best.push(candidate.team_id);
            }
        }

        single_or_ambiguous(best, MatchOutcome::Fuzzy).unwrap_or(MatchOutcome::NotFound)
    }
}

fn single_or_ambiguous(
    mut ids: Vec<TeamId>,
    single: fn(TeamId) -> MatchOutcome,
) -> Option<MatchOutcome> {
    match ids.len() {
        0 => None,
        1 => ids.pop().map(single),
        _ => Some(MatchOutcome::Ambiguous(ids)),
    }
}

/// Lowercase, turn punctuation into spaces, drop stop words, collapse whitespace.
pub fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn tokens(normalized: &str) -> HashSet<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
