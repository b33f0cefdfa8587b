//! Typewriter-style text reveal: tokenizing and the active-animation registry.
//!
//! The registry is what the loading overlay polls: a job is registered the
//! moment it is submitted and removed when its last token has been written.
//! Jobs submitted with `chain` wait until every earlier job on the same target
//! has completed.

use fnv::FnvHashMap;
use std::collections::VecDeque;

pub type JobId = u64;

// Longest entity we treat as one step, `&thetasym;` included.
const MAX_ENTITY_LEN: usize = 10;

/// Split `text` into reveal steps. Markup tags and character entities are
/// written whole so the target never holds half a tag.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let len = match c {
            '<' => rest.find('>').map(|end| end + 1),
            '&' => entity_len(rest),
            _ => None,
        }
        .unwrap_or(c.len_utf8());
        tokens.push(rest[..len].to_string());
        rest = &rest[len..];
    }
    tokens
}

fn entity_len(s: &str) -> Option<usize> {
    let end = s.find(';')?;
    let body = &s[1..end];
    let name = body.strip_prefix('#').unwrap_or(body);
    let valid = end <= MAX_ENTITY_LEN
        && !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(end + 1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintJob {
    pub id: JobId,
    pub target: String,
    pub tokens: Vec<String>,
    pub interval_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submitted {
    /// Caller should start driving this job now.
    Start(PrintJob),
    /// Held until earlier jobs on the same target complete.
    Queued(JobId),
}

#[derive(Debug, Default)]
pub struct AnimationRegistry {
    next_id: JobId,
    // id -> target of every registered, not yet completed job
    active: FnvHashMap<JobId, String>,
    // per-target submission order of registered jobs
    lanes: FnvHashMap<String, VecDeque<JobId>>,
    waiting: FnvHashMap<JobId, PrintJob>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, target: &str, text: &str, interval_ms: u32, chain: bool) -> Submitted {
        let id = self.next_id;
        self.next_id += 1;
        let job = PrintJob {
            id,
            target: target.to_string(),
            tokens: tokenize(text),
            interval_ms,
        };
        let lane = self.lanes.entry(target.to_string()).or_default();
        let must_wait = chain && !lane.is_empty();
        lane.push_back(id);
        self.active.insert(id, target.to_string());

        if must_wait {
            log::debug!("[typewriter] job {} queued behind {} on {}", id, lane.len() - 1, target);
            self.waiting.insert(id, job);
            Submitted::Queued(id)
        } else {
            Submitted::Start(job)
        }
    }

    /// Mark `id` finished and hand back the next chained job on its target,
    /// if it is now free to start.
    pub fn complete(&mut self, id: JobId) -> Option<PrintJob> {
        let target = self.active.remove(&id)?;
        let lane = self.lanes.get_mut(&target)?;
        lane.retain(|j| *j != id);
        let next = lane.front().copied();
        if lane.is_empty() {
            self.lanes.remove(&target);
        }
        next.and_then(|front| self.waiting.remove(&front))
    }

    pub fn is_active(&self, id: JobId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}
