use log::debug;

use crate::error::PollError;
use crate::models::draft::MIN_OPTIONS;
use crate::models::poll::{Poll, PollId};

/// All polls of the session, kept in creation order.
#[derive(Debug)]
pub struct PollStore {
    polls: Vec<Poll>,
    next_id: u64,
}

impl Default for PollStore {
    fn default() -> Self {
        Self {
            polls: Vec::new(),
            next_id: 1,
        }
    }
}

impl PollStore {
    /// Validates and appends a new poll. Title and option labels are stored as typed;
    /// only their trimmed form is checked for emptiness.
    pub fn create(
        &mut self,
        title: &str,
        options: &[String],
        created: String,
    ) -> Result<PollId, PollError> {
        if title.trim().is_empty() {
            return Err(PollError::EmptyTitle);
        }
        if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(PollError::EmptyOption { index });
        }
        if options.len() < MIN_OPTIONS {
            return Err(PollError::TooFewOptions {
                count: options.len(),
            });
        }

        let id = PollId(self.next_id);
        self.next_id += 1;
        self.polls.push(Poll::new(id, title, options, created));
        debug!("Stored poll {} with {} options", id, options.len());
        Ok(id)
    }

    /// Returns `Ok(false)` when no poll has this id.
    pub fn cast_vote(&mut self, id: PollId, option: usize) -> Result<bool, PollError> {
        match self.polls.iter_mut().find(|poll| poll.id == id) {
            Some(poll) => {
                poll.record_vote(option)?;
                debug_assert_eq!(poll.total_votes, poll.tally());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns whether a poll was removed.
    pub fn delete(&mut self, id: PollId) -> bool {
        let before = self.polls.len();
        self.polls.retain(|poll| poll.id != id);
        self.polls.len() != before
    }

    pub fn get(&self, id: PollId) -> Option<&Poll> {
        self.polls.iter().find(|poll| poll.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poll> {
        self.polls.iter()
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }
}
