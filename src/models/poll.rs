use std::fmt::{self, Display, Formatter};

use crate::error::PollError;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct PollId(pub u64);

impl Display for PollId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollOption {
    pub text: String,
    pub votes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poll {
    pub id: PollId,
    pub title: String,
    pub options: Vec<PollOption>,
    pub total_votes: u64,
    /// Local date-time the poll was created, already formatted for display.
    pub created: String,
}

impl Poll {
    pub fn new(id: PollId, title: &str, options: &[String], created: String) -> Poll {
        Poll {
            id,
            title: title.to_owned(),
            options: options
                .iter()
                .map(|text| PollOption {
                    text: text.clone(),
                    votes: 0,
                })
                .collect(),
            total_votes: 0,
            created,
        }
    }

    /// Adds one vote to the option at `index`. Nothing changes when the index is out of range.
    pub fn record_vote(&mut self, index: usize) -> Result<(), PollError> {
        let len = self.options.len();
        let option = self
            .options
            .get_mut(index)
            .ok_or(PollError::OptionOutOfRange {
                poll: self.id,
                index,
                len,
            })?;
        option.votes += 1;
        self.total_votes += 1;
        Ok(())
    }

    pub fn tally(&self) -> u64 {
        self.options.iter().map(|option| option.votes).sum()
    }
}
