use crate::models::poll::Poll;

/// What the Results screen shows for one poll.
#[derive(Debug, PartialEq, Eq)]
pub struct ResultsSummary<'a> {
    pub title: &'a str,
    pub created: &'a str,
    pub total_votes: u64,
    /// `None` until the first vote is cast.
    pub rows: Option<Vec<ResultRow<'a>>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ResultRow<'a> {
    pub text: &'a str,
    pub votes: u64,
    pub percent: u32,
}

impl<'a> ResultsSummary<'a> {
    pub fn of(poll: &'a Poll) -> Self {
        let rows = (poll.total_votes > 0).then(|| {
            poll.options
                .iter()
                .map(|option| ResultRow {
                    text: &option.text,
                    votes: option.votes,
                    percent: percentage(option.votes, poll.total_votes).unwrap_or(0),
                })
                .collect()
        });

        ResultsSummary {
            title: &poll.title,
            created: &poll.created,
            total_votes: poll.total_votes,
            rows,
        }
    }
}

/// `votes / total * 100` rounded half-up, or `None` when there are no votes.
/// Each option is rounded on its own, so a poll's percentages need not add up to 100.
pub fn percentage(votes: u64, total: u64) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let (votes, total) = (u128::from(votes), u128::from(total));
    Some(((votes * 200 + total) / (total * 2)) as u32)
}
