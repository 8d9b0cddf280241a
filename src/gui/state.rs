use chrono::Local;
use log::{debug, error, info, warn};

use crate::config::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::PollError;
use crate::models::draft::Draft;
use crate::models::events::Action;
use crate::models::poll::{Poll, PollId};
use crate::models::view::ViewSelection;
use crate::store::PollStore;

#[derive(Debug)]
pub struct AppState {
    pub polls: PollStore,
    pub draft: Draft,
    pub view: ViewSelection,
    /// Validation message waiting to be dismissed. Other input is ignored while it is set.
    pub notice: Option<String>,
    timestamp_format: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl AppState {
    pub fn new(timestamp_format: impl Into<String>) -> Self {
        Self {
            polls: PollStore::default(),
            draft: Draft::default(),
            view: ViewSelection::default(),
            notice: None,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// The poll the Results screen should show, if it still exists.
    pub fn selected_poll(&self) -> Option<&Poll> {
        self.view.selected.and_then(|id| self.polls.get(id))
    }

    pub fn apply(&mut self, action: Action) {
        if self.notice.is_some() && action != Action::DismissNotice {
            debug!("Ignoring {:?} while a notice is open", action);
            return;
        }
        debug!("Applying {:?}", action);

        let result = match action {
            Action::SetTitle(text) => {
                self.draft.set_title(text);
                Ok(())
            }
            Action::AddOption => {
                self.draft.add_option();
                Ok(())
            }
            Action::SetOptionText { index, text } => self.draft.set_option_text(index, text),
            Action::RemoveOption { index } => self.draft.remove_option(index),
            Action::SubmitDraft => self.submit_draft(),
            Action::CastVote { poll, option } => self.cast_vote(poll, option),
            Action::DeletePoll(id) => {
                self.delete_poll(id);
                Ok(())
            }
            Action::ShowCreate => {
                self.view.show_create();
                Ok(())
            }
            Action::ShowList => {
                self.view.show_list();
                Ok(())
            }
            Action::ShowResults(id) => {
                self.view.show_results(id);
                Ok(())
            }
            Action::ShowSelectedResults => {
                if !self.view.show_selected_results() {
                    debug!("No poll selected, staying on {:?}", self.view.current);
                }
                Ok(())
            }
            Action::DismissNotice => {
                self.notice = None;
                Ok(())
            }
        };

        if let Err(e) = result {
            self.reject(e);
        }
    }

    fn reject(&mut self, e: PollError) {
        if e.is_validation() {
            warn!("Rejected input: {:?}", e);
            self.notice = Some(e.to_string());
        } else {
            error!("Dropped invalid action: {}", e);
        }
    }

    fn submit_draft(&mut self) -> Result<(), PollError> {
        let created = Local::now().format(&self.timestamp_format).to_string();
        let id = self
            .polls
            .create(&self.draft.title, &self.draft.options, created)?;
        info!("Created poll {} \"{}\"", id, self.draft.title);
        self.draft.reset();
        self.view.show_list();
        Ok(())
    }

    fn cast_vote(&mut self, id: PollId, option: usize) -> Result<(), PollError> {
        if self.polls.cast_vote(id, option)? {
            self.view.show_results(id);
        } else {
            debug!("Vote for unknown poll {} ignored", id);
        }
        Ok(())
    }

    fn delete_poll(&mut self, id: PollId) {
        if self.polls.delete(id) {
            info!("Deleted poll {}", id);
            self.view.forget(id);
        } else {
            debug!("Delete of unknown poll {} ignored", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::View;

    fn submit(state: &mut AppState, title: &str, options: &[&str]) {
        state.apply(Action::SetTitle(title.to_owned()));
        for _ in 2..options.len() {
            state.apply(Action::AddOption);
        }
        for (index, text) in options.iter().enumerate() {
            state.apply(Action::SetOptionText {
                index,
                text: text.to_string(),
            });
        }
        state.apply(Action::SubmitDraft);
    }

    fn lunch() -> (AppState, PollId) {
        let mut state = AppState::default();
        submit(&mut state, "Lunch?", &["Pizza", "Sushi"]);
        let id = state.polls.iter().next().unwrap().id;
        (state, id)
    }

    #[test]
    fn starts_on_create_with_blank_draft() {
        let state = AppState::default();
        assert_eq!(state.view.current, View::Create);
        assert_eq!(state.view.selected, None);
        assert_eq!(state.draft, Draft::default());
        assert!(state.polls.is_empty());
    }

    #[test]
    fn create_moves_to_list_and_clears_draft() {
        let (state, id) = lunch();
        assert_eq!(state.polls.len(), 1);
        let poll = state.polls.get(id).unwrap();
        assert_eq!(poll.total_votes, 0);
        assert_eq!(poll.options[0].text, "Pizza");
        assert_eq!(poll.options[1].votes, 0);
        assert_eq!(state.view.current, View::List);
        assert_eq!(state.draft, Draft::default());
        assert!(state.notice.is_none());
    }

    #[test]
    fn blank_title_is_rejected_and_input_kept() {
        let mut state = AppState::default();
        submit(&mut state, "", &["A", "B"]);
        assert!(state.polls.is_empty());
        assert_eq!(state.view.current, View::Create);
        assert_eq!(
            state.notice.as_deref(),
            Some("Please provide a title and at least two non-empty options")
        );
        assert_eq!(state.draft.options, vec!["A", "B"]);
    }

    #[test]
    fn notice_blocks_input_until_dismissed() {
        let mut state = AppState::default();
        submit(&mut state, "", &["A", "B"]);
        state.apply(Action::SetTitle("Fixed".to_owned()));
        assert_eq!(state.draft.title, "");

        state.apply(Action::DismissNotice);
        state.apply(Action::SetTitle("Fixed".to_owned()));
        state.apply(Action::SubmitDraft);
        assert_eq!(state.polls.len(), 1);
        assert_eq!(state.view.current, View::List);
    }

    #[test]
    fn vote_shows_results_for_that_poll() {
        let (mut state, id) = lunch();
        state.apply(Action::CastVote { poll: id, option: 0 });

        let poll = state.polls.get(id).unwrap();
        assert_eq!(poll.options[0].votes, 1);
        assert_eq!(poll.total_votes, 1);
        assert_eq!(state.view.current, View::Results);
        assert_eq!(state.view.selected, Some(id));
    }

    #[test]
    fn repeated_votes_keep_totals_consistent() {
        let (mut state, id) = lunch();
        for option in [0, 1, 1, 0, 1] {
            state.apply(Action::CastVote { poll: id, option });
            let poll = state.polls.get(id).unwrap();
            assert_eq!(poll.total_votes, poll.tally());
        }
        assert_eq!(state.polls.get(id).unwrap().total_votes, 5);
    }

    #[test]
    fn vote_for_unknown_poll_changes_nothing() {
        let (mut state, _) = lunch();
        state.apply(Action::CastVote {
            poll: PollId(404),
            option: 0,
        });
        assert_eq!(state.view.current, View::List);
        assert_eq!(state.view.selected, None);
    }

    #[test]
    fn vote_out_of_range_is_dropped_without_notice() {
        let (mut state, id) = lunch();
        state.apply(Action::CastVote { poll: id, option: 2 });
        assert_eq!(state.polls.get(id).unwrap().total_votes, 0);
        assert_eq!(state.view.current, View::List);
        assert!(state.notice.is_none());
    }

    #[test]
    fn deleting_selected_poll_leaves_results_empty() {
        let (mut state, id) = lunch();
        state.apply(Action::CastVote { poll: id, option: 0 });
        state.apply(Action::DeletePoll(id));

        assert!(state.polls.is_empty());
        assert_eq!(state.view.current, View::Results);
        assert_eq!(state.view.selected, None);
        assert!(state.selected_poll().is_none());
    }

    #[test]
    fn deleting_other_poll_keeps_selection() {
        let (mut state, first) = lunch();
        submit(&mut state, "Dinner?", &["Tacos", "Curry", "Soup"]);
        let second = state.polls.iter().nth(1).unwrap().id;
        state.apply(Action::ShowResults(first));
        state.apply(Action::DeletePoll(second));
        assert_eq!(state.selected_poll().map(|p| p.id), Some(first));
    }

    #[test]
    fn remove_at_floor_shows_notice_and_keeps_draft() {
        let mut state = AppState::default();
        state.apply(Action::SetOptionText {
            index: 0,
            text: "A".to_owned(),
        });
        let before = state.draft.clone();
        state.apply(Action::RemoveOption { index: 0 });
        assert_eq!(state.draft, before);
        assert_eq!(
            state.notice.as_deref(),
            Some("A poll must have at least two options")
        );
    }

    #[test]
    fn results_tab_needs_a_selection() {
        let (mut state, id) = lunch();
        state.apply(Action::ShowSelectedResults);
        assert_eq!(state.view.current, View::List);

        state.apply(Action::ShowResults(id));
        state.apply(Action::ShowCreate);
        state.apply(Action::ShowSelectedResults);
        assert_eq!(state.view.current, View::Results);
        assert_eq!(state.view.selected, Some(id));
    }

    #[test]
    fn new_polls_are_listed_after_existing_ones() {
        let (mut state, _) = lunch();
        submit(&mut state, "Dinner?", &["Tacos", "Curry"]);
        submit(&mut state, "Dessert?", &["Cake", "Pie"]);
        let titles: Vec<_> = state.polls.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Lunch?", "Dinner?", "Dessert?"]);
    }
}
