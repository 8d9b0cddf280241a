use super::poll::PollId;

/// One discrete user input, produced by the GUI and applied by `AppState::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetTitle(String),
    AddOption,
    SetOptionText { index: usize, text: String },
    RemoveOption { index: usize },
    SubmitDraft,
    CastVote { poll: PollId, option: usize },
    DeletePoll(PollId),
    ShowCreate,
    ShowList,
    ShowResults(PollId),
    ShowSelectedResults,
    DismissNotice,
}
