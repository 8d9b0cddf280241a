use super::poll::PollId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Create,
    List,
    Results,
}

/// Active screen plus the poll the Results screen points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewSelection {
    pub current: View,
    pub selected: Option<PollId>,
}

impl ViewSelection {
    pub fn show_create(&mut self) {
        self.current = View::Create;
    }

    pub fn show_list(&mut self) {
        self.current = View::List;
    }

    pub fn show_results(&mut self, poll: PollId) {
        self.selected = Some(poll);
        self.current = View::Results;
    }

    /// Re-opens Results for the current selection, if there is one.
    pub fn show_selected_results(&mut self) -> bool {
        match self.selected {
            Some(_) => {
                self.current = View::Results;
                true
            }
            None => false,
        }
    }

    /// Drops the selection if it points at `poll`.
    pub fn forget(&mut self, poll: PollId) {
        if self.selected == Some(poll) {
            self.selected = None;
        }
    }
}
