use crate::error::PollError;

/// Fewest options a draft may be trimmed down to.
pub const MIN_OPTIONS: usize = 2;

/// In-progress poll form. Option texts may be empty while the user is typing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub options: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
        }
    }
}

impl Draft {
    pub fn set_title(&mut self, text: String) {
        self.title = text;
    }

    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    pub fn set_option_text(&mut self, index: usize, text: String) -> Result<(), PollError> {
        let len = self.options.len();
        let slot = self
            .options
            .get_mut(index)
            .ok_or(PollError::DraftIndexOutOfRange { index, len })?;
        *slot = text;
        Ok(())
    }

    pub fn remove_option(&mut self, index: usize) -> Result<(), PollError> {
        let len = self.options.len();
        if len <= MIN_OPTIONS {
            return Err(PollError::OptionFloor);
        }
        if index >= len {
            return Err(PollError::DraftIndexOutOfRange { index, len });
        }
        self.options.remove(index);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
