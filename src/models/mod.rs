pub mod draft;
pub mod events;
pub mod poll;
pub mod view;
