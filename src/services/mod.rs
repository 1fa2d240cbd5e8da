pub mod confirm;
pub mod focus;
pub mod slug;
pub mod typeahead;
