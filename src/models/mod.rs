mod element;
mod event;
mod page;

pub use element::*;
pub use event::*;
pub use page::*;
