pub mod core;
pub mod input;
pub mod terminal;
pub mod ui;

pub use crate::core::age;
pub use crate::core::app;
pub use crate::core::form;
pub use crate::core::reducer;
pub use crate::core::state;
pub use crate::core::validation;

pub use crate::input::validators;

pub use crate::terminal::terminal_event;
