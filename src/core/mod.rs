pub mod action_bindings;
pub mod age;
pub mod app;
pub mod event;
pub mod event_queue;
pub mod form;
pub mod form_engine;
pub mod form_event;
pub mod reducer;
pub mod state;
pub mod validation;
