pub mod date_input;
pub mod input;
pub mod policy;
pub mod select_input;
pub mod text_input;
pub mod validators;

pub use date_input::DateInput;
pub use input::{Input, InputBase, KeyResult};
pub use policy::CharPolicy;
pub use select_input::SelectInput;
pub use text_input::TextInput;
