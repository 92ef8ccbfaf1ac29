pub mod frame;
pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;

pub use frame::{Frame, Line};
pub use renderer::Renderer;
pub use span::Span;
pub use style::{Color, Style};
pub use theme::Theme;
