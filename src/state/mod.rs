mod editor_state;
mod style;

pub use editor_state::{EditorState, TextDraft};
pub use style::StyleState;
