#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod fullscreen;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::DrawingApp;
pub use command::Command;
pub use config::AppSettings;
pub use document::Document;
pub use error::{DrawingError, DrawingResult};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{EditorState, StyleState};
pub use stroke::Stroke;
pub use surface::Surface;
pub use tools::ToolMode;
