use log::{error, info};

use crate::config::{APP_NAME, AppSettings, EXPORT_FILE_NAME};
use crate::error::DrawingResult;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorState;
use crate::{export, fullscreen};

/// Board size used until the first layout tells us the real one
const INITIAL_SIZE: [u32; 2] = [800, 600];

pub struct DrawingApp {
    pub(crate) editor: EditorState,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    /// Last save/export outcome, shown in the controls bar
    pub(crate) status: Option<String>,
    fullscreen_requested: bool,
}

impl DrawingApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> DrawingResult<Self> {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        info!("Starting {APP_NAME} with {settings:?}");
        Self::with_settings(&settings)
    }

    pub fn with_settings(settings: &AppSettings) -> DrawingResult<Self> {
        let [width, height] = INITIAL_SIZE;
        let editor = EditorState::with_settings(width, height, settings)?;

        Ok(Self {
            editor,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            status: None,
            fullscreen_requested: false,
        })
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    /// Encode the board and hand it to the platform as `drawing.png`
    pub fn save_drawing(&mut self) {
        let result = self
            .editor
            .export_png()
            .and_then(|png| export::save_png(&png, EXPORT_FILE_NAME));
        self.status = Some(match result {
            Ok(location) => format!("Saved {location}"),
            Err(err) => {
                error!("Save failed: {err}");
                format!("Save failed: {err}")
            }
        });
    }

    /// The board asks for fullscreen on the first click anywhere
    fn request_fullscreen_on_first_click(&mut self, ctx: &egui::Context) {
        if self.fullscreen_requested || !ctx.input(|i| i.pointer.any_click()) {
            return;
        }
        self.fullscreen_requested = true;
        if !fullscreen::is_fullscreen(ctx) {
            if let Err(err) = fullscreen::set_fullscreen(ctx, true) {
                error!("Fullscreen error: {err}");
            }
        }
    }
}

impl eframe::App for DrawingApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.request_fullscreen_on_first_click(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
