use log::error;

use crate::DrawingApp;
use crate::renderer::Renderer;

pub fn central_panel(app: &mut DrawingApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            // Drag sense keeps touch drags from scrolling the page
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;

            let width = rect.width().floor().max(1.0) as u32;
            let height = rect.height().floor().max(1.0) as u32;
            if let Err(err) = app.editor.resize(width, height) {
                error!("Board resize failed: {err}");
            }

            for event in app.input.process_input(ctx, rect, response.contains_pointer()) {
                app.editor.handle_input(&event);
            }

            app.renderer.show(ctx, &painter, rect, app.editor.surface());

            let style = *app.editor.style();
            if let Some(shape) = app.editor.shape_preview() {
                Renderer::paint_shape_preview(
                    &painter,
                    rect.min,
                    shape,
                    style.color(),
                    style.width(),
                );
            }
            if let Some(points) = app.editor.eraser_preview() {
                Renderer::paint_eraser_preview(&painter, rect.min, points, style.width() * 2.0);
            }

            text_entry(app, ctx, rect.min);
        });
}

/// Inline field for the text tool: Enter places the text, Escape drops it
fn text_entry(app: &mut DrawingApp, ctx: &egui::Context, origin: egui::Pos2) {
    let Some(draft) = app.editor.text_draft_mut() else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    egui::Area::new(egui::Id::new("text_entry"))
        .fixed_pos(origin + draft.position.to_vec2())
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut draft.text)
                    .hint_text("Type, then Enter")
                    .desired_width(200.0),
            );
            if response.lost_focus() {
                confirmed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                cancelled = ui.input(|i| i.key_pressed(egui::Key::Escape));
            } else if !response.has_focus() {
                response.request_focus();
            }
        });

    if confirmed {
        app.editor.commit_text();
    } else if cancelled {
        app.editor.cancel_text();
    }
}
