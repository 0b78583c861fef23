use egui::Slider;
use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::DrawingApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::config::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::fullscreen;
use crate::palette;
use crate::tools::ToolMode;

pub fn tools_panel(app: &mut DrawingApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            let editor = app.editor_mut();

            let mut color = editor.style().color();
            if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                editor.pick_color(color);
            }

            ui.separator();
            ui.label("Size:");
            let mut size = editor.style().brush_size();
            if ui
                .add(Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).show_value(false))
                .changed()
            {
                editor.set_brush_size(size);
            }
            ui.label(size.to_string());

            ui.separator();
            let active = editor.tool();
            for tool in ToolMode::ALL {
                if ui.add(ToolButton::new(tool, tool == active)).clicked() {
                    editor.press_tool_button(tool);
                }
            }

            ui.separator();
            if ui.button("Clear").clicked() {
                editor.clear_canvas();
            }
            if ui.selectable_label(editor.grid_visible(), "Grid").clicked() {
                editor.toggle_grid();
            }
            if ui.button("Save").clicked() {
                app.save_drawing();
            }
            if ui.button(fullscreen::button_label(fullscreen::is_fullscreen(ctx))).clicked() {
                fullscreen::toggle(ctx);
            }

            if let Some(status) = &app.status {
                ui.separator();
                ui.weak(status);
            }
        });

        ui.horizontal_wrapped(|ui| {
            let editor = app.editor_mut();
            let active = palette::active_swatch(editor.style().color());
            for (index, color) in palette::colors().enumerate() {
                if ColorSwatch::new(color, active == Some(index)).show(ui).clicked() {
                    editor.pick_color(color);
                }
            }
        });
        ui.add_space(4.0);
    });
}
