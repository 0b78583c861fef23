use egui::{Context, Key, Pos2, Rect};

/// Pointer and key input, already translated into board coordinates.
///
/// Mouse and touch both arrive here as pointer events, so nothing downstream
/// needs to know which device produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { position: Pos2 },
    PointerMove { position: Pos2 },
    PointerUp { position: Pos2 },
    /// The pointer left the board while pressed
    PointerLeave,
    KeyDown { key: Key },
}

/// Keys the board reacts to. Enter belongs to the text field, which commits
/// only after it has taken every character typed in the same frame.
const BOARD_KEYS: [Key; 1] = [Key::Escape];

/// Converts raw egui input into [`InputEvent`]s for one board rectangle
#[derive(Debug, Default)]
pub struct InputHandler {
    pressed: bool,
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Collect this frame's events for the board occupying `canvas_rect`.
    ///
    /// `accepts_press` is false while something (the text field, a popup)
    /// covers the pointer, so presses there do not start a gesture.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        accepts_press: bool,
    ) -> Vec<InputEvent> {
        let (pressed, released, position, keys) = ctx.input(|input| {
            let keys: Vec<Key> = BOARD_KEYS
                .into_iter()
                .filter(|key| input.key_pressed(*key))
                .collect();
            (
                input.pointer.primary_pressed() && accepts_press,
                input.pointer.primary_released(),
                input.pointer.interact_pos().or(input.pointer.hover_pos()),
                keys,
            )
        });

        let mut events = self.translate(pressed, released, position, canvas_rect);
        events.extend(keys.into_iter().map(|key| InputEvent::KeyDown { key }));
        events
    }

    /// Pure state machine behind [`Self::process_input`]
    pub fn translate(
        &mut self,
        pressed: bool,
        released: bool,
        position: Option<Pos2>,
        canvas_rect: Rect,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| Pos2::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y);

        if pressed && !self.pressed {
            if let Some(pos) = position.filter(|p| canvas_rect.contains(*p)) {
                self.pressed = true;
                self.last_position = Some(pos);
                events.push(InputEvent::PointerDown {
                    position: to_local(pos),
                });
            }
        }

        if !self.pressed {
            return events;
        }

        if let Some(pos) = position {
            if Some(pos) != self.last_position {
                if !canvas_rect.contains(pos) {
                    self.pressed = false;
                    self.last_position = None;
                    events.push(InputEvent::PointerLeave);
                    return events;
                }
                self.last_position = Some(pos);
                events.push(InputEvent::PointerMove {
                    position: to_local(pos),
                });
            }
        }

        if released {
            let pos = position.or(self.last_position).unwrap_or(canvas_rect.min);
            self.pressed = false;
            self.last_position = None;
            events.push(InputEvent::PointerUp {
                position: to_local(pos),
            });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn board() -> Rect {
        Rect::from_min_max(pos2(100.0, 50.0), pos2(300.0, 250.0))
    }

    #[test]
    fn test_positions_are_board_local() {
        let mut handler = InputHandler::new();
        let events = handler.translate(true, false, Some(pos2(110.0, 60.0)), board());
        assert_eq!(
            events,
            vec![InputEvent::PointerDown {
                position: pos2(10.0, 10.0)
            }]
        );
    }

    #[test]
    fn test_press_outside_board_is_ignored() {
        let mut handler = InputHandler::new();
        assert!(handler.translate(true, false, Some(pos2(10.0, 10.0)), board()).is_empty());
        assert!(handler.translate(false, false, Some(pos2(150.0, 60.0)), board()).is_empty());
        assert!(!handler.is_pressed());
    }

    #[test]
    fn test_drag_then_release() {
        let mut handler = InputHandler::new();
        handler.translate(true, false, Some(pos2(110.0, 60.0)), board());
        let moved = handler.translate(false, false, Some(pos2(120.0, 60.0)), board());
        assert_eq!(
            moved,
            vec![InputEvent::PointerMove {
                position: pos2(20.0, 10.0)
            }]
        );

        // Touch release may come without a position
        let released = handler.translate(false, true, None, board());
        assert_eq!(
            released,
            vec![InputEvent::PointerUp {
                position: pos2(20.0, 10.0)
            }]
        );
        assert!(!handler.is_pressed());
    }

    #[test]
    fn test_leaving_board_ends_gesture() {
        let mut handler = InputHandler::new();
        handler.translate(true, false, Some(pos2(110.0, 60.0)), board());
        let events = handler.translate(false, false, Some(pos2(400.0, 60.0)), board());
        assert_eq!(events, vec![InputEvent::PointerLeave]);
        assert!(handler.translate(false, true, Some(pos2(400.0, 60.0)), board()).is_empty());
    }

    #[test]
    fn test_tap_is_down_then_up() {
        let mut handler = InputHandler::new();
        let events = handler.translate(true, true, Some(pos2(110.0, 60.0)), board());
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown {
                    position: pos2(10.0, 10.0)
                },
                InputEvent::PointerUp {
                    position: pos2(10.0, 10.0)
                },
            ]
        );
    }

    fn key_press(key: Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_only_escape_reaches_the_board() {
        let ctx = Context::default();
        let raw = egui::RawInput {
            events: vec![key_press(Key::Enter), key_press(Key::Escape)],
            ..Default::default()
        };

        let mut handler = InputHandler::new();
        let mut events = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            events = handler.process_input(ctx, board(), true);
        });
        assert_eq!(events, vec![InputEvent::KeyDown { key: Key::Escape }]);
    }
}
