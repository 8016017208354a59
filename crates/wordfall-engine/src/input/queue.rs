use super::actions::{Action, ActionState};

/// A keyboard key, parsed from a DOM `KeyboardEvent.key` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key that produces a single printable character (space included).
    Char(char),
    Backspace,
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Anything else (modifiers, function keys, dead keys, ...).
    Other,
}

impl Key {
    pub fn from_dom(key: &str) -> Self {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c);
        }
        match key {
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Mouse button, from DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other,
}

impl MouseButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => MouseButton::Other,
        }
    }
}

/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// Coordinates are in canvas space (already divided by the pixel scale).
    PointerDown { button: MouseButton, x: f32, y: f32 },
    PointerUp { button: MouseButton, x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
}

/// A queue of input events plus the action state derived from them.
/// JS pushes events between frames; the runner folds them in with `begin_frame`
/// and drops them with `end_frame`.
pub struct InputQueue {
    events: Vec<InputEvent>,
    actions: ActionState,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            actions: ActionState::new(),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Apply this frame's events to the action state and recompute the
    /// just-pressed / just-released edges. Call once per frame, before any query.
    pub fn begin_frame(&mut self) {
        for event in &self.events {
            self.actions.apply(event);
        }
        self.actions.update();
    }

    /// Drop this frame's events. Held keys stay held.
    pub fn end_frame(&mut self) {
        self.events.clear();
    }

    /// Keys pressed this frame, in arrival order (auto-repeat included).
    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(|e| match e {
            InputEvent::KeyDown { key } => Some(*key),
            _ => None,
        })
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn actions(&self) -> &ActionState {
        &self.actions
    }

    pub fn is_action_pressed(&self, action: Action) -> bool {
        self.actions.is_action_pressed(action)
    }

    pub fn is_action_just_pressed(&self, action: Action) -> bool {
        self.actions.is_action_just_pressed(action)
    }

    pub fn is_action_released(&self, action: Action) -> bool {
        self.actions.is_action_released(action)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_keys() {
        assert_eq!(Key::from_dom("a"), Key::Char('a'));
        assert_eq!(Key::from_dom(" "), Key::Char(' '));
        assert_eq!(Key::from_dom("Backspace"), Key::Backspace);
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_dom("Shift"), Key::Other);
        assert_eq!(Key::from_dom(""), Key::Other);
        assert_eq!(MouseButton::from_dom(2), MouseButton::Right);
    }

    #[test]
    fn keys_down_in_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key: Key::Char('c') });
        q.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        q.push(InputEvent::KeyUp { key: Key::Char('c') });
        q.push(InputEvent::KeyDown { key: Key::Char('a') });
        let keys: Vec<Key> = q.keys_down().collect();
        assert_eq!(keys, vec![Key::Char('c'), Key::Char('a')]);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn end_frame_drops_events_but_keeps_held_keys() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key: Key::Enter });
        q.begin_frame();
        assert!(q.is_action_just_pressed(Action::Start));
        q.end_frame();
        assert!(q.is_empty());

        q.begin_frame();
        assert!(q.is_action_pressed(Action::Start));
        assert!(!q.is_action_just_pressed(Action::Start));
    }
}
