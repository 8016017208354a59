//! Named actions on top of raw keys and mouse buttons, with per-frame edge detection.

use std::collections::HashSet;

use glam::Vec2;

use super::queue::{InputEvent, Key, MouseButton};

/// A physical input that can trigger an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Key(Key),
    Mouse(MouseButton),
}

/// The fixed action set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LeftClick,
    RightClick,
    Jump,
    Duck,
    Start,
    Restart,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::LeftClick,
        Action::RightClick,
        Action::Jump,
        Action::Duck,
        Action::Start,
        Action::Restart,
    ];

    pub fn bindings(self) -> &'static [Binding] {
        match self {
            Action::LeftClick => &[Binding::Mouse(MouseButton::Left)],
            Action::RightClick => &[Binding::Mouse(MouseButton::Right)],
            Action::Jump => &[
                Binding::Key(Key::ArrowUp),
                Binding::Key(Key::Char('w')),
                Binding::Key(Key::Char('W')),
                Binding::Key(Key::Char(' ')),
            ],
            Action::Duck => &[
                Binding::Key(Key::ArrowDown),
                Binding::Key(Key::Char('s')),
                Binding::Key(Key::Char('S')),
            ],
            Action::Start => &[Binding::Key(Key::Enter)],
            Action::Restart => &[Binding::Key(Key::Char('r')), Binding::Key(Key::Char('R'))],
        }
    }
}

/// Held / just-pressed / just-released state for every binding.
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    held: HashSet<Binding>,
    /// Went down at some point since the last `update`, even if already released again.
    pressed_since_update: HashSet<Binding>,
    previous: HashSet<Binding>,
    just_pressed: HashSet<Binding>,
    just_released: HashSet<Binding>,
    pointer: Vec2,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one raw event into the held set and pointer position.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => self.press(Binding::Key(key)),
            InputEvent::KeyUp { key } => {
                self.held.remove(&Binding::Key(key));
            }
            InputEvent::PointerDown { button, x, y } => {
                self.pointer = Vec2::new(x, y);
                self.press(Binding::Mouse(button));
            }
            InputEvent::PointerUp { button, x, y } => {
                self.pointer = Vec2::new(x, y);
                self.held.remove(&Binding::Mouse(button));
            }
            InputEvent::PointerMove { x, y } => self.pointer = Vec2::new(x, y),
        }
    }

    /// Recompute the edges against the previous frame. Call once per frame.
    pub fn update(&mut self) {
        let seen: HashSet<Binding> = self.held.union(&self.pressed_since_update).copied().collect();

        self.just_pressed = seen.difference(&self.previous).copied().collect();
        self.just_released = self
            .previous
            .union(&self.pressed_since_update)
            .filter(|b| !self.held.contains(b))
            .copied()
            .collect();

        self.previous = self.held.clone();
        self.pressed_since_update.clear();
    }

    pub fn is_action_pressed(&self, action: Action) -> bool {
        action.bindings().iter().any(|b| self.held.contains(b))
    }

    pub fn is_action_just_pressed(&self, action: Action) -> bool {
        action.bindings().iter().any(|b| self.just_pressed.contains(b))
    }

    /// Whether one of the action's bindings went up this frame.
    pub fn is_action_released(&self, action: Action) -> bool {
        action.bindings().iter().any(|b| self.just_released.contains(b))
    }

    /// Last known pointer position in canvas space.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    fn press(&mut self, binding: Binding) {
        self.held.insert(binding);
        self.pressed_since_update.insert(binding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(c: char) -> InputEvent {
        InputEvent::KeyDown { key: Key::Char(c) }
    }

    fn up(c: char) -> InputEvent {
        InputEvent::KeyUp { key: Key::Char(c) }
    }

    #[test]
    fn press_hold_release_edges() {
        let mut s = ActionState::new();
        s.apply(&down('r'));
        s.update();
        assert!(s.is_action_just_pressed(Action::Restart));
        assert!(s.is_action_pressed(Action::Restart));
        assert!(!s.is_action_released(Action::Restart));

        s.update();
        assert!(!s.is_action_just_pressed(Action::Restart));
        assert!(s.is_action_pressed(Action::Restart));

        s.apply(&up('r'));
        s.update();
        assert!(!s.is_action_pressed(Action::Restart));
        assert!(s.is_action_released(Action::Restart));

        s.update();
        assert!(!s.is_action_released(Action::Restart));
    }

    #[test]
    fn tap_within_one_frame_still_counts() {
        let mut s = ActionState::new();
        s.apply(&InputEvent::KeyDown { key: Key::Enter });
        s.apply(&InputEvent::KeyUp { key: Key::Enter });
        s.update();
        assert!(s.is_action_just_pressed(Action::Start));
        assert!(s.is_action_released(Action::Start));
        assert!(!s.is_action_pressed(Action::Start));
    }

    #[test]
    fn any_binding_triggers_action() {
        let mut s = ActionState::new();
        s.apply(&down(' '));
        s.update();
        assert!(s.is_action_just_pressed(Action::Jump));
        assert!(!s.is_action_just_pressed(Action::Duck));
    }

    #[test]
    fn mouse_buttons_and_pointer() {
        let mut s = ActionState::new();
        s.apply(&InputEvent::PointerMove { x: 10.0, y: 20.0 });
        s.apply(&InputEvent::PointerDown {
            button: MouseButton::Right,
            x: 11.0,
            y: 21.0,
        });
        s.update();
        assert!(s.is_action_just_pressed(Action::RightClick));
        assert!(!s.is_action_pressed(Action::LeftClick));
        assert_eq!(s.pointer(), Vec2::new(11.0, 21.0));
    }

    #[test]
    fn every_action_has_a_binding() {
        for action in Action::ALL {
            assert!(!action.bindings().is_empty(), "{action:?}");
        }
    }
}
