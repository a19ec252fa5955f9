use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;

/// Discrete player intents, one per qualifying input event.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveForward,
}

impl PlayerAction {
    /// Key presses (including OS auto-repeat) of `w`/`W` map to a forward
    /// step. Releases and every other key map to nothing.
    pub fn from_keyboard(input: &KeyboardInput) -> Option<Self> {
        if input.state != ButtonState::Pressed {
            return None;
        }
        match &input.logical_key {
            Key::Character(c) if c.eq_ignore_ascii_case("w") => Some(Self::MoveForward),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn key_event(text: &str, state: ButtonState, repeat: bool) -> KeyboardInput {
    use bevy::input::keyboard::KeyCode;

    KeyboardInput {
        key_code: KeyCode::KeyW,
        logical_key: Key::Character(text.into()),
        state,
        text: None,
        repeat,
        window: Entity::PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("w", ButtonState::Pressed, false, Some(PlayerAction::MoveForward))]
    #[case("W", ButtonState::Pressed, false, Some(PlayerAction::MoveForward))]
    #[case("w", ButtonState::Pressed, true, Some(PlayerAction::MoveForward))]
    #[case("w", ButtonState::Released, false, None)]
    #[case("s", ButtonState::Pressed, false, None)]
    #[case("ww", ButtonState::Pressed, false, None)]
    fn maps_only_w_presses(
        #[case] text: &str,
        #[case] state: ButtonState,
        #[case] repeat: bool,
        #[case] expected: Option<PlayerAction>,
    ) {
        assert_eq!(PlayerAction::from_keyboard(&key_event(text, state, repeat)), expected);
    }

    #[test]
    fn arrow_keys_are_ignored() {
        let mut ev = key_event("w", ButtonState::Pressed, false);
        ev.logical_key = Key::ArrowUp;
        assert_eq!(PlayerAction::from_keyboard(&ev), None);
    }
}
