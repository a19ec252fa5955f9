use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

use crate::actions::PlayerAction;
use crate::controller::PointerSample;

/// Raw window events → `PointerSample` / `PlayerAction`. Consumers order
/// themselves after this set.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputMappingSet;

/// One sample per `CursorMoved`, in arrival order, so steering runs at the
/// native pointer rate rather than once per frame.
pub fn pointer_mapping_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut moved: EventReader<CursorMoved>,
    mut samples: EventWriter<PointerSample>,
) {
    for ev in moved.read() {
        let Ok(window) = windows.get(ev.window) else { continue; };
        let viewport = Vec2::new(window.width(), window.height());
        if let Some(sample) = PointerSample::from_viewport(ev.position, viewport) {
            samples.write(sample);
        }
    }
}

pub fn key_mapping_system(
    mut keys: EventReader<KeyboardInput>,
    mut actions: EventWriter<PlayerAction>,
) {
    for ev in keys.read() {
        if let Some(action) = PlayerAction::from_keyboard(ev) {
            actions.write(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::key_event;
    use bevy::input::ButtonState;

    #[derive(Resource, Default)]
    struct Seen(Vec<PlayerAction>);

    fn collect(mut evr: EventReader<PlayerAction>, mut seen: ResMut<Seen>) {
        seen.0.extend(evr.read().copied());
    }

    #[test]
    fn every_press_and_repeat_becomes_one_action() {
        let mut app = App::new();
        app.add_event::<KeyboardInput>()
            .add_event::<PlayerAction>()
            .init_resource::<Seen>()
            .add_systems(Update, (key_mapping_system, collect).chain());

        let world = app.world_mut();
        world.send_event(key_event("w", ButtonState::Pressed, false));
        world.send_event(key_event("w", ButtonState::Pressed, true));
        world.send_event(key_event("W", ButtonState::Pressed, true));
        world.send_event(key_event("w", ButtonState::Released, false));
        world.send_event(key_event("d", ButtonState::Pressed, false));
        app.update();

        assert_eq!(app.world().resource::<Seen>().0, vec![PlayerAction::MoveForward; 3]);
    }

    #[test]
    fn cursor_events_from_unknown_windows_are_dropped() {
        let mut app = App::new();
        app.add_event::<CursorMoved>()
            .add_event::<PointerSample>()
            .add_systems(Update, pointer_mapping_system);

        app.world_mut().send_event(CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(10.0, 10.0),
            delta: None,
        });
        app.update();

        let events = app.world().resource::<Events<PointerSample>>();
        assert!(events.is_empty());
    }

    #[test]
    fn cursor_in_primary_window_is_normalized() {
        let mut app = App::new();
        app.add_event::<CursorMoved>()
            .add_event::<PointerSample>()
            .add_systems(Update, pointer_mapping_system);

        let mut window = Window::default();
        window.resolution.set(800.0, 600.0);
        let id = app.world_mut().spawn((window, PrimaryWindow)).id();
        app.world_mut().send_event(CursorMoved {
            window: id,
            position: Vec2::new(600.0, 150.0),
            delta: None,
        });
        app.update();

        let events = app.world().resource::<Events<PointerSample>>();
        let mut cursor = events.get_cursor();
        let got: Vec<_> = cursor.read(events).copied().collect();
        assert_eq!(got, vec![PointerSample::new(0.5, 0.5)]);
    }
}
