use bevy::input::touch::Touch;
use bevy::input::InputSystem;
use bevy::prelude::*;

/// Pointer activity in window coordinates (origin top-left, y growing downward).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Dragged(Vec2),
    Released(Vec2),
}

/// Turns mouse-left and touch input into [`PointerEvent`]s.
pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<Touches>()
            .add_event::<PointerEvent>()
            .add_systems(PreUpdate, emit_pointer_events.after(InputSystem));
    }
}

pub fn just_pressed_screen_position(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.just_pressed(MouseButton::Left) {
        windows.get_single().ok()?.cursor_position()
    } else if touch_input.any_just_pressed() {
        let touch = touch_input.iter_just_pressed().next()?;
        Some(touch.position())
    } else {
        None
    }
}

/// Position of a pointer that is held down, excluding the frame it went down.
pub fn held_screen_position(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.pressed(MouseButton::Left) && !button_input.just_pressed(MouseButton::Left) {
        windows.get_single().ok()?.cursor_position()
    } else {
        touch_input
            .iter()
            .find(|touch| !touch_input.just_pressed(touch.id()))
            .map(Touch::position)
    }
}

pub fn just_released_screen_position(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.just_released(MouseButton::Left) {
        windows.get_single().ok()?.cursor_position()
    } else if touch_input.any_just_released() {
        let touch = touch_input.iter_just_released().next()?;
        Some(touch.position())
    } else {
        None
    }
}

fn emit_pointer_events(
    button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    mut last_position: Local<Option<Vec2>>,
    mut events: EventWriter<PointerEvent>,
) {
    if let Some(position) = just_pressed_screen_position(&button_input, &touch_input, &windows) {
        *last_position = Some(position);
        events.send(PointerEvent::Pressed(position));
    }

    if let Some(position) = held_screen_position(&button_input, &touch_input, &windows) {
        if *last_position != Some(position) {
            *last_position = Some(position);
            events.send(PointerEvent::Dragged(position));
        }
    }

    let released = button_input.just_released(MouseButton::Left) || touch_input.any_just_released();
    if released {
        // The cursor may have left the window; the drag still has to end.
        let position = just_released_screen_position(&button_input, &touch_input, &windows)
            .or(*last_position)
            .unwrap_or_default();
        *last_position = None;
        events.send(PointerEvent::Released(position));
    }
}
