use bevy::prelude::*;

pub const RESTART_KEY: KeyCode = KeyCode::KeyR;

/// A resource that can be put back into a fresh starting position.
pub trait Restartable: Resource {
    fn reset(&mut self);
}

pub fn handle_restart<T: Restartable>(
    keycode: Res<ButtonInput<KeyCode>>,
    mut restartable: ResMut<T>,
) {
    if keycode.just_pressed(RESTART_KEY) {
        info!("Restarting");
        restartable.reset();
    }
}
