use winit::event::{ElementState, KeyboardInput, VirtualKeyCode, WindowEvent};

/// Player intent decoded from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    TurnLeft,
    TurnRight,
    Quit,
    /// Emitted for every key release; restarts a finished game.
    AnyKeyRelease,
}

/// Intents for one released key, `AnyKeyRelease` first.
pub fn intents_for_release(key: Option<VirtualKeyCode>) -> Vec<Intent> {
    let mut intents = vec![Intent::AnyKeyRelease];
    match key {
        Some(VirtualKeyCode::Left) => intents.push(Intent::TurnLeft),
        Some(VirtualKeyCode::Right) => intents.push(Intent::TurnRight),
        Some(VirtualKeyCode::Escape) => intents.push(Intent::Quit),
        _ => {}
    }
    intents
}

/// Decodes a window event. Only key releases carry intents; presses and
/// repeats are ignored.
pub fn intents_for_event(event: &WindowEvent<'_>) -> Vec<Intent> {
    match event {
        WindowEvent::KeyboardInput {
            input:
                KeyboardInput {
                    state: ElementState::Released,
                    virtual_keycode,
                    ..
                },
            ..
        } => intents_for_release(*virtual_keycode),
        _ => Vec::new(),
    }
}
