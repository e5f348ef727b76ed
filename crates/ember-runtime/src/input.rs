//! Frame-scoped input state

use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Tracks keyboard and mouse state with per-tick edge detection.
///
/// The tracker registers nothing with the OS: the host event loop pushes
/// `process_*` notifications into it and game modules query it from their
/// update. Dropping the tracker releases everything, so a module rebuilding
/// its scene cannot leak handlers from a previous instance.
///
/// Call [`end_frame`](Self::end_frame) once per simulation tick, after the
/// module has consumed edge-triggered input — a key-down edge is then
/// visible for exactly one update.
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Keys pressed since the last end_frame
    keys_just_pressed: HashSet<KeyCode>,
    /// Keys released since the last end_frame
    keys_just_released: HashSet<KeyCode>,

    /// Mouse button state (button index -> pressed)
    mouse_buttons_down: HashSet<u32>,
    /// Mouse buttons pressed since the last end_frame
    mouse_buttons_just_pressed: HashSet<u32>,

    /// Current pointer position in surface pixels
    mouse_position: (f32, f32),

    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<KeyCode>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            keys_just_released: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_buttons_just_pressed: HashSet::new(),
            mouse_position: (0.0, 0.0),
            action_map: Self::default_action_map(),
        }
    }

    fn default_action_map() -> HashMap<String, Vec<KeyCode>> {
        let mut map = HashMap::new();
        // Arcade defaults shared by the game modules; each module rebinds
        // whichever actions it needs.
        map.insert("move_left".into(), vec![KeyCode::ArrowLeft, KeyCode::KeyA]);
        map.insert(
            "move_right".into(),
            vec![KeyCode::ArrowRight, KeyCode::KeyD],
        );
        map.insert("move_up".into(), vec![KeyCode::ArrowUp, KeyCode::KeyW]);
        map.insert("move_down".into(), vec![KeyCode::ArrowDown, KeyCode::KeyS]);
        map.insert("jump".into(), vec![KeyCode::Space]);
        map.insert("action".into(), vec![KeyCode::Enter]);
        map.insert("pause".into(), vec![KeyCode::KeyP]);
        map.insert("restart".into(), vec![KeyCode::KeyR]);
        map
    }

    /// Bind an action to one or more keys, replacing any existing binding
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Process a key press notification. Host key-repeat is filtered: only
    /// a real up-to-down transition registers a just-pressed edge.
    pub fn process_key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release notification
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_just_released.insert(key);
    }

    /// Process a mouse button press notification
    pub fn process_mouse_button_down(&mut self, button: u32) {
        if !self.mouse_buttons_down.contains(&button) {
            self.mouse_buttons_just_pressed.insert(button);
        }
        self.mouse_buttons_down.insert(button);
    }

    /// Process a mouse button release notification
    pub fn process_mouse_button_up(&mut self, button: u32) {
        self.mouse_buttons_down.remove(&button);
    }

    /// Process a pointer move notification
    pub fn process_mouse_move(&mut self, x: f32, y: f32) {
        self.mouse_position = (x, y);
    }

    /// Call once per simulation tick to clear edge state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
        self.mouse_buttons_just_pressed.clear();
    }

    // --- Query methods ---

    /// Is a key currently held down?
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Did the key transition down since the last end_frame?
    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Was the key released since the last end_frame?
    pub fn was_released(&self, key: KeyCode) -> bool {
        self.keys_just_released.contains(&key)
    }

    /// Is any key bound to the action held down?
    pub fn is_action_down(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false)
    }

    /// Did any key bound to the action transition down since the last
    /// end_frame?
    pub fn was_action_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_pressed.contains(k)))
            .unwrap_or(false)
    }

    /// Is a mouse button currently held?
    pub fn is_mouse_down(&self, button: u32) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Did the mouse button transition down since the last end_frame?
    pub fn was_mouse_pressed(&self, button: u32) -> bool {
        self.mouse_buttons_just_pressed.contains(&button)
    }

    /// Current pointer position in surface pixels
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }
}
