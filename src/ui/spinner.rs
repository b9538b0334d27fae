/// Pulse animation shown next to the splash title.
pub const PULSE_FRAMES: [&str; 4] = ["█", "▓", "▒", "░"];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % PULSE_FRAMES.len();
    }

    pub fn frame(&self) -> &'static str {
        PULSE_FRAMES[self.frame]
    }
}
