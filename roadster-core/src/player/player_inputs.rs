use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum SteerDirection {
    Left,
    Right,
}

impl SteerDirection {
    // raw steering target for a held direction; left is negative
    pub fn target(&self) -> f64 {
        match self {
            SteerDirection::Left => -1.0,
            SteerDirection::Right => 1.0,
        }
    }

    pub fn mirrored(&self) -> SteerDirection {
        match self {
            SteerDirection::Left => SteerDirection::Right,
            SteerDirection::Right => SteerDirection::Left,
        }
    }
}

// InputEvent is a single driver request, as a host (keyboard poller, script,
// recording) would hand it over during a frame
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Accelerate,
    Brake,
    Steer(SteerDirection),
    ToggleEngine,
}

// Intent is everything the driver asked for during one frame; the vehicle
// update consumes exactly one of these per tick
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub accelerate: bool,
    pub brake: bool,
    pub steer: Option<SteerDirection>,
    pub toggle_engine: bool,
}

impl Intent {
    /// Raw steering target for the frame: -1, 0 or +1.
    pub fn steer_target(&self) -> f64 {
        self.steer.map_or(0.0, |direction| direction.target())
    }

    /// The same intent with left and right swapped.
    pub fn mirrored(&self) -> Intent {
        Intent {
            steer: self.steer.map(|direction| direction.mirrored()),
            ..*self
        }
    }
}

/// Collects driver requests between two ticks.
///
/// Every request is idempotent within a frame. Steering is last-wins, so a
/// caller polling both directions must order its calls deliberately, and any
/// number of engine toggles in one frame collapse into a single toggle.
#[derive(Debug, Default)]
pub struct IntentBuffer {
    pending: Intent,
}

impl IntentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_accelerate(&mut self) {
        self.pending.accelerate = true;
    }

    pub fn request_brake(&mut self) {
        self.pending.brake = true;
    }

    pub fn request_steer(&mut self, direction: SteerDirection) {
        self.pending.steer = Some(direction);
    }

    pub fn request_engine_toggle(&mut self) {
        self.pending.toggle_engine = true;
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Accelerate => self.request_accelerate(),
            InputEvent::Brake => self.request_brake(),
            InputEvent::Steer(direction) => self.request_steer(direction),
            InputEvent::ToggleEngine => self.request_engine_toggle(),
        }
    }

    pub fn peek(&self) -> &Intent {
        &self.pending
    }

    /// Hands over this frame's intent and leaves the buffer empty.
    pub fn drain(&mut self) -> Intent {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_drains_to_nothing() {
        let mut buffer = IntentBuffer::new();
        let intent = buffer.drain();

        assert_eq!(intent, Intent::default());
        assert_eq!(intent.steer_target(), 0.0);
    }

    #[test]
    fn test_last_steer_request_wins() {
        let mut buffer = IntentBuffer::new();
        buffer.request_steer(SteerDirection::Left);
        buffer.request_steer(SteerDirection::Right);
        assert_eq!(buffer.drain().steer_target(), 1.0);

        buffer.request_steer(SteerDirection::Right);
        buffer.request_steer(SteerDirection::Left);
        assert_eq!(buffer.drain().steer_target(), -1.0);
    }

    #[test]
    fn test_repeated_requests_collapse() {
        let mut buffer = IntentBuffer::new();
        for _ in 0..3 {
            buffer.request_accelerate();
            buffer.request_brake();
            buffer.request_engine_toggle();
        }

        assert_eq!(
            buffer.drain(),
            Intent {
                accelerate: true,
                brake: true,
                steer: None,
                toggle_engine: true,
            }
        );
    }

    #[test]
    fn test_drain_resets_buffer() {
        let mut buffer = IntentBuffer::new();
        buffer.push(InputEvent::Accelerate);
        buffer.push(InputEvent::Steer(SteerDirection::Left));
        buffer.push(InputEvent::ToggleEngine);

        let first = buffer.drain();
        assert!(first.accelerate && first.toggle_engine);
        assert_eq!(first.steer, Some(SteerDirection::Left));

        assert_eq!(*buffer.peek(), Intent::default());
        assert_eq!(buffer.drain(), Intent::default());
    }

    #[test]
    fn test_mirrored_intent_swaps_steering_only() {
        let intent = Intent {
            accelerate: true,
            brake: false,
            steer: Some(SteerDirection::Left),
            toggle_engine: true,
        };
        let mirrored = intent.mirrored();

        assert_eq!(mirrored.steer, Some(SteerDirection::Right));
        assert_eq!(mirrored.accelerate, intent.accelerate);
        assert_eq!(mirrored.toggle_engine, intent.toggle_engine);
        assert_eq!(Intent::default().mirrored(), Intent::default());
    }
}
