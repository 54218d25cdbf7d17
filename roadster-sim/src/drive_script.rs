use roadster_core::player::player_inputs::{InputEvent, IntentBuffer, SteerDirection};

// A stretch of driving: `held` inputs are requested on every frame of the
// segment, `taps` only on its first frame (engine toggles are edge-triggered)
#[derive(Clone, Debug)]
pub struct DriveSegment {
    pub label: &'static str,
    pub seconds: f64,
    pub held: Vec<InputEvent>,
    pub taps: Vec<InputEvent>,
}

impl DriveSegment {
    pub fn new(label: &'static str, seconds: f64, held: Vec<InputEvent>) -> Self {
        Self {
            label,
            seconds,
            held,
            taps: Vec::new(),
        }
    }

    pub fn with_tap(mut self, event: InputEvent) -> Self {
        self.taps.push(event);
        self
    }
}

/// Timed input for driving a car without a player at the keyboard.
#[derive(Clone, Debug, Default)]
pub struct DriveScript {
    pub segments: Vec<DriveSegment>,
}

impl DriveScript {
    // pull away, take a right-hander, flick left, coast and brake to a stop
    pub fn demo_lap(engine_already_running: bool) -> DriveScript {
        use InputEvent::*;

        let mut launch = DriveSegment::new("launch", 6.0, vec![Accelerate]);
        if !engine_already_running {
            launch = launch.with_tap(ToggleEngine);
        }

        DriveScript {
            segments: vec![
                launch,
                DriveSegment::new(
                    "right-hander",
                    2.0,
                    vec![Accelerate, Steer(SteerDirection::Right)],
                ),
                DriveSegment::new("flick left", 0.5, vec![Steer(SteerDirection::Left)]),
                DriveSegment::new("coast", 2.0, vec![]),
                DriveSegment::new("brake", 1.5, vec![Brake]),
                DriveSegment::new("park", 0.5, vec![]).with_tap(ToggleEngine),
            ],
        }
    }

    pub fn total_seconds(&self) -> f64 {
        self.segments.iter().map(|segment| segment.seconds).sum()
    }

    // which segment a frame starting at `elapsed` seconds falls into
    fn segment_at(&self, elapsed: f64) -> Option<usize> {
        let mut start = 0.0;
        for (index, segment) in self.segments.iter().enumerate() {
            if elapsed < start + segment.seconds {
                return Some(index);
            }
            start += segment.seconds;
        }
        None
    }
}

/// Plays a script back one frame at a time into a vehicle's intent buffer.
pub struct ScriptPlayer<'a> {
    script: &'a DriveScript,
    elapsed: f64,
    current: Option<usize>,
}

impl<'a> ScriptPlayer<'a> {
    pub fn new(script: &'a DriveScript) -> Self {
        Self {
            script,
            elapsed: 0.0,
            current: None,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.script.segment_at(self.elapsed).is_none()
    }

    /// Requests this frame's inputs and advances the clock by `dt`. Returns the
    /// label of the segment when a new one begins.
    pub fn feed(&mut self, dt: f64, intents: &mut IntentBuffer) -> Option<&'static str> {
        let index = self.script.segment_at(self.elapsed)?;
        let segment = &self.script.segments[index];
        let entered = self.current != Some(index);

        if entered {
            segment.taps.iter().for_each(|event| intents.push(*event));
        }
        segment.held.iter().for_each(|event| intents.push(*event));

        self.current = Some(index);
        self.elapsed += dt.max(0.0);

        if entered {
            Some(segment.label)
        } else {
            None
        }
    }
}
