use crate::motion::MotionTrack;
use crate::scene::SceneGraph;

/// Owner of the at-most-one running track for a target.
///
/// Two tracks must never race for the same node's transform, so replacing a
/// transition goes through `begin`: the outgoing track is stopped first —
/// firing its completion so observers release whatever they reserved — and
/// only then does the new track take the target.
#[derive(Default)]
pub struct MotionDriver {
    track: Option<MotionTrack>,
}

impl MotionDriver {
    #[must_use]
    pub fn new() -> Self {
        Self { track: None }
    }

    /// Stops the current transition, if any, then starts `track`.
    pub fn begin(&mut self, mut track: MotionTrack) {
        if let Some(old) = self.track.as_mut() {
            old.stop();
        }
        track.start();
        self.track = Some(track);
    }

    /// Advances the running transition; call once per frame. Idle drivers
    /// do nothing. A finished track is released.
    pub fn update(&mut self, dt: f32, scene: &mut SceneGraph) {
        if let Some(track) = self.track.as_mut() {
            track.update(dt, scene);
            if track.is_complete() {
                self.track = None;
            }
        }
    }

    /// Stops and discards the current transition. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(track) = self.track.as_mut() {
            track.stop();
        }
        self.track = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.track.is_some()
    }
}
