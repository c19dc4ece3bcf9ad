use smallvec::SmallVec;

use crate::errors::{Result, SlewError};
use crate::motion::Segment;
use crate::scene::SceneGraph;

type CompletionCallback = Box<dyn FnMut()>;

/// An ordered sequence of motion segments driven by one elapsed-time clock.
///
/// Each segment owns the slice of the normalized timeline proportional to
/// its own duration. A track is constructed stopped; `start` rewinds it and
/// the caller then advances it with per-frame `update` calls. Completion is
/// edge-triggered: the callback fires exactly once per `start`, either when
/// the clock runs past the end or on an explicit `stop`.
pub struct MotionTrack {
    segments: SmallVec<[Segment; 3]>,
    /// Normalized start time of each segment; `segments.len() + 1` entries,
    /// first 0, last exactly 1.
    start_times: SmallVec<[f32; 4]>,
    duration: f32,
    /// Elapsed seconds. `duration + 1.0` is the stopped sentinel.
    time: f32,
    completed: bool,
    on_complete: Option<CompletionCallback>,
}

impl MotionTrack {
    /// Builds a track over the given segments. At least one is required.
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Result<Self> {
        let segments: SmallVec<[Segment; 3]> = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(SlewError::EmptyTrack);
        }
        debug_assert!(
            segments.windows(2).all(|w| w[0].target() == w[1].target()),
            "all segments of a track must share one target"
        );

        let duration: f32 = segments.iter().map(Segment::duration).sum();

        let mut start_times: SmallVec<[f32; 4]> = SmallVec::with_capacity(segments.len() + 1);
        start_times.push(0.0);
        for (i, segment) in segments.iter().enumerate() {
            let fraction = if duration > 0.0 {
                segment.duration() / duration
            } else {
                0.0
            };
            let cumulative = start_times[i] + fraction;
            start_times.push(cumulative);
        }
        // absorb accumulated rounding error
        let last = start_times.len() - 1;
        start_times[last] = 1.0;

        Ok(Self {
            segments,
            start_times,
            duration,
            // constructed in the stopped state
            time: duration,
            completed: false,
            on_complete: None,
        })
    }

    /// Called once when the track finishes or is stopped. Typical use:
    /// re-enable the interactive controls that were parked for the motion.
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn start_times(&self) -> &[f32] {
        &self.start_times
    }

    /// Whether completion has fired since the last `start`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Rewinds the clock and re-arms the completion callback.
    pub fn start(&mut self) {
        self.time = 0.0;
        self.completed = false;
    }

    /// Advances the clock by `dt` seconds and interpolates the active
    /// segment.
    ///
    /// Past the end of the timeline the final segment is pinned at exactly
    /// `t = 1` (large steps may have overshot it) and completion fires once;
    /// every later call is a no-op. A never-started track behaves like a
    /// finished one. A track whose total duration is zero completes on the
    /// first call, snapping straight to the destination.
    pub fn update(&mut self, dt: f32, scene: &mut SceneGraph) {
        if self.duration <= 0.0 {
            if !self.completed {
                self.snap_to_end(scene);
                self.stop();
            }
            return;
        }

        let time = self.time + dt;
        let t = time / self.duration;
        if t > 1.0 {
            if !self.completed {
                self.snap_to_end(scene);
                self.stop();
            }
            return;
        }
        self.time = time;

        let ix = self.active_segment(t);
        let t_start = self.start_times[ix];
        let t_end = self.start_times[ix + 1];
        // zero-duration segments snap to their end
        let local = if t_end > t_start {
            (t - t_start) / (t_end - t_start)
        } else {
            1.0
        };
        self.segments[ix].interpolate(local, scene);
    }

    /// Moves the clock past the end and fires completion if it has not
    /// fired. Idempotent; the callback runs at most once per `start`.
    pub fn stop(&mut self) {
        self.time = self.duration + 1.0;
        if !self.completed {
            self.completed = true;
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
        }
    }

    fn snap_to_end(&self, scene: &mut SceneGraph) {
        if let Some(last) = self.segments.last() {
            last.interpolate(1.0, scene);
        }
    }

    /// Index of the segment active at normalized time `t`, the last
    /// segment's upper bound being inclusive of 1.
    fn active_segment(&self, t: f32) -> usize {
        for i in 0..self.segments.len() {
            if t < self.start_times[i + 1] {
                return i;
            }
        }
        self.segments.len() - 1
    }
}
