//! Platform abstraction layer
//!
//! The animator never schedules itself. A host supplies frame timestamps:
//! the browser chains `requestAnimationFrame`, while native code and tests
//! pull timestamps from a `FrameClock`.

use rand::Rng;

use crate::consts::FRAME_INTERVAL_MS;
use crate::renderer::DrawSurface;
use crate::sim::StarField;

/// Source of monotonic frame timestamps (ms)
pub trait FrameClock {
    /// Timestamp for the next frame, or `None` once cancelled
    fn next_frame(&mut self) -> Option<f64>;
}

/// Evenly spaced synthetic frames
#[derive(Debug, Clone)]
pub struct FixedClock {
    now_ms: f64,
    interval_ms: f64,
    remaining: u64,
}

impl FixedClock {
    /// `frames` timestamps starting at `start_ms`, one refresh apart
    pub fn new(start_ms: f64, frames: u64) -> Self {
        Self {
            now_ms: start_ms,
            interval_ms: FRAME_INTERVAL_MS,
            remaining: frames,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

impl FrameClock for FixedClock {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let t = self.now_ms;
        self.now_ms += self.interval_ms;
        Some(t)
    }
}

impl<F: FnMut() -> Option<f64>> FrameClock for F {
    fn next_frame(&mut self) -> Option<f64> {
        self()
    }
}

/// Run/stop bookkeeping for a host-chained frame loop
#[derive(Debug, Clone)]
pub struct LoopState {
    running: bool,
    pending: Option<i32>,
}

impl Default for LoopState {
    fn default() -> Self {
        Self {
            running: true,
            pending: None,
        }
    }
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remember the handle of the frame requested last
    pub fn set_pending(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// Stop the loop, handing back the pending frame to cancel
    pub fn stop(&mut self) -> Option<i32> {
        self.running = false;
        self.pending.take()
    }

    /// Mark the loop running again; true when the host must request a frame
    pub fn resume(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }
}

/// Step `field` once per clock frame until the clock stops
///
/// Returns the number of frames stepped.
pub fn drive<R, S, C>(field: &mut StarField<R>, surface: &mut S, clock: &mut C) -> u64
where
    R: Rng,
    S: DrawSurface + ?Sized,
    C: FrameClock + ?Sized,
{
    let mut frames = 0;
    while let Some(t) = clock.next_frame() {
        field.step(Some(&mut *surface), t);
        frames += 1;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::FieldConfig;

    #[test]
    fn test_fixed_clock_spacing() {
        let mut clock = FixedClock::new(100.0, 3);
        assert_eq!(clock.next_frame(), Some(100.0));
        assert_eq!(clock.next_frame(), Some(100.0 + FRAME_INTERVAL_MS));
        let third = clock.next_frame().unwrap();
        assert!((third - (100.0 + 2.0 * FRAME_INTERVAL_MS)).abs() < 1e-9);
        assert_eq!(clock.next_frame(), None);
        assert_eq!(clock.next_frame(), None);
        assert!((clock.now_ms() - (100.0 + 3.0 * FRAME_INTERVAL_MS)).abs() < 1e-9);
    }

    #[test]
    fn test_closure_clock_cancels_mid_run() {
        let mut field = StarField::new(FieldConfig::default(), 3);
        let mut surface = RecordingSurface::new(64, 64);
        field.resize(&mut surface, 64, 64);
        let mut inner = FixedClock::new(0.0, 1000);
        let mut clock = || {
            let t = inner.next_frame()?;
            (t < 90.0).then_some(t)
        };
        assert_eq!(drive(&mut field, &mut surface, &mut clock), 6);
        assert_eq!(clock(), None);
    }

    #[test]
    fn test_loop_stop_and_resume() {
        let mut state = LoopState::default();
        assert!(state.is_running());
        assert!(!state.resume());

        state.set_pending(7);
        assert_eq!(state.stop(), Some(7));
        assert!(!state.is_running());
        assert_eq!(state.stop(), None);

        assert!(state.resume());
        assert!(state.is_running());
        assert!(!state.resume());
    }

    #[test]
    fn test_drive_counts_frames() {
        let mut field = StarField::new(FieldConfig::default(), 3);
        let mut surface = RecordingSurface::new(64, 64);
        field.resize(&mut surface, 64, 64);
        let frames = drive(&mut field, &mut surface, &mut FixedClock::new(0.0, 25));
        assert_eq!(frames, 25);
        assert_eq!(field.frame(), 25);
    }

    #[test]
    fn test_closure_clock() {
        let mut field = StarField::new(FieldConfig::default(), 3);
        let mut surface = RecordingSurface::new(64, 64);
        field.resize(&mut surface, 64, 64);
        let mut times = vec![48.0, 32.0, 16.0];
        let mut clock = move || times.pop();
        assert_eq!(drive(&mut field, &mut surface, &mut clock), 3);
    }
}
