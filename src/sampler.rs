//! Timer-driven frame sampling.
//!
//! [`FrameSampler`] owns the capture loop: it polls a [`FrameSource`] at a
//! fixed, deliberately slow cadence (seconds, not rendered frames — the
//! detector's cost scales with resolution and a faster cadence would starve
//! rendering on constrained devices), runs the detector on each frame, and
//! publishes the latest [`DetectionResult`] for any number of readers.
//!
//! Concurrency model: at most one detection pass is ever in flight. A tick
//! that arrives while a pass is running is dropped, not queued. The published
//! result has exactly one writer (the tick) and is replaced wholesale,
//! last-write-wins. A source that is not ready yet, or whose device went
//! away, simply yields no frame; the loop keeps polling and no fault
//! propagates out of a tick.
use crate::detector::SurfaceDetector;
use crate::image::FrameBuffer;
use crate::types::DetectionResult;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Provider of decoded camera frames.
///
/// Return `None` while the source has not decoded enough data to sample, and
/// after the capture device becomes unavailable. The sampler never treats
/// `None` as an error; staleness detection is the caller's concern.
pub trait FrameSource: Send + 'static {
    fn current_frame(&mut self) -> Option<FrameBuffer>;
}

/// Sampling cadence.
#[derive(Clone, Copy, Debug)]
pub struct SamplerOptions {
    /// Delay between ticks.
    pub interval: Duration,
    /// Delay before the first tick, giving the source time to start decoding.
    pub warmup: Duration,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            warmup: Duration::from_millis(1500),
        }
    }
}

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was sampled and a result published.
    Completed,
    /// A previous pass was still in flight; this tick was dropped.
    SkippedBusy,
    /// The source had no frame to offer.
    NotReady,
}

struct Shared {
    running: AtomicBool,
    in_flight: AtomicBool,
    latest: Mutex<DetectionResult>,
}

impl Shared {
    fn new() -> Self {
        Self {
            running: AtomicBool::new(true),
            in_flight: AtomicBool::new(false),
            latest: Mutex::new(DetectionResult::default()),
        }
    }

    fn tick<S: FrameSource>(&self, detector: &SurfaceDetector, source: &mut S) -> TickOutcome {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            debug!("FrameSampler tick dropped, previous pass still in flight");
            return TickOutcome::SkippedBusy;
        }
        let outcome = match source.current_frame() {
            Some(frame) => {
                let result = detector.detect(frame.as_view());
                *self.latest.lock().unwrap() = result;
                TickOutcome::Completed
            }
            None => TickOutcome::NotReady,
        };
        self.in_flight.store(false, Ordering::Release);
        outcome
    }
}

/// Cloneable read handle onto the latest published result.
#[derive(Clone)]
pub struct ResultHandle {
    shared: Arc<Shared>,
}

impl ResultHandle {
    /// Snapshot of the most recent detection result.
    pub fn latest(&self) -> DetectionResult {
        self.shared.latest.lock().unwrap().clone()
    }
}

/// Capture loop driving a [`SurfaceDetector`] from a [`FrameSource`].
pub struct FrameSampler {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl FrameSampler {
    /// Spawn the capture loop. The first tick fires after `opts.warmup`.
    pub fn start<S: FrameSource>(
        detector: SurfaceDetector,
        mut source: S,
        opts: SamplerOptions,
    ) -> Self {
        let shared = Arc::new(Shared::new());
        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            sleep_while_running(&worker_shared, opts.warmup);
            while worker_shared.running.load(Ordering::Acquire) {
                worker_shared.tick(&detector, &mut source);
                sleep_while_running(&worker_shared, opts.interval);
            }
        });
        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Snapshot of the most recent detection result.
    pub fn latest(&self) -> DetectionResult {
        self.shared.latest.lock().unwrap().clone()
    }

    /// Read handle that outlives borrows of the sampler.
    pub fn handle(&self) -> ResultHandle {
        ResultHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Stop the loop and join the worker. Once this returns no further
    /// detection pass runs. Redundant calls are no-ops.
    pub fn stop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for FrameSampler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sleep in short slices so `stop()` stays responsive at multi-second
/// intervals.
fn sleep_while_running(shared: &Shared, total: Duration) {
    const SLICE: Duration = Duration::from_millis(20);
    let mut remaining = total;
    while !remaining.is_zero() && shared.running.load(Ordering::Acquire) {
        let nap = remaining.min(SLICE);
        thread::sleep(nap);
        remaining = remaining.saturating_sub(nap);
    }
}
