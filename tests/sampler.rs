mod common;

use common::synthetic_frame::dotted_outline_frame;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use surface_detector::{
    DetectorParams, FrameBuffer, FrameSampler, FrameSource, SamplerOptions, SurfaceDetector,
};

/// Source that stays not-ready for the first `warmup_polls` fetches, then
/// serves the dotted outline frame. Counts every poll.
struct StagedSource {
    warmup_polls: usize,
    polls: Arc<AtomicUsize>,
    frame: FrameBuffer,
}

impl FrameSource for StagedSource {
    fn current_frame(&mut self) -> Option<FrameBuffer> {
        let n = self.polls.fetch_add(1, Ordering::SeqCst);
        if n < self.warmup_polls {
            None
        } else {
            Some(self.frame.clone())
        }
    }
}

fn fast_options() -> SamplerOptions {
    SamplerOptions {
        interval: Duration::from_millis(10),
        warmup: Duration::ZERO,
    }
}

fn wait_for<F: Fn() -> bool>(deadline: Duration, cond: F) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    cond()
}

#[test]
fn sampler_defers_until_the_source_is_ready() {
    let _ = env_logger::builder().is_test(true).try_init();
    let polls = Arc::new(AtomicUsize::new(0));
    let source = StagedSource {
        warmup_polls: 3,
        polls: Arc::clone(&polls),
        frame: dotted_outline_frame(1),
    };
    let detector = SurfaceDetector::new(DetectorParams::default());

    let mut sampler = FrameSampler::start(detector, source, fast_options());
    let handle = sampler.handle();

    assert!(
        wait_for(Duration::from_secs(5), || handle
            .latest()
            .surface
            .is_some()),
        "sampler never published a detection"
    );
    // the not-ready polls happened before the first published result
    assert!(polls.load(Ordering::SeqCst) > 3);
    sampler.stop();
}

#[test]
fn stop_halts_ticks_and_is_idempotent() {
    let polls = Arc::new(AtomicUsize::new(0));
    let source = StagedSource {
        warmup_polls: 0,
        polls: Arc::clone(&polls),
        frame: dotted_outline_frame(1),
    };
    let detector = SurfaceDetector::new(DetectorParams::default());

    let mut sampler = FrameSampler::start(detector, source, fast_options());
    assert!(wait_for(Duration::from_secs(5), || {
        polls.load(Ordering::SeqCst) >= 2
    }));

    sampler.stop();
    let after_stop = polls.load(Ordering::SeqCst);
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(
        polls.load(Ordering::SeqCst),
        after_stop,
        "source polled after stop() returned"
    );

    // redundant stop is a no-op
    sampler.stop();
    sampler.stop();
}

#[test]
fn latest_result_is_replaced_not_accumulated() {
    let polls = Arc::new(AtomicUsize::new(0));
    let source = StagedSource {
        warmup_polls: 0,
        polls: Arc::clone(&polls),
        frame: dotted_outline_frame(1),
    };
    let detector = SurfaceDetector::new(DetectorParams::default());

    let mut sampler = FrameSampler::start(detector, source, fast_options());
    assert!(wait_for(Duration::from_secs(5), || {
        polls.load(Ordering::SeqCst) >= 3
    }));

    // Same frame every tick: the snapshot stays a single surface with the
    // same geometry no matter how many ticks have run.
    let first = sampler.latest();
    let second = sampler.latest();
    let a = first.surface.expect("detection published");
    let b = second.surface.expect("detection still published");
    assert_eq!(a.x_pct.to_bits(), b.x_pct.to_bits());
    assert_eq!(a.y_pct.to_bits(), b.y_pct.to_bits());
    sampler.stop();
}
