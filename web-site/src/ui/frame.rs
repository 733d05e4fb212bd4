//! Frame loops - animation ticks that end when there is nothing left to move
//!
//! A loop wakes roughly every frame and hands the elapsed time to its step.
//! The step answers with `ControlFlow::Break` once it has settled, which ends
//! the task. [`Ticker`] can be woken again later, so sprung motion only runs
//! while a spring is actually moving.

use std::ops::ControlFlow;

use dioxus::prelude::*;

/// Tick interval, about 60 Hz
pub const FRAME_MS: u32 = 16;

type FrameStep = Box<dyn FnMut(f32) -> ControlFlow<()>>;

/// Seconds elapsed between two `Date.now()` readings, never negative
pub fn frame_delta(prev_ms: f64, now_ms: f64) -> f32 {
    ((now_ms - prev_ms).max(0.0) / 1000.0) as f32
}

/// Keep ticking until `settled`
pub fn continue_until(settled: bool) -> ControlFlow<()> {
    if settled {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

async fn run_frames(mut on_frame: impl FnMut(f32) -> ControlFlow<()>) {
    let mut last = js_sys::Date::now();
    loop {
        gloo_timers::future::TimeoutFuture::new(FRAME_MS).await;
        let now = js_sys::Date::now();
        if on_frame(frame_delta(last, now)).is_break() {
            break;
        }
        last = now;
    }
}

/// Run `on_frame(dt_seconds)` from mount until it breaks or the component unmounts
pub fn use_frame_loop(on_frame: impl FnMut(f32) -> ControlFlow<()> + 'static) {
    use_hook(move || {
        spawn(run_frames(on_frame));
    });
}

/// A frame loop that sleeps between bursts of motion
#[derive(Clone, Copy)]
pub struct Ticker {
    running: CopyValue<bool>,
    step: CopyValue<FrameStep>,
}

impl Ticker {
    /// Start ticking unless a loop is already running
    pub fn wake(&self) {
        let mut running = self.running;
        if *running.peek() {
            return;
        }
        running.set(true);
        let mut step = self.step;
        spawn(async move {
            run_frames(move |dt| {
                let mut guard = step.write();
                let on_frame = &mut *guard;
                on_frame(dt)
            })
            .await;
            running.set(false);
        });
    }
}

/// A [`Ticker`] owned by the calling component; idle until first woken
pub fn use_ticker(on_frame: impl FnMut(f32) -> ControlFlow<()> + 'static) -> Ticker {
    use_hook(move || Ticker {
        running: CopyValue::new(false),
        step: CopyValue::new(Box::new(on_frame) as FrameStep),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_in_seconds() {
        assert_eq!(frame_delta(1_000.0, 1_016.0), 0.016);
    }

    #[test]
    fn clock_going_backwards_is_zero() {
        assert_eq!(frame_delta(2_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn settled_step_breaks() {
        assert!(continue_until(true).is_break());
        assert!(continue_until(false).is_continue());
    }

    #[test]
    fn sprung_step_stops_once_at_rest() {
        use crate::primitives::Position;
        use crate::transform::CursorFollower;

        let mut follower = CursorFollower::new();
        follower.pointer_move(Position::new(200.0, 120.0));

        let mut frames = 0;
        let flow = loop {
            frames += 1;
            follower.tick(1.0 / 60.0);
            let flow = continue_until(follower.is_at_rest());
            if flow.is_break() || frames > 600 {
                break flow;
            }
        };
        assert!(flow.is_break(), "still moving after {frames} frames");
    }
}
