use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// A requestAnimationFrame loop owned by whoever holds it.
///
/// The step closure receives the frame timestamp and returns `true` to ask for
/// another frame. Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    shared: Rc<Shared>,
}

struct Shared {
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Shared {
    fn request(&self) {
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        let Some(window) = window() else {
            return;
        };
        match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
        }
    }
}

impl FrameLoop {
    pub fn new<F>(mut step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let shared = Rc::new(Shared {
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });

        let weak = Rc::downgrade(&shared);
        let tick = Closure::wrap(Box::new(move |now: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.handle.set(None);
            if step(now) {
                shared.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *shared.tick.borrow_mut() = Some(tick);

        Self { shared }
    }

    /// Schedules the next frame unless one is already pending.
    pub fn start(&self) {
        if !self.is_running() {
            self.shared.request();
        }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.shared.handle.take() {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.handle.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.shared.tick.borrow_mut().take();
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Count-up from zero to `end` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub end: f64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(end: f64, duration_ms: f64) -> Self {
        Self { end, duration_ms }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let p = self.progress(elapsed_ms);
        if p >= 1.0 {
            self.end
        } else {
            self.end * ease_out_cubic(p)
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

pub const MAGNETIC_DAMPING: f64 = 0.18;
pub const MAGNETIC_EPSILON: f64 = 0.1;

/// Damped follow of a pointer-driven target offset, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagneticMotion {
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
}

impl MagneticMotion {
    /// Aims at the pointer's offset from the centre of `rect`, scaled by `strength`.
    ///
    /// `rect` is `(left, top, width, height)` in client coordinates.
    pub fn aim(&mut self, client_x: f64, client_y: f64, rect: (f64, f64, f64, f64), strength: f64) {
        let (left, top, width, height) = rect;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.target_x = ((client_x - left) / width - 0.5) * strength;
        self.target_y = ((client_y - top) / height - 0.5) * strength;
    }

    pub fn release(&mut self) {
        self.target_x = 0.0;
        self.target_y = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.x - self.target_x).abs() <= MAGNETIC_EPSILON
            && (self.y - self.target_y).abs() <= MAGNETIC_EPSILON
    }

    /// Advances one frame. Returns `false` once settled, snapping onto the target.
    pub fn step(&mut self) -> bool {
        self.x += (self.target_x - self.x) * MAGNETIC_DAMPING;
        self.y += (self.target_y - self.y) * MAGNETIC_DAMPING;
        if self.is_settled() {
            self.x = self.target_x;
            self.y = self.target_y;
            false
        } else {
            true
        }
    }

    pub fn transform(&self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released_loop() -> FrameLoop {
        FrameLoop {
            shared: Rc::new(Shared {
                handle: Cell::new(None),
                tick: RefCell::new(None),
            }),
        }
    }

    #[test]
    fn start_does_not_stack_frames() {
        let frames = released_loop();
        frames.start();
        assert!(!frames.is_running());

        frames.shared.handle.set(Some(7));
        assert!(frames.is_running());
        frames.start();
        assert_eq!(frames.shared.handle.get(), Some(7));

        // Nothing pending, so dropping never reaches the browser.
        frames.shared.handle.set(None);
    }

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn counter_is_monotonic_and_lands_on_target() {
        let anim = CounterAnimation::new(120.0, 900.0);
        let mut last = 0.0;
        for ms in (0..=1200).step_by(16) {
            let v = anim.value_at(ms as f64);
            assert!(v >= last, "value dropped at {}ms: {} < {}", ms, v, last);
            last = v;
        }
        assert_eq!(anim.value_at(900.0), 120.0);
        assert_eq!(anim.value_at(5_000.0), 120.0);
        assert!(anim.is_finished(900.0));
        assert!(!anim.is_finished(899.0));
    }

    #[test]
    fn counter_starts_at_zero() {
        let anim = CounterAnimation::new(4.8, 900.0);
        assert_eq!(anim.value_at(0.0), 0.0);
        assert!(anim.value_at(450.0) > 2.4);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let anim = CounterAnimation::new(1_000_000.0, 0.0);
        assert_eq!(anim.value_at(0.0), 1_000_000.0);
    }

    #[test]
    fn magnet_aims_relative_to_centre() {
        let mut motion = MagneticMotion::default();
        motion.aim(150.0, 20.0, (100.0, 0.0, 100.0, 40.0), 10.0);
        assert!((motion.target_x - 0.0).abs() < 1e-12);
        assert!((motion.target_y - 0.0).abs() < 1e-12);

        motion.aim(200.0, 40.0, (100.0, 0.0, 100.0, 40.0), 10.0);
        assert!((motion.target_x - 5.0).abs() < 1e-12);
        assert!((motion.target_y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn magnet_ignores_degenerate_rects() {
        let mut motion = MagneticMotion::default();
        motion.aim(10.0, 10.0, (0.0, 0.0, 0.0, 20.0), 10.0);
        assert_eq!(motion, MagneticMotion::default());
    }

    #[test]
    fn magnet_converges_and_stops() {
        let mut motion = MagneticMotion::default();
        motion.aim(0.0, 0.0, (0.0, 0.0, 10.0, 10.0), 10.0);
        let mut frames = 0;
        while motion.step() {
            frames += 1;
            assert!(frames < 100, "never settled");
        }
        assert_eq!(motion.x, -5.0);
        assert_eq!(motion.y, -5.0);

        motion.release();
        assert!(!motion.is_settled());
        while motion.step() {}
        assert_eq!((motion.x, motion.y), (0.0, 0.0));
    }

    #[test]
    fn first_step_moves_by_damping_factor() {
        let mut motion = MagneticMotion { target_x: 10.0, ..Default::default() };
        assert!(motion.step());
        assert!((motion.x - 1.8).abs() < 1e-12);
    }
}
