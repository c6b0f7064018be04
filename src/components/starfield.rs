//! Decorative night-sky background: twinkling stars plus a few meteors.
//!
//! Both layers are generated from a seed drawn once per mount, so the sky
//! stays put while the rest of the page re-renders.

use fastrand::Rng;
use yew::prelude::*;

use crate::config::{METEOR_COUNT, STAR_COUNT};

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub left: f64,
    pub top: f64,
    pub size: u8,
    pub delay: f64,
    pub duration: f64,
    pub dx: f64,
    pub dy: f64,
    pub drift: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeteorTrail {
    pub top: f64,
    pub left: f64,
    pub delay: f64,
    pub duration: f64,
    pub blur: f64,
    pub length: f64,
    pub angle: f64,
    pub distance: f64,
}

/// Seed for one mounted sky layer. Held in component state, so only a remount
/// draws a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkySeed(u64);

impl SkySeed {
    pub fn draw() -> Self {
        Self(fastrand::u64(..))
    }

    pub fn stars(self, count: usize) -> Vec<Star> {
        generate_stars(count, self.0)
    }

    pub fn meteors(self, count: usize) -> Vec<MeteorTrail> {
        generate_meteors(count, self.0)
    }
}

pub fn generate_stars(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = Rng::with_seed(seed);
    (0..count)
        .map(|_| Star {
            left: rng.f64() * 100.0,
            top: rng.f64() * 100.0,
            size: if rng.f64() < 0.18 { 2 } else { 1 },
            delay: rng.f64() * 8.0,
            duration: 4.2 + rng.f64() * 6.2,
            dx: rng.f64() * 32.0 - 16.0,
            dy: rng.f64() * 32.0 - 16.0,
            drift: 10.0 + rng.f64() * 8.0,
        })
        .collect()
}

pub fn generate_meteors(count: usize, seed: u64) -> Vec<MeteorTrail> {
    let mut rng = Rng::with_seed(seed);
    (0..count)
        .map(|_| MeteorTrail {
            top: rng.f64() * 100.0,
            left: rng.f64() * 100.0,
            delay: rng.f64() * 8.0,
            duration: 1.2 + rng.f64() * 1.6,
            blur: rng.f64() * 1.4,
            length: 8.0 + rng.f64() * 20.0,
            angle: -(15.0 + rng.f64() * 60.0),
            distance: 110.0 + rng.f64() * 40.0,
        })
        .collect()
}

impl Star {
    fn style(&self) -> String {
        format!(
            "left: {left}%; top: {top}%; width: {size}px; height: {size}px; \
             animation: twinkle {dur:.2}s ease-in-out {delay:.2}s infinite alternate, drift {drift:.2}s linear {delay:.2}s infinite; \
             --dx: {dx:.1}px; --dy: {dy:.1}px;",
            left = self.left,
            top = self.top,
            size = self.size,
            dur = self.duration,
            delay = self.delay,
            drift = self.drift,
            dx = self.dx,
            dy = self.dy,
        )
    }
}

impl MeteorTrail {
    fn style(&self) -> String {
        format!(
            "top: {top}%; left: {left}%; width: {length:.0}vw; filter: blur({blur:.1}px); \
             animation: meteor {dur:.2}s linear {delay:.2}s infinite; \
             --angle: {angle:.0}deg; --dist: {dist:.0}vw;",
            top = self.top,
            left = self.left,
            length = self.length,
            blur = self.blur,
            dur = self.duration,
            delay = self.delay,
            angle = self.angle,
            dist = self.distance,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub count: usize,
}

#[function_component(Starfield)]
pub fn starfield(props: &FieldProps) -> Html {
    let seed = use_state(SkySeed::draw);
    let stars = use_memo(|&(count, seed): &(usize, SkySeed)| seed.stars(count), (props.count, *seed));

    html! {
        <div aria-hidden="true" class="sky-layer">
            { for stars.iter().map(|s| html! { <span class="star" style={s.style()} /> }) }
        </div>
    }
}

#[function_component(ShootingStars)]
pub fn shooting_stars(props: &FieldProps) -> Html {
    let seed = use_state(SkySeed::draw);
    let meteors = use_memo(|&(count, seed): &(usize, SkySeed)| seed.meteors(count), (props.count, *seed));

    html! {
        <div aria-hidden="true" class="sky-layer meteors">
            { for meteors.iter().map(|m| html! { <span class="meteor" style={m.style()} /> }) }
        </div>
    }
}

#[function_component(GlobalBackground)]
pub fn global_background() -> Html {
    html! {
        <div class="global-background">
            <Starfield count={STAR_COUNT} />
            <ShootingStars count={METEOR_COUNT} />
            <style>
                {r#"
                    .global-background {
                        pointer-events: none;
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                    }
                    .sky-layer {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                    }
                    .sky-layer.meteors {
                        overflow: hidden;
                    }
                    .star {
                        position: absolute;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 0 6px rgba(255, 255, 255, 0.45);
                    }
                    .meteor {
                        position: absolute;
                        display: block;
                        height: 1px;
                        will-change: transform;
                        background: linear-gradient(90deg, rgba(255,255,255,0), rgba(255,255,255,.95), rgba(255,255,255,0));
                    }
                    @keyframes twinkle {
                        from { opacity: .25; transform: scale(.9) }
                        to { opacity: .95; transform: scale(1) }
                    }
                    @keyframes drift {
                        0% { transform: translate(0,0) }
                        50% { transform: translate(var(--dx,8px), var(--dy,-8px)) }
                        100% { transform: translate(0,0) }
                    }
                    @keyframes meteor {
                        0%   { transform: rotate(var(--angle)) translateX(-12vw); opacity: 0; }
                        8%   { opacity: 1; }
                        100% { transform: rotate(var(--angle)) translateX(var(--dist)); opacity: 0; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .star, .meteor { animation: none !important; }
                        .meteor { display: none; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_percent_range(v: f64) -> bool {
        (0.0..100.0).contains(&v)
    }

    #[test]
    fn yields_exactly_the_requested_count() {
        for n in [0, 1, 7, 95, 400] {
            assert_eq!(generate_stars(n, 42).len(), n);
            assert_eq!(generate_meteors(n, 42).len(), n);
        }
    }

    #[test]
    fn star_fields_stay_in_range() {
        for seed in 0..20 {
            for s in generate_stars(95, seed) {
                assert!(in_percent_range(s.left) && in_percent_range(s.top));
                assert!(s.size == 1 || s.size == 2);
                assert!((0.0..8.0).contains(&s.delay));
                assert!((4.2..10.4).contains(&s.duration));
                assert!((-16.0..16.0).contains(&s.dx) && (-16.0..16.0).contains(&s.dy));
                assert!((10.0..18.0).contains(&s.drift));
            }
        }
    }

    #[test]
    fn meteor_fields_stay_in_range() {
        for seed in 0..20 {
            for m in generate_meteors(7, seed) {
                assert!(in_percent_range(m.left) && in_percent_range(m.top));
                assert!((1.2..2.8).contains(&m.duration));
                assert!((0.0..1.4).contains(&m.blur));
                assert!((8.0..28.0).contains(&m.length));
                assert!(m.angle <= -15.0 && m.angle > -75.0);
                assert!((110.0..150.0).contains(&m.distance));
            }
        }
    }

    #[test]
    fn same_seed_same_sky() {
        assert_eq!(generate_stars(95, 7), generate_stars(95, 7));
        assert_eq!(generate_meteors(7, 7), generate_meteors(7, 7));
        assert_ne!(generate_stars(95, 7), generate_stars(95, 8));
    }

    #[test]
    fn locale_toggles_leave_the_sky_alone() {
        use crate::locale::{LocaleAction, LocaleState, Track};

        let seed = SkySeed::draw();
        let sky = (seed.stars(STAR_COUNT), seed.meteors(METEOR_COUNT));
        let props = FieldProps { count: STAR_COUNT };

        let mut locale = LocaleState::default();
        for action in [
            LocaleAction::ToggleCurrency,
            LocaleAction::ToggleLanguage,
            LocaleAction::SetTrack(Track::Service),
        ] {
            locale = locale.apply(action);
            // Parent re-renders hand the layer identical props and the same seed.
            assert!(props == FieldProps { count: STAR_COUNT });
            assert_eq!((seed.stars(STAR_COUNT), seed.meteors(METEOR_COUNT)), sky);
        }
        assert_ne!(locale, LocaleState::default());
    }

    #[test]
    fn some_stars_are_large() {
        let stars = generate_stars(1000, 3);
        let large = stars.iter().filter(|s| s.size == 2).count();
        assert!(large > 100 && large < 300, "unexpected share of large stars: {}", large);
    }

    #[test]
    fn star_style_sets_drift_variables() {
        let star = Star {
            left: 12.5,
            top: 50.0,
            size: 2,
            delay: 1.0,
            duration: 5.0,
            dx: -3.0,
            dy: 4.0,
            drift: 12.0,
        };
        let style = star.style();
        assert!(style.starts_with("left: 12.5%; top: 50%; width: 2px; height: 2px;"));
        assert!(style.contains("twinkle 5.00s ease-in-out 1.00s"));
        assert!(style.contains("--dx: -3.0px; --dy: 4.0px;"));
    }
}
