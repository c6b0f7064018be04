use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::animation::{CounterAnimation, FrameLoop};
use crate::config::{COUNTER_DURATION_MS, COUNTER_VISIBILITY_THRESHOLD};
use crate::hooks::use_in_view;
use crate::theme::prefers_reduced_motion;

/// Compact display used by the results strip: `1.2M`, `120`, `4.8`.
pub fn format_count(value: f64, decimals: usize) -> String {
    if decimals > 0 {
        return format!("{:.*}", decimals, value);
    }
    if value >= 1_000_000.0 {
        format!("{}M", (value / 100_000.0).round() / 10.0)
    } else if value >= 1_000.0 {
        format!("{}k", (value / 100.0).round() / 10.0)
    } else {
        format!("{}", value.round())
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub end: f64,
    #[prop_or_default]
    pub decimals: usize,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), COUNTER_VISIBILITY_THRESHOLD);
    let value = use_state(|| 0.0_f64);
    let finished = use_state(|| false);

    {
        let value = value.clone();
        let finished = finished.clone();
        use_effect_with_deps(move |&(visible, end): &(bool, f64)| {
            let mut frames = None;
            if visible {
                if prefers_reduced_motion() {
                    value.set(end);
                    finished.set(true);
                } else {
                    let anim = CounterAnimation::new(end, COUNTER_DURATION_MS);
                    let started_at = Rc::new(Cell::new(None::<f64>));
                    let frame_loop = FrameLoop::new(move |now| {
                        let start = started_at.get().unwrap_or_else(|| {
                            started_at.set(Some(now));
                            now
                        });
                        let elapsed = now - start;
                        value.set(anim.value_at(elapsed));
                        let done = anim.is_finished(elapsed);
                        if done {
                            finished.set(true);
                        }
                        !done
                    });
                    frame_loop.start();
                    frames = Some(frame_loop);
                }
            }
            move || drop(frames)
        }, (visible, props.end));
    }

    let suffix = match (&props.suffix, *finished) {
        (Some(suffix), true) => html! { <span class="counter-suffix">{ suffix }</span> },
        _ => html! {},
    };

    html! {
        <div ref={node} class="counter-card">
            <span class="counter-icon" aria-hidden="true">{"✓"}</span>
            <div>
                <div class="counter-value">
                    { format_count(*value, props.decimals) }
                    { suffix }
                </div>
                <div class="counter-label">{ &props.label }</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_round_to_integers() {
        assert_eq!(format_count(0.0, 0), "0");
        assert_eq!(format_count(119.6, 0), "120");
        assert_eq!(format_count(999.4, 0), "999");
    }

    #[test]
    fn thousands_and_millions_are_abbreviated() {
        assert_eq!(format_count(1_000.0, 0), "1k");
        assert_eq!(format_count(1_240.0, 0), "1.2k");
        assert_eq!(format_count(1_000_000.0, 0), "1M");
        assert_eq!(format_count(2_460_000.0, 0), "2.5M");
    }

    #[test]
    fn explicit_precision_wins() {
        assert_eq!(format_count(4.8, 1), "4.8");
        assert_eq!(format_count(0.0, 1), "0.0");
        assert_eq!(format_count(1_500_000.0, 2), "1500000.00");
    }

    #[test]
    fn displayed_values_climb_to_the_target() {
        let anim = CounterAnimation::new(1_000_000.0, COUNTER_DURATION_MS);
        let shown: Vec<String> = [0.0, 300.0, 600.0, 900.0]
            .iter()
            .map(|&ms| format_count(anim.value_at(ms), 0))
            .collect();
        assert_eq!(shown.first().map(String::as_str), Some("0"));
        assert_eq!(shown.last().map(String::as_str), Some("1M"));
    }
}
