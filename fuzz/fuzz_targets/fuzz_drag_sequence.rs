#![no_main]

use arbitrary::Arbitrary;
use duoslider_core::event::PointerSample;
use duoslider_core::geometry::Rect;
use duoslider_engine::{Bounds, BoundsKind, RangeSlider, RangeSliderState, SliderEvent, Thumb};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Down { x: i16, y: u8 },
    Move { x: i16 },
    Up,
    Cancel,
    Resize { width: u16, height: u8 },
}

#[derive(Debug, Arbitrary)]
struct Input {
    /// Limits span in tenths, 1..=6553.6.
    span: u16,
    /// Thumb placement and range widening as fractions of 255.
    left: u8,
    right: u8,
    widen: [u8; 6],
    ops: Vec<Op>,
}

fn frac(b: u8) -> f64 {
    f64::from(b) / 255.0
}

fn build(input: &Input) -> Option<RangeSliderState> {
    let span = f64::from(input.span.max(1)) / 10.0;
    let a = span * frac(input.left);
    let b = (span - a) * frac(input.right);
    let w = input.widen.map(frac);

    let mut state =
        RangeSliderState::with_limits(Bounds::new(BoundsKind::Limits, 0.0, span).ok()?);
    state
        .setup_thumb_bounds(Thumb::Left, a * (1.0 - w[0]), a + w[1] * (span - a))
        .ok()?;
    state
        .setup_thumb_bounds(Thumb::Right, b * (1.0 - w[2]), b + w[3] * (span - b))
        .ok()?;
    let mid = state.mid_for(a, b);
    state.set_current_values(a, mid, b).ok()?;
    state
        .setup_mid_bounds(mid * (1.0 - w[4]), mid + w[5] * (span - mid))
        .ok()?;
    Some(state)
}

fuzz_target!(|input: Input| {
    let Some(state) = build(&input) else {
        return;
    };
    let mut slider = RangeSlider::new(state);
    slider.set_view_bounds(Rect::from_size(335.0, 70.0));
    slider.subscribe(|_: &SliderEvent| {});

    let mut x = 0.0;
    for op in input.ops.iter().take(256) {
        let sample = match *op {
            Op::Down { x: nx, y } => {
                x = f64::from(nx);
                PointerSample::down(x, f64::from(y))
            }
            Op::Move { x: nx } => {
                x = f64::from(nx);
                PointerSample::moved(x, 35.0)
            }
            Op::Up => PointerSample::up(x, 35.0),
            Op::Cancel => PointerSample::cancel(x, 35.0),
            Op::Resize { width, height } => {
                slider.set_view_bounds(Rect::from_size(f64::from(width), f64::from(height)));
                continue;
            }
        };
        let before = slider.state().clone();
        slider.handle_pointer(sample);

        let state = slider.state();
        let limits = state.limits();
        let tol = 1e-9 * limits.span().max(1.0);

        // Non-crossing.
        assert!(
            (state.left() - limits.min) + (state.right() - limits.min) <= limits.span() + tol,
            "thumbs crossed: {state:?}"
        );
        // Both values stay finite and inside the limits.
        for thumb in [Thumb::Left, Thumb::Right] {
            let v = state.value(thumb);
            assert!(v.is_finite());
            assert!(v >= limits.min - tol && v <= limits.max + tol, "{thumb} {v}");
        }
        // A step that moved nothing leaves the state bit-identical.
        if state.left() == before.left() && state.right() == before.right() {
            assert_eq!(state.mid().to_bits(), before.mid().to_bits());
        } else {
            assert!(state.mid_bounds().contains(state.mid()), "mid {}", state.mid());
        }
    }
});
