#![no_main]

use duoslider_engine::{RangeSliderState, Thumb};
use libfuzzer_sys::fuzz_target;

fn read_f64(data: &[u8], index: usize) -> f64 {
    let start = index * 8;
    match data.get(start..start + 8) {
        Some(bytes) => {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bytes);
            f64::from_le_bytes(buf)
        }
        None => 0.0,
    }
}

fuzz_target!(|data: &[u8]| {
    let v: Vec<f64> = (0..11).map(|i| read_f64(data, i)).collect();

    // Every setup call either succeeds or leaves the state untouched.
    let mut state = RangeSliderState::default();
    let steps: [&dyn Fn(&mut RangeSliderState) -> bool; 5] = [
        &|s| s.setup_limits(v[0], v[1]).is_ok(),
        &|s| s.setup_thumb_bounds(Thumb::Left, v[2], v[3]).is_ok(),
        &|s| s.setup_thumb_bounds(Thumb::Right, v[4], v[5]).is_ok(),
        &|s| s.setup_mid_bounds(v[6], v[7]).is_ok(),
        &|s| s.set_current_values(v[8], v[9], v[10]).is_ok(),
    ];
    for step in steps {
        let before = state.clone();
        if !step(&mut state) {
            assert_eq!(state, before);
        }
        assert!(state.left().is_finite() && state.right().is_finite());
        let limits = state.limits();
        assert!(limits.min <= limits.max);
        // successful or not, the state stays uncrossed with the mid in bounds
        assert!(state.mid() >= 0.0, "crossed: {state:?}");
        assert!(state.mid_bounds().contains(state.mid()), "mid {}", state.mid());
    }
});
