//! Tests for DisplayInfo
//!

use display_info::{DisplayFlags, DisplayInfo, DisplayState, Size};
use rand::Rng;

fn phone(rotation: i32, state: DisplayState) -> DisplayInfo {
    DisplayInfo::new(1080, 2400, 420, rotation, 0, DisplayFlags::empty(), state)
}

#[test]
fn natural_size_undoes_rotation() {
    assert_eq!(phone(0, DisplayState::On).natural_size(), Size::new(1080, 2400));
    assert_eq!(phone(1, DisplayState::On).natural_size(), Size::new(2400, 1080));
    assert_eq!(phone(2, DisplayState::On).natural_size(), Size::new(1080, 2400));
    assert_eq!(phone(3, DisplayState::On).natural_size(), Size::new(2400, 1080));
}

#[test]
fn natural_size_rotates_back_to_logical_size() {
    let mut rng = rand::rng();

    for _ in 0..1000 {
        let width = rng.random_range(0..=8192);
        let height = rng.random_range(0..=8192);
        let rotation = rng.random_range(0..4);

        let info = DisplayInfo::new(
            width,
            height,
            320,
            rotation,
            0,
            DisplayFlags::empty(),
            DisplayState::On,
        );

        assert_eq!(info.natural_size().rotated(rotation), info.logical_size());
    }
}

#[test]
fn is_on() {
    for state in DisplayState::ALL {
        let expected = matches!(state, DisplayState::On | DisplayState::Vr);
        assert_eq!(phone(0, state).is_on(), expected, "{state}");
    }

    assert!(!phone(0, DisplayState::Doze).is_on());
    assert!(!phone(0, DisplayState::DozeSuspend).is_on());
    assert!(!phone(0, DisplayState::OnSuspend).is_on());
    assert!(phone(0, DisplayState::Vr).is_on());
}

#[test]
fn fields_read_back() {
    let info = DisplayInfo::new(
        1440,
        3120,
        560,
        2,
        7,
        DisplayFlags::ROUND,
        DisplayState::DozeSuspend,
    );

    assert_eq!(info.logical_size(), Size::new(1440, 3120));
    assert_eq!(info.logical_density_dpi(), 560);
    assert_eq!(info.rotation(), 2);
    assert_eq!(info.layer_stack(), 7);
    assert_eq!(info.flags(), DisplayFlags::ROUND);
    assert_eq!(info.state(), DisplayState::DozeSuspend);
    assert!(info.is_round());
}

#[test]
fn rotation_is_normalized() {
    assert_eq!(phone(5, DisplayState::On).rotation(), 1);
    assert_eq!(phone(-1, DisplayState::On).rotation(), 3);
    assert_eq!(phone(-4, DisplayState::On).rotation(), 0);
    assert_eq!(phone(-1, DisplayState::On).natural_size(), Size::new(2400, 1080));
}

#[test]
fn negative_dimensions_are_clamped() {
    let info = DisplayInfo::new(-5, 100, 160, 0, 0, DisplayFlags::empty(), DisplayState::On);
    assert_eq!(info.logical_size(), Size::new(0, 100));
}

#[test]
fn from_raw() {
    let info = DisplayInfo::from_raw(1080, 2400, 420, 1, 0, 1 << 4, 5);

    assert!(info.is_round());
    assert_eq!(info.state(), DisplayState::Vr);
    assert_eq!(info.flags().bits(), 16);

    let unknown = DisplayInfo::from_raw(1080, 2400, 420, 1, 0, 0, 42);
    assert_eq!(unknown.state(), DisplayState::Unknown);
}

#[test]
fn default_is_empty() {
    let info = DisplayInfo::default();

    assert_eq!(info.logical_size(), Size::default());
    assert_eq!(info.state(), DisplayState::Unknown);
    assert!(info.flags().is_empty());
    assert!(!info.is_on());
}

#[test]
fn debug_string() {
    let info = DisplayInfo::new(1080, 2400, 420, 1, 0, DisplayFlags::ROUND, DisplayState::On);

    assert_eq!(
        info.to_debug_string(),
        "DisplayInfo {logical_size: 1080x2400, logical_density_dpi: 420, rotation: 1, layer_stack: 0, flags: 0x10, state: STATE_ON}"
    );
    assert_eq!(info.to_debug_string(), info.to_string());

    // Never fails on extreme values.
    let extreme = DisplayInfo::from_raw(i32::MAX, i32::MIN, i32::MIN, i32::MIN, i32::MAX, -1, -1);
    assert!(extreme.to_debug_string().starts_with("DisplayInfo {"));
}

#[test]
fn debug_string_is_deterministic() {
    let base = DisplayInfo::new(1080, 2400, 420, 1, 0, DisplayFlags::empty(), DisplayState::On);
    let same = DisplayInfo::new(1080, 2400, 420, 1, 0, DisplayFlags::empty(), DisplayState::On);
    assert_eq!(base.to_debug_string(), same.to_debug_string());

    let variants = [
        DisplayInfo::new(1081, 2400, 420, 1, 0, DisplayFlags::empty(), DisplayState::On),
        DisplayInfo::new(1080, 2401, 420, 1, 0, DisplayFlags::empty(), DisplayState::On),
        DisplayInfo::new(1080, 2400, 421, 1, 0, DisplayFlags::empty(), DisplayState::On),
        DisplayInfo::new(1080, 2400, 420, 2, 0, DisplayFlags::empty(), DisplayState::On),
        DisplayInfo::new(1080, 2400, 420, 1, 1, DisplayFlags::empty(), DisplayState::On),
        DisplayInfo::new(1080, 2400, 420, 1, 0, DisplayFlags::ROUND, DisplayState::On),
        DisplayInfo::new(1080, 2400, 420, 1, 0, DisplayFlags::empty(), DisplayState::Vr),
    ];

    for variant in variants {
        assert_ne!(base.to_debug_string(), variant.to_debug_string());
    }
}

#[test]
fn changes_from() {
    let on = phone(0, DisplayState::On);

    assert!(on.changes_from(&on).is_empty());
    assert_eq!(on.changes_from(&on).to_string(), "none");

    let rotated = phone(1, DisplayState::On).changes_from(&on);
    assert!(rotated.geometry);
    assert!(rotated.requires_restart());
    assert_eq!(rotated.to_string(), "geometry");

    let vr = phone(0, DisplayState::Vr).changes_from(&on);
    assert!(vr.state);
    assert!(!vr.power);
    assert!(!vr.requires_restart());

    let dozing = phone(0, DisplayState::Doze).changes_from(&on);
    assert!(dozing.state && dozing.power);
    assert!(dozing.requires_restart());
    assert_eq!(dozing.to_string(), "state, power");

    let denser = DisplayInfo::new(1080, 2400, 480, 0, 0, DisplayFlags::empty(), DisplayState::On)
        .changes_from(&on);
    assert!(denser.density);
    assert!(!denser.requires_restart());
}
