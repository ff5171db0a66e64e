use super::*;

const HERO: Rect = Rect {
    left: 100.0,
    top: 50.0,
    width: 400.0,
    height: 200.0,
};

#[test]
fn offset_scales_from_center_and_clamps() {
    let mut p = Parallax::new(false);

    assert!(p.on_pointer_move(HERO, 400.0, 100.0).is_some());
    assert_eq!(p.on_frame(), Offset { x: 12, y: -9 });

    // Far outside the hero clamps to the edge travel.
    assert!(p.on_pointer_move(HERO, 5000.0, -5000.0).is_some());
    assert_eq!(p.on_frame(), Offset { x: 24, y: -18 });
}

#[test]
fn coalesces_moves_into_one_frame() {
    let mut p = Parallax::new(false);
    assert!(p.on_pointer_move(HERO, 300.0, 150.0).is_some());
    assert!(p.on_pointer_move(HERO, 350.0, 150.0).is_none());
    assert!(p.on_pointer_move(HERO, 500.0, 150.0).is_none());

    // The frame applies the latest position only.
    assert_eq!(p.on_frame(), Offset { x: 24, y: 0 });
    assert!(p.on_pointer_move(HERO, 300.0, 150.0).is_some());
}

#[test]
fn leave_resets_to_zero() {
    let mut p = Parallax::new(false);
    let _ = p.on_pointer_move(HERO, 500.0, 250.0);
    let _ = p.on_frame();
    assert!(p.on_pointer_leave().is_some());
    let off = p.on_frame();
    assert_eq!(off, Offset::default());
    assert_eq!(
        off.css_vars(),
        [
            ("--sh-mx", "0px".to_string()),
            ("--sh-my", "0px".to_string())
        ]
    );
}

#[test]
fn reduced_motion_disables_parallax() {
    let mut p = Parallax::new(true);
    assert!(!p.is_enabled());
    assert!(p.on_pointer_move(HERO, 500.0, 250.0).is_none());
    assert!(p.on_pointer_leave().is_none());
}

#[test]
fn zero_sized_hero_does_not_divide_by_zero() {
    let mut p = Parallax::new(false);
    let tiny = Rect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };
    let _ = p.on_pointer_move(tiny, 0.4, -0.4);
    assert_eq!(p.on_frame(), Offset { x: 10, y: -7 });
}

#[test]
fn halves_round_towards_positive_infinity() {
    assert_eq!(round_half_up(-0.5), 0);
    assert_eq!(round_half_up(0.5), 1);
    assert_eq!(round_half_up(-1.5), -1);
}
