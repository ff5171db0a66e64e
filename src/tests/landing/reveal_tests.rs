use super::*;

const ANIMATED: MotionEnv = MotionEnv {
    reduced_motion: false,
    observer_available: true,
};

fn hit(id: u32) -> Intersection<u32> {
    Intersection {
        target: id,
        is_intersecting: true,
    }
}

#[test]
fn reveals_once_and_stops_observing() {
    let mut r = Reveal::new([1, 2, 3], ANIMATED);
    assert_eq!(r.observed().count(), 3);
    assert_eq!(r.classes(&1), vec![REVEAL_CLASS]);

    let unobserve = r.on_intersect(&[
        hit(2),
        Intersection {
            target: 3,
            is_intersecting: false,
        },
    ]);
    assert_eq!(unobserve, vec![2]);
    assert!(r.is_revealed(&2));
    assert!(!r.is_revealed(&3));
    assert_eq!(r.classes(&2), vec![REVEAL_CLASS, REVEALED_CLASS]);

    // Already revealed elements are not reported again.
    assert!(r.on_intersect(&[hit(2)]).is_empty());
    assert_eq!(r.observed().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn reduced_motion_reveals_everything_immediately() {
    let r = Reveal::new(
        ["a", "b"],
        MotionEnv {
            reduced_motion: true,
            observer_available: true,
        },
    );
    assert!(r.all_revealed());
    assert_eq!(r.observed().count(), 0);
}

#[test]
fn missing_observer_reveals_everything_immediately() {
    let r = Reveal::new(["a"], MotionEnv::default());
    assert!(r.is_revealed(&"a"));
}

#[test]
fn unknown_elements_get_no_classes() {
    let r = Reveal::new([1], ANIMATED);
    assert!(r.classes(&9).is_empty());
    assert!(OBSERVER_OPTIONS.threshold > 0.0);
}
