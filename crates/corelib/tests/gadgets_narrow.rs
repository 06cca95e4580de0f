use wrapbypass_corelib::gadgets::narrow::{
    checked_narrow_to_u16, narrow_to_u16, preimages_below, wraps_on_narrowing,
};

fn reference(v: i64) -> u16 {
    let m = 65536i128;
    (((i128::from(v) % m) + m) % m) as u16
}

#[test]
fn narrowing_is_mod_65536() {
    let samples = [
        i64::MIN,
        i64::MIN + 1,
        -131061,
        -65536,
        -65525,
        -65440,
        -1,
        0,
        1,
        11,
        65535,
        65536,
        65547,
        i64::MAX - 1,
        i64::MAX,
    ];
    for v in samples {
        assert_eq!(narrow_to_u16(v), reference(v), "v = {v}");
    }
    for v in (-200_000i64..200_000).step_by(997) {
        assert_eq!(narrow_to_u16(v), reference(v), "v = {v}");
    }
}

#[test]
fn checked_narrowing_refuses_what_wraps() {
    assert_eq!(checked_narrow_to_u16(65535), Some(u16::MAX));
    assert_eq!(checked_narrow_to_u16(-65525), None);
    assert!(wraps_on_narrowing(65536));
    assert!(!wraps_on_narrowing(0));
}

#[test]
fn several_accepted_inputs_collide_on_eleven() {
    let hits: Vec<i64> = preimages_below(11, 10).take(3).collect();
    assert_eq!(hits, vec![-65525, -131061, -196597]);
    for v in hits {
        assert!(v < 10);
        assert_eq!(narrow_to_u16(v), 11);
    }
}
