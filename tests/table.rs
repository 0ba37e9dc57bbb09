use neopixel_panel::layout::{fixed_point_table, generate};
use neopixel_panel::{all, count, lookup, LayoutConfig, NeoPixelCoord, NEOPIXEL_COUNT};
use std::thread;

#[test]
fn lookup_covers_exactly_the_table() {
    assert_eq!(1200, count());
    for id in -5..count() + 5 {
        match lookup(id) {
            Some(coord) => {
                assert!((0..NEOPIXEL_COUNT).contains(&id));
                assert_eq!(id, coord.id);
            }
            None => assert!(id < 0 || id >= NEOPIXEL_COUNT),
        }
    }
}

#[test]
fn ids_are_contiguous() {
    for (index, coord) in all().iter().enumerate() {
        assert_eq!(index as i16, coord.id);
    }
}

#[test]
fn last_pixel() {
    assert_eq!(
        Some(&NeoPixelCoord {
            id: 1199,
            x: 3745,
            y: 7558,
            r: 8435,
            theta_deg: 2964
        }),
        lookup(NEOPIXEL_COUNT - 1)
    );
}

#[test]
fn concurrent_reads() {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|offset| {
                scope.spawn(move || {
                    (offset..count())
                        .step_by(4)
                        .filter_map(lookup)
                        .map(|coord| i64::from(coord.r))
                        .sum::<i64>()
                })
            })
            .collect();
        let total: i64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(all().iter().map(|c| i64::from(c.r)).sum::<i64>(), total);
    });
}

#[test]
fn default_layout_regenerates_the_table() {
    let config = LayoutConfig::default();
    let layout = generate(&config).unwrap();
    let generated = fixed_point_table(&layout, &config.neopixel).unwrap();
    assert_eq!(all(), generated.as_slice());
}
