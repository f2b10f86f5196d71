//! Partition properties

use dressing_designer::divider::normalize;
use dressing_designer::{partition, reconcile, Divider, ShelfSettings, Zone, ZoneContent};
use proptest::prelude::*;

const T: f64 = 18.0;

fn dividers(positions: &[f64]) -> Vec<Divider> {
    let mut list: Vec<Divider> = positions.iter().map(|p| Divider::new(*p, T)).collect();
    normalize(&mut list);
    list
}

/// Divider positions from gaps, plus the total width after a final gap
fn layout(gaps: &[f64], last: f64) -> (Vec<f64>, f64) {
    let mut positions = Vec::with_capacity(gaps.len());
    let mut x = 0.0;
    for gap in gaps {
        x += gap;
        positions.push(x);
    }
    (positions, x + last)
}

proptest! {
    #[test]
    fn partition_is_idempotent(
        gaps in prop::collection::vec(50.0f64..900.0, 0..6),
        last in 50.0f64..900.0,
    ) {
        let (positions, total) = layout(&gaps, last);
        let dividers = dividers(&positions);

        let first = partition(total, &dividers, T, 100.0);
        let second = partition(total, &dividers, T, 100.0);
        prop_assert_eq!(&first, &second);

        let zones = reconcile(&first, &[], 2400.0);
        let again = reconcile(&first, &zones, 2400.0);
        prop_assert_eq!(zones, again);
    }

    #[test]
    fn widths_are_conserved(
        gaps in prop::collection::vec((T + 1.0)..400.0, 0..8),
        last in (T + 1.0)..400.0,
        min_width in 50.0f64..250.0,
    ) {
        let (positions, total) = layout(&gaps, last);
        let dividers = dividers(&positions);
        let zones = partition(total, &dividers, T, min_width);

        // every interval between cut points, wide enough or not
        let mut bounds = vec![(0.0, 0.0)];
        bounds.extend(dividers.iter().map(|d| (d.position, d.end())));
        let mut intervals = Vec::with_capacity(bounds.len());
        for (i, (_, start)) in bounds.iter().enumerate() {
            let end = bounds.get(i + 1).map_or(total, |next| next.0);
            intervals.push(end - start);
        }

        let (kept, dropped): (Vec<f64>, Vec<f64>) =
            intervals.into_iter().partition(|w| *w >= min_width);
        prop_assert_eq!(zones.len(), kept.len());
        for piece in &dropped {
            prop_assert!(*piece < min_width);
        }

        let zone_widths: f64 = zones.iter().map(|z| z.width).sum();
        let thickness = T * dividers.len() as f64;
        let remainder: f64 = dropped.iter().sum();
        let covered = zone_widths + thickness + remainder;
        prop_assert!(
            (covered - total).abs() < 0.05,
            "zones {} + dividers {} + dropped {} != {}",
            zone_widths, thickness, remainder, total
        );
    }

    #[test]
    fn zones_are_ordered_and_wide_enough(
        gaps in prop::collection::vec(20.0f64..600.0, 0..8),
        last in 20.0f64..600.0,
        min_width in 50.0f64..300.0,
    ) {
        let (positions, total) = layout(&gaps, last);
        let zones = partition(total, &dividers(&positions), T, min_width);

        for (i, zone) in zones.iter().enumerate() {
            prop_assert_eq!(zone.index, i);
            prop_assert!(zone.width >= min_width - 0.01);
        }
        for pair in zones.windows(2) {
            prop_assert!(pair[0].start + pair[0].width <= pair[1].start);
        }
    }
}

#[test]
fn narrow_interval_is_dropped() {
    let zones = partition(2000.0, &dividers(&[1000.0, 1050.0]), T, 100.0);
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[1].start, 1068.0);
    assert_eq!(zones[1].index, 1);
}

#[test]
fn content_follows_start_position() {
    let before = partition(2000.0, &dividers(&[1000.0]), T, 100.0);
    let mut zones = reconcile(&before, &[], 2400.0);
    zones[1].content = ZoneContent::Shelves(ShelfSettings::default());

    // a divider inserted on the left shifts indices but not zone 1's start
    let after = partition(2000.0, &dividers(&[500.0, 1000.0]), T, 100.0);
    let zones: Vec<Zone> = reconcile(&after, &zones, 2400.0);
    assert_eq!(zones.len(), 3);
    assert_eq!(zones[2].position, 1018.0);
    assert!(matches!(zones[2].content, ZoneContent::Shelves(_)));
    assert!(matches!(zones[1].content, ZoneContent::Empty));
}
