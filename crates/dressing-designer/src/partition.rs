//! Splits the cabinet width into zones at the divider positions.

use dressing_core::units::round2;
use tracing::debug;

use crate::divider::Divider;
use crate::zone::Zone;

/// Default minimum zone width in millimetres
pub const DEFAULT_MIN_ZONE_WIDTH: f64 = 100.0;

/// Start positions are considered equal within this tolerance when
/// carrying content across a re-partition.
const POSITION_MATCH_TOLERANCE: f64 = 0.5;

/// One interval produced by [`partition`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBounds {
    pub index: usize,
    pub start: f64,
    pub width: f64,
}

/// Computes the zone intervals between dividers.
///
/// Cut points are `0`, the sorted divider positions clamped to
/// `0..=total_width`, and `total_width`. The first interval starts at 0,
/// every other one right after the divider (`cut + divider_thickness`).
/// Intervals narrower than `min_zone_width` are dropped and the survivors
/// numbered from 0.
pub fn partition(
    total_width: f64,
    dividers: &[Divider],
    divider_thickness: f64,
    min_zone_width: f64,
) -> Vec<ZoneBounds> {
    let mut cuts: Vec<f64> = dividers
        .iter()
        .map(|d| d.position.clamp(0.0, total_width.max(0.0)))
        .collect();
    cuts.sort_by(f64::total_cmp);

    let mut points = Vec::with_capacity(cuts.len() + 2);
    points.push(0.0);
    points.extend(cuts);
    points.push(total_width);

    let mut zones = Vec::with_capacity(points.len() - 1);
    for (i, pair) in points.windows(2).enumerate() {
        let start = if i == 0 {
            pair[0]
        } else {
            pair[0] + divider_thickness
        };
        let width = pair[1] - start;

        if !(width >= min_zone_width) {
            debug!(
                "Dropping interval {} at {:.1}mm: width {:.1}mm < {:.1}mm",
                i, start, width, min_zone_width
            );
            continue;
        }

        zones.push(ZoneBounds {
            index: zones.len(),
            start: round2(start),
            width: round2(width),
        });
    }

    zones
}

/// Builds zones for new bounds, carrying content from `previous`.
///
/// A new zone takes over the previous zone starting at the same position.
/// When the zone count did not change, zones are matched by index instead
/// (a pure resize). Unmatched zones start empty.
pub fn reconcile(bounds: &[ZoneBounds], previous: &[Zone], height: f64) -> Vec<Zone> {
    let same_count = bounds.len() == previous.len();

    bounds
        .iter()
        .map(|b| {
            let matched = if same_count {
                previous.get(b.index)
            } else {
                previous
                    .iter()
                    .find(|z| (z.position - b.start).abs() <= POSITION_MATCH_TOLERANCE)
            };

            match matched {
                Some(old) => Zone {
                    index: b.index,
                    position: b.start,
                    width: b.width,
                    height,
                    ..old.clone()
                },
                None => Zone::new(b.index, b.start, b.width, height),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider::normalize;
    use crate::zone::{ShelfSettings, ZoneContent};

    fn dividers(positions: &[f64]) -> Vec<Divider> {
        let mut list: Vec<Divider> = positions.iter().map(|p| Divider::new(*p, 18.0)).collect();
        normalize(&mut list);
        list
    }

    #[test]
    fn test_no_dividers_single_zone() {
        let zones = partition(2000.0, &[], 18.0, 100.0);
        assert_eq!(
            zones,
            vec![ZoneBounds {
                index: 0,
                start: 0.0,
                width: 2000.0
            }]
        );
    }

    #[test]
    fn test_one_divider() {
        let zones = partition(2000.0, &dividers(&[1000.0]), 18.0, 100.0);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].width, 1000.0);
        assert_eq!(zones[1].start, 1018.0);
        assert_eq!(zones[1].width, 982.0);
        assert_eq!(zones[0].width + zones[1].width, 2000.0 - 18.0);
    }

    #[test]
    fn test_narrow_interval_dropped_and_renumbered() {
        let zones = partition(2000.0, &dividers(&[50.0, 1000.0]), 18.0, 100.0);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].index, 0);
        assert_eq!(zones[0].start, 68.0);
        assert_eq!(zones[1].index, 1);
    }

    #[test]
    fn test_dividers_past_the_width_are_clamped() {
        let zones = partition(1000.0, &dividers(&[1500.0]), 18.0, 100.0);
        assert_eq!(
            zones,
            vec![ZoneBounds {
                index: 0,
                start: 0.0,
                width: 1000.0
            }]
        );

        let zones = partition(1000.0, &dividers(&[400.0, 1200.0, 1500.0]), 18.0, 100.0);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[1].start, 418.0);
        assert_eq!(zones[1].width, 582.0);
    }

    #[test]
    fn test_reconcile_keeps_content_by_position() {
        let mut previous = vec![Zone::new(0, 0.0, 2000.0, 2400.0)];
        previous[0].content = ZoneContent::Shelves(ShelfSettings::default());
        previous[0].locked = true;

        let bounds = partition(2000.0, &dividers(&[1000.0]), 18.0, 100.0);
        let zones = reconcile(&bounds, &previous, 2400.0);

        assert_eq!(zones.len(), 2);
        assert!(matches!(zones[0].content, ZoneContent::Shelves(_)));
        assert!(zones[0].locked);
        assert_eq!(zones[0].width, 1000.0);
        assert_eq!(zones[1].content, ZoneContent::Empty);
    }

    #[test]
    fn test_reconcile_resize_keeps_content_by_index() {
        let bounds = partition(2000.0, &dividers(&[1000.0]), 18.0, 100.0);
        let mut previous = reconcile(&bounds, &[], 2400.0);
        previous[1].content = ZoneContent::Shelves(ShelfSettings::default());

        let moved = partition(2000.0, &dividers(&[1200.0]), 18.0, 100.0);
        let zones = reconcile(&moved, &previous, 2400.0);
        assert_eq!(zones[1].position, 1218.0);
        assert!(matches!(zones[1].content, ZoneContent::Shelves(_)));
    }
}
