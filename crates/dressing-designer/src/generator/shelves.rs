use dressing_core::MaterialId;
use tracing::warn;

use super::ensure_finite;
use crate::error::GenerationError;
use crate::model::{Component, ShelfPart, SHELF_SIDE_CLEARANCE};
use crate::thickness::ThicknessProfile;
use crate::zone::{ShelfSettings, ShelfSpacing, ZoneFrame};

pub(super) fn generate(
    settings: &ShelfSettings,
    frame: &ZoneFrame,
    profile: &ThicknessProfile,
    material: &MaterialId,
) -> Result<Vec<Component>, GenerationError> {
    ensure_finite(frame, "retraction", settings.retraction)?;
    for position in &settings.custom_positions {
        ensure_finite(frame, "custom_positions", *position)?;
    }

    if settings.shelf_count == 0 {
        return Ok(Vec::new());
    }

    let depth = frame.interior_depth() - settings.retraction;
    if depth <= 0.0 {
        warn!(
            "Zone {}: retraction {}mm leaves no shelf depth, skipping shelves",
            frame.zone_index, settings.retraction
        );
        return Ok(Vec::new());
    }
    if frame.width <= 2.0 * SHELF_SIDE_CLEARANCE {
        warn!("Zone {}: too narrow for shelves", frame.zone_index);
        return Ok(Vec::new());
    }

    let thickness = profile.shelves;
    Ok(shelf_heights(settings, frame, thickness)
        .into_iter()
        .enumerate()
        .map(|(i, y)| {
            ShelfPart::build(
                frame,
                i,
                y,
                settings.retraction,
                settings.adjustable,
                thickness,
                material,
            )
        })
        .collect())
}

/// Shelf centre heights in cabinet coordinates
fn shelf_heights(settings: &ShelfSettings, frame: &ZoneFrame, thickness: f64) -> Vec<f64> {
    let count = settings.shelf_count as usize;

    if settings.spacing == ShelfSpacing::Custom {
        if settings.custom_positions.len() == count {
            let low = frame.interior_bottom() + thickness / 2.0;
            let high = (frame.interior_top() - thickness / 2.0).max(low);
            return settings
                .custom_positions
                .iter()
                .map(|p| {
                    let y = frame.y + p;
                    if y < low || y > high {
                        warn!(
                            "Zone {}: shelf at {}mm lies outside the zone, clamping",
                            frame.zone_index, p
                        );
                    }
                    y.clamp(low, high)
                })
                .collect();
        }
        warn!(
            "Zone {}: {} custom positions for {} shelves, using even spacing",
            frame.zone_index,
            settings.custom_positions.len(),
            count
        );
    }

    let spacing = frame.usable_height() / (count + 1) as f64;
    (1..=count)
        .map(|i| frame.interior_bottom() + spacing * i as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::Dimensions;
    use crate::zone::Zone;

    fn frame() -> ZoneFrame {
        ZoneFrame::for_zone(
            &Zone::new(0, 0.0, 600.0, 2000.0),
            &ThicknessProfile::default(),
            &Dimensions::new(600.0, 2000.0, 600.0),
            true,
        )
    }

    #[test]
    fn test_even_spacing() {
        let settings = ShelfSettings::default();
        let shelves = generate(
            &settings,
            &frame(),
            &ThicknessProfile::default(),
            &MaterialId::default(),
        )
        .unwrap();

        let heights: Vec<f64> = shelves.iter().map(|s| s.placement().y).collect();
        assert_eq!(heights, vec![509.0, 1000.0, 1491.0]);
        assert_eq!(shelves[0].width, 598.0);
        assert_eq!(shelves[0].length, 600.0 - 20.0 - 8.0);
        assert_eq!(shelves[2].id.as_str(), "shelf-z0-2");
    }

    #[test]
    fn test_custom_positions_need_one_per_shelf() {
        let settings = ShelfSettings {
            shelf_count: 2,
            spacing: ShelfSpacing::Custom,
            custom_positions: vec![400.0],
            ..Default::default()
        };
        let heights = shelf_heights(&settings, &frame(), 18.0);
        assert_eq!(heights.len(), 2);
        assert!((heights[0] - (18.0 + 1964.0 / 3.0)).abs() < 1e-9);

        let settings = ShelfSettings {
            custom_positions: vec![400.0, 1200.0],
            ..settings
        };
        assert_eq!(shelf_heights(&settings, &frame(), 18.0), vec![400.0, 1200.0]);
    }

    #[test]
    fn test_nan_retraction_is_fatal() {
        let settings = ShelfSettings {
            retraction: f64::NAN,
            ..Default::default()
        };
        let err = generate(
            &settings,
            &frame(),
            &ThicknessProfile::default(),
            &MaterialId::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GenerationError::NonFiniteSetting { .. }));
    }
}
