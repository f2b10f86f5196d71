use dressing_core::MaterialId;
use tracing::warn;

use super::{ensure_finite, generate_sub_zone};
use crate::error::GenerationError;
use crate::model::{Component, SeparatorPart};
use crate::thickness::ThicknessProfile;
use crate::zone::{SeparationSettings, SubZoneContent, SubZoneName, ZoneFrame};

pub(super) fn generate(
    settings: &SeparationSettings,
    frame: &ZoneFrame,
    profile: &ThicknessProfile,
    material: &MaterialId,
) -> Result<Vec<Component>, GenerationError> {
    ensure_finite(frame, "separation_height", settings.separation_height)?;
    if settings.second_separation_enabled {
        ensure_finite(
            frame,
            "second_separation_height",
            settings.second_separation_height,
        )?;
    }

    let t = profile.horizontal_dividers;
    let half = t / 2.0;

    // separator centre heights above the frame bottom
    let lowest = frame.floor + half;
    let highest = frame.height - frame.ceiling - half;
    if highest < lowest {
        warn!(
            "Zone {}: {}mm is too low for a separator",
            frame.zone_index, frame.height
        );
        return Ok(Vec::new());
    }

    let first = clamp_height(
        frame,
        "separation_height",
        settings.separation_height,
        lowest,
        highest,
    );
    let second = if !settings.second_separation_enabled {
        None
    } else if settings.second_separation_height < first + t {
        warn!(
            "Zone {}: second separator at {}mm is not above the first at {}mm, ignoring it",
            frame.zone_index, settings.second_separation_height, first
        );
        None
    } else if first + t > highest {
        warn!(
            "Zone {}: no room for a second separator above {}mm, ignoring it",
            frame.zone_index, first
        );
        None
    } else {
        Some(clamp_height(
            frame,
            "second_separation_height",
            settings.second_separation_height,
            first + t,
            highest,
        ))
    };

    // (name, content, bottom, top, floor, ceiling) of each window
    let mut windows: Vec<(SubZoneName, &SubZoneContent, f64, f64, f64, f64)> =
        Vec::with_capacity(3);
    let top = frame.y + frame.height;
    let first_y = frame.y + first;
    windows.push((
        SubZoneName::Lower,
        &settings.lower,
        frame.y,
        first_y - half,
        frame.floor,
        0.0,
    ));
    let upper_bottom = match second {
        Some(second) => {
            let second_y = frame.y + second;
            windows.push((
                SubZoneName::Middle,
                &settings.middle,
                first_y + half,
                second_y - half,
                0.0,
                0.0,
            ));
            second_y + half
        }
        None => first_y + half,
    };
    windows.push((
        SubZoneName::Upper,
        &settings.upper,
        upper_bottom,
        top,
        0.0,
        frame.ceiling,
    ));

    let sub_frames: Vec<(ZoneFrame, &SubZoneContent)> = windows
        .into_iter()
        .map(|(name, content, bottom, top, floor, ceiling)| {
            (frame.sub_frame(name, bottom, top, floor, ceiling), content)
        })
        .collect();

    let mut components = Vec::new();
    let separator_heights = std::iter::once(first).chain(second);
    for (i, height) in separator_heights.enumerate() {
        let below = sub_frames[i].0.usable_height();
        let above = sub_frames[i + 1].0.usable_height();
        components.push(SeparatorPart::build(
            frame,
            i as u8 + 1,
            frame.y + height,
            (below, above),
            t,
            material,
        ));
    }

    for (sub_frame, content) in &sub_frames {
        components.extend(generate_sub_zone(content, sub_frame, profile, material)?);
    }

    Ok(components)
}

fn clamp_height(frame: &ZoneFrame, setting: &str, value: f64, low: f64, high: f64) -> f64 {
    if value < low || value > high {
        warn!(
            "Zone {}: {} {}mm outside {:.1}..{:.1}mm, clamping",
            frame.zone_index, setting, value, low, high
        );
    }
    value.clamp(low, high)
}
