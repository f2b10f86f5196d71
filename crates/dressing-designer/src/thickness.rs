//! Panel thickness profile.
//!
//! Every generated panel takes its thickness from one of eleven roles.
//! Changing a role changes exactly the panels generated for that role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum recommended thickness for load bearing panels (sides, shelves)
pub const MIN_LOAD_BEARING_THICKNESS: f64 = 12.0;

/// Upper limit accepted by the orchestrator for any role
pub const MAX_PANEL_THICKNESS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelRole {
    Sides,
    Top,
    Bottom,
    Shelves,
    VerticalDividers,
    HorizontalDividers,
    Back,
    DrawerFront,
    DrawerSide,
    DrawerBack,
    DrawerBottom,
}

impl PanelRole {
    pub const ALL: [PanelRole; 11] = [
        PanelRole::Sides,
        PanelRole::Top,
        PanelRole::Bottom,
        PanelRole::Shelves,
        PanelRole::VerticalDividers,
        PanelRole::HorizontalDividers,
        PanelRole::Back,
        PanelRole::DrawerFront,
        PanelRole::DrawerSide,
        PanelRole::DrawerBack,
        PanelRole::DrawerBottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelRole::Sides => "sides",
            PanelRole::Top => "top",
            PanelRole::Bottom => "bottom",
            PanelRole::Shelves => "shelves",
            PanelRole::VerticalDividers => "vertical_dividers",
            PanelRole::HorizontalDividers => "horizontal_dividers",
            PanelRole::Back => "back",
            PanelRole::DrawerFront => "drawer_front",
            PanelRole::DrawerSide => "drawer_side",
            PanelRole::DrawerBack => "drawer_back",
            PanelRole::DrawerBottom => "drawer_bottom",
        }
    }
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown panel role: {}", s))
    }
}

/// Thickness in millimetres for each panel role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThicknessProfile {
    pub sides: f64,
    pub top: f64,
    pub bottom: f64,
    pub shelves: f64,
    pub vertical_dividers: f64,
    pub horizontal_dividers: f64,
    pub back: f64,
    pub drawer_front: f64,
    pub drawer_side: f64,
    pub drawer_back: f64,
    pub drawer_bottom: f64,
}

impl Default for ThicknessProfile {
    fn default() -> Self {
        Self {
            sides: 18.0,
            top: 18.0,
            bottom: 18.0,
            shelves: 18.0,
            vertical_dividers: 18.0,
            horizontal_dividers: 18.0,
            back: 8.0,
            drawer_front: 18.0,
            drawer_side: 15.0,
            drawer_back: 15.0,
            drawer_bottom: 8.0,
        }
    }
}

impl ThicknessProfile {
    /// Same thickness for every role.
    pub fn uniform(thickness: f64) -> Self {
        let mut profile = Self::default();
        for role in PanelRole::ALL {
            profile.set(role, thickness);
        }
        profile
    }

    pub fn get(&self, role: PanelRole) -> f64 {
        match role {
            PanelRole::Sides => self.sides,
            PanelRole::Top => self.top,
            PanelRole::Bottom => self.bottom,
            PanelRole::Shelves => self.shelves,
            PanelRole::VerticalDividers => self.vertical_dividers,
            PanelRole::HorizontalDividers => self.horizontal_dividers,
            PanelRole::Back => self.back,
            PanelRole::DrawerFront => self.drawer_front,
            PanelRole::DrawerSide => self.drawer_side,
            PanelRole::DrawerBack => self.drawer_back,
            PanelRole::DrawerBottom => self.drawer_bottom,
        }
    }

    /// Sets one role and returns the previous value.
    pub fn set(&mut self, role: PanelRole, value: f64) -> f64 {
        let slot = match role {
            PanelRole::Sides => &mut self.sides,
            PanelRole::Top => &mut self.top,
            PanelRole::Bottom => &mut self.bottom,
            PanelRole::Shelves => &mut self.shelves,
            PanelRole::VerticalDividers => &mut self.vertical_dividers,
            PanelRole::HorizontalDividers => &mut self.horizontal_dividers,
            PanelRole::Back => &mut self.back,
            PanelRole::DrawerFront => &mut self.drawer_front,
            PanelRole::DrawerSide => &mut self.drawer_side,
            PanelRole::DrawerBack => &mut self.drawer_back,
            PanelRole::DrawerBottom => &mut self.drawer_bottom,
        };
        std::mem::replace(slot, value)
    }

    /// Roles whose value is not a positive finite number below
    /// [`MAX_PANEL_THICKNESS`].
    pub fn invalid_roles(&self) -> Vec<PanelRole> {
        PanelRole::ALL
            .into_iter()
            .filter(|role| {
                let value = self.get(*role);
                !(value.is_finite() && value > 0.0 && value <= MAX_PANEL_THICKNESS)
            })
            .collect()
    }

    /// Roles whose value differs from `other`.
    pub fn changed_roles(&self, other: &ThicknessProfile) -> Vec<PanelRole> {
        PanelRole::ALL
            .into_iter()
            .filter(|role| self.get(*role) != other.get(*role))
            .collect()
    }

    /// Non-fatal construction advice.
    pub fn advisories(&self) -> Vec<String> {
        let mut advice = Vec::new();

        if self.drawer_side > self.drawer_front {
            advice.push(format!(
                "Drawer sides ({}mm) are thicker than drawer fronts ({}mm)",
                self.drawer_side, self.drawer_front
            ));
        }
        if self.drawer_bottom > self.drawer_side {
            advice.push(format!(
                "Drawer bottoms ({}mm) are thicker than drawer sides ({}mm)",
                self.drawer_bottom, self.drawer_side
            ));
        }
        if self.sides < MIN_LOAD_BEARING_THICKNESS {
            advice.push(format!(
                "Side panels thinner than {}mm ({}mm) may not carry the load",
                MIN_LOAD_BEARING_THICKNESS, self.sides
            ));
        }
        if self.shelves < MIN_LOAD_BEARING_THICKNESS {
            advice.push(format!(
                "Shelves thinner than {}mm ({}mm) will sag",
                MIN_LOAD_BEARING_THICKNESS, self.shelves
            ));
        }

        advice
    }
}
