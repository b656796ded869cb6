// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint records and category routing

/// Default extrusion height for an untagged building, in scene units
pub const DEFAULT_BUILDING_HEIGHT: f64 = 10.0;
/// Churches get a taller default
pub const CHURCH_HEIGHT: f64 = 25.0;
/// Height per storey when only a level count is known
pub const STOREY_HEIGHT: f64 = 3.0;

/// Building categories kept apart so the presentation layer can toggle
/// them independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingKind {
    Regular,
    Church,
    Apartment,
}

/// Land-use categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LanduseKind {
    Commercial,
    Construction,
    Farmland,
    Forest,
    Garages,
    Grass,
    Industrial,
    Railway,
    Residential,
    Other,
}

impl LanduseKind {
    /// Map a raw land-use tag to a category; unknown tags fall back to
    /// `Other`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "commercial" => Self::Commercial,
            "construction" => Self::Construction,
            "farmland" => Self::Farmland,
            "forest" => Self::Forest,
            "garages" => Self::Garages,
            "grass" | "greenfield" | "village_green" => Self::Grass,
            "industrial" => Self::Industrial,
            "railway" => Self::Railway,
            "residential" => Self::Residential,
            _ => Self::Other,
        }
    }
}

/// Category of an area footprint; only buildings get walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaKind {
    Building(BuildingKind),
    Landuse(LanduseKind),
}

/// One footprint: an ordered list of vertex ids, an extrusion height and
/// a routing category. The geometry engine itself only consumes the
/// resolved outline and the height.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub nodes: Vec<i64>,
    pub height: f64,
    pub kind: AreaKind,
}

impl Footprint {
    pub fn new(nodes: Vec<i64>, height: f64, kind: AreaKind) -> Self {
        Self {
            nodes,
            height,
            kind,
        }
    }

    /// Building with the default height for its kind
    pub fn building(nodes: Vec<i64>, kind: BuildingKind) -> Self {
        let height = match kind {
            BuildingKind::Church => CHURCH_HEIGHT,
            _ => DEFAULT_BUILDING_HEIGHT,
        };
        Self::new(nodes, height, AreaKind::Building(kind))
    }

    /// Apartment block sized from its storey count
    pub fn apartment(nodes: Vec<i64>, levels: u32) -> Self {
        Self::new(
            nodes,
            STOREY_HEIGHT * levels as f64,
            AreaKind::Building(BuildingKind::Apartment),
        )
    }

    /// Flat land-use parcel
    pub fn landuse(nodes: Vec<i64>, kind: LanduseKind) -> Self {
        Self::new(nodes, 0.0, AreaKind::Landuse(kind))
    }

    /// Whether this footprint carries the wall capability
    pub fn has_walls(&self) -> bool {
        matches!(self.kind, AreaKind::Building(_))
    }
}
