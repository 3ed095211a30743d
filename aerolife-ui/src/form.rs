//! Input collection for the estimator.
//!
//! Plays the part of the sliders and selects: numeric fields are clamped into
//! their slider ranges, selections must name a known option.

use std::ops::RangeInclusive;

use aerolife_core::{EstimateError, MissionParameters, MissionType, RecyclingLevel};
use tracing::{debug, warn};

use crate::settings::FormDefaults;

pub const CREW_SIZE_RANGE: RangeInclusive<u32> = 1..=10;
pub const DURATION_DAYS_RANGE: RangeInclusive<u32> = 1..=1000;

pub const DEFAULT_CREW_SIZE: u32 = 3;
pub const DEFAULT_DURATION_DAYS: u32 = 180;

/// Current form selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    crew_size: u32,
    duration_days: u32,
    mission_type: MissionType,
    recycling_level: RecyclingLevel,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            crew_size: DEFAULT_CREW_SIZE,
            duration_days: DEFAULT_DURATION_DAYS,
            mission_type: MissionType::default(),
            recycling_level: RecyclingLevel::default(),
        }
    }
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the form from configured defaults, clamping them like any
    /// other input.
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        let mut form = Self {
            mission_type: defaults.mission_type,
            recycling_level: defaults.recycling_level,
            ..Self::default()
        };
        form.set_crew_size(i64::from(defaults.crew_size));
        form.set_duration_days(i64::from(defaults.duration_days));
        form
    }

    pub fn crew_size(&self) -> u32 {
        self.crew_size
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn mission_type(&self) -> MissionType {
        self.mission_type
    }

    pub fn recycling_level(&self) -> RecyclingLevel {
        self.recycling_level
    }

    /// Sets the crew size, clamped into [`CREW_SIZE_RANGE`]. Returns the
    /// value actually applied.
    pub fn set_crew_size(
        &mut self,
        value: i64,
    ) -> u32 {
        self.crew_size = clamp_into("crew_size", value, &CREW_SIZE_RANGE);
        self.crew_size
    }

    /// Sets the duration, clamped into [`DURATION_DAYS_RANGE`]. Returns the
    /// value actually applied.
    pub fn set_duration_days(
        &mut self,
        value: i64,
    ) -> u32 {
        self.duration_days = clamp_into("duration_days", value, &DURATION_DAYS_RANGE);
        self.duration_days
    }

    /// Selects a mission type by identifier or label. An unknown value
    /// leaves the current selection unchanged.
    pub fn set_mission_type(
        &mut self,
        value: &str,
    ) -> Result<MissionType, EstimateError> {
        self.mission_type = value.parse()?;
        debug!(mission_type = %self.mission_type, "mission type selected");
        Ok(self.mission_type)
    }

    /// Selects a recycling level. An unknown value leaves the current
    /// selection unchanged.
    pub fn set_recycling_level(
        &mut self,
        value: &str,
    ) -> Result<RecyclingLevel, EstimateError> {
        self.recycling_level = value.parse()?;
        debug!(recycling_level = %self.recycling_level, "recycling level selected");
        Ok(self.recycling_level)
    }

    pub fn parameters(&self) -> MissionParameters {
        MissionParameters::new(
            self.crew_size,
            self.duration_days,
            self.mission_type,
            self.recycling_level,
        )
    }
}

fn clamp_into(
    field: &'static str,
    value: i64,
    range: &RangeInclusive<u32>,
) -> u32 {
    let (min, max) = (*range.start(), *range.end());
    let clamped = value.clamp(i64::from(min), i64::from(max));
    if clamped != value {
        warn!(
            field,
            requested = value,
            applied = clamped,
            "value outside form range, clamped"
        );
    }
    u32::try_from(clamped).unwrap_or(min)
}
