//! Strategy domain models.
//!
//! A wallet's strategy is an ordered list of named asset groups, each holding
//! percentage allocations of asset types. Groups share a 0-100 percentage
//! budget at the strategy level; allocations share a 0-100 budget inside
//! their group. Every mutation goes through setters that clamp against the
//! remaining budget, so the sums can never exceed 100.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::assets::AssetType;
use crate::constants::{NAME_MAX_LEN, NAME_MIN_LEN, PERCENTAGE_BUDGET, PROPORTION_EPSILON};
use crate::errors::{Error, Result, ValidationError};

/// A wallet's target portfolio allocation plan.
///
/// Serialized as a single JSON blob on the owning wallet row. Group order is
/// user-significant and must round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(default, alias = "Groups")]
    pub groups: Vec<AssetGroup>,
}

/// A named, user-defined bucket holding percentage-weighted asset types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroup {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default = "default_enabled", alias = "Enabled")]
    pub enabled: bool,
    #[serde(default, alias = "Percentage")]
    pub percentage: u8,
    /// Index into the fixed palette's color families. `None` means unset.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "ColorIndex")]
    pub color_index: Option<i32>,
    #[serde(default, alias = "Assets")]
    pub assets: Vec<AssetAllocation>,
}

/// One asset type's percentage weight within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    #[serde(alias = "AssetType")]
    pub asset_type: AssetType,
    #[serde(default, alias = "Percentage")]
    pub percentage: u8,
    /// Index into the owning group's shade sub-palette. `None` means unset.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "ColorIndex")]
    pub color_index: Option<i32>,
}

fn default_enabled() -> bool {
    true
}

/// Converts a slider proportion in `[0.0, 1.0]` to an integer percentage.
///
/// Truncates rather than rounds, matching the slider behavior the setters
/// were written for. Values within [`PROPORTION_EPSILON`] of the ceiling are
/// treated as exactly 1.0 so float drift cannot bounce a full slider between
/// 99 and 100.
pub fn percentage_from_proportion(proportion: f64) -> u8 {
    let proportion = proportion.clamp(0.0, 1.0);
    if 1.0 - proportion < PROPORTION_EPSILON {
        return PERCENTAGE_BUDGET;
    }
    (proportion * f64::from(PERCENTAGE_BUDGET)) as u8
}

impl Strategy {
    /// Parses a persisted strategy blob.
    ///
    /// Fails soft: a missing, empty, or malformed payload yields an empty
    /// default strategy. Persisted data problems are never surfaced to the
    /// caller as errors.
    pub fn from_json(payload: Option<&str>) -> Strategy {
        let payload = match payload {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Strategy::default(),
        };
        match serde_json::from_str::<Strategy>(payload) {
            Ok(mut strategy) => {
                strategy.sanitize();
                strategy
            }
            Err(e) => {
                warn!("Discarding malformed strategy payload: {}", e);
                Strategy::default()
            }
        }
    }

    /// Re-imposes the structural invariants on freshly deserialized data.
    ///
    /// A hand-edited or truncated blob may carry duplicate sibling names or
    /// percentages that overshoot the shared budget. Duplicates go first:
    /// the setters resolve siblings by name (and by asset type within a
    /// group), so a repeated entry would escape their clamp arithmetic.
    /// Later duplicates are dropped, the first occurrence wins. Each
    /// surviving sibling is then clamped, in order, to whatever budget its
    /// predecessors left. Disabled groups are forced back to 0.
    fn sanitize(&mut self) {
        let mut names = HashSet::new();
        self.groups.retain(|g| names.insert(g.name.clone()));

        let mut remaining = u32::from(PERCENTAGE_BUDGET);
        for group in &mut self.groups {
            let mut types = HashSet::new();
            group.assets.retain(|a| types.insert(a.asset_type));

            if !group.enabled {
                group.percentage = 0;
            }
            group.percentage = group.percentage.min(remaining as u8);
            remaining -= u32::from(group.percentage);

            let mut group_remaining = u32::from(PERCENTAGE_BUDGET);
            for allocation in &mut group.assets {
                allocation.percentage = allocation.percentage.min(group_remaining as u8);
                group_remaining -= u32::from(allocation.percentage);
            }
        }
    }

    /// Serializes the strategy to its persisted JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Sum of all group percentages. Always <= 100.
    pub fn allocated_percentage(&self) -> u8 {
        sum_percentages(self.groups.iter().map(|g| g.percentage))
    }

    /// Budget still unassigned at the strategy level.
    pub fn available_percentage(&self) -> u8 {
        PERCENTAGE_BUDGET - self.allocated_percentage()
    }

    /// Looks up a group by exact name.
    pub fn group(&self, name: &str) -> Option<&AssetGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut AssetGroup> {
        self.groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| Error::GroupNotFound(name.to_string()))
    }

    /// Appends a new enabled group at 0% to the end of the list.
    ///
    /// Rejects names already present (exact string match) and names outside
    /// the 3-50 character range.
    pub fn add_group(&mut self, name: &str) -> Result<AssetGroup> {
        validate_name(name)?;
        if self.groups.iter().any(|g| g.name == name) {
            return Err(Error::DuplicateName {
                kind: "group",
                name: name.to_string(),
            });
        }
        let group = AssetGroup {
            name: name.to_string(),
            enabled: true,
            percentage: 0,
            color_index: None,
            assets: Vec::new(),
        };
        self.groups.push(group.clone());
        Ok(group)
    }

    /// Removes a group, but only when its allocation list is empty.
    ///
    /// The UI only offers deletion for empty groups; the model rejects the
    /// operation on its own regardless of what the caller allowed.
    pub fn remove_group(&mut self, name: &str) -> Result<()> {
        let position = self
            .groups
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| Error::GroupNotFound(name.to_string()))?;
        if !self.groups[position].assets.is_empty() {
            return Err(Error::GroupNotEmpty(name.to_string()));
        }
        self.groups.remove(position);
        Ok(())
    }

    /// Sets a group's percentage, clamped to the remaining strategy budget.
    ///
    /// Returns the value actually applied; callers must treat it as
    /// authoritative. Disabled groups are pinned at 0.
    pub fn set_group_percentage(&mut self, name: &str, requested: u8) -> Result<u8> {
        let others = sum_percentages(
            self.groups
                .iter()
                .filter(|g| g.name != name)
                .map(|g| g.percentage),
        );
        let group = self.group_mut(name)?;
        let applied = if group.enabled {
            requested.min(PERCENTAGE_BUDGET - others)
        } else {
            0
        };
        group.percentage = applied;
        Ok(applied)
    }

    /// Enables or disables a group, returning the percentage it had before
    /// the call.
    ///
    /// Disabling forces the percentage to 0, removing the group from
    /// balancing. Re-enabling does not restore the prior value; the caller
    /// decides what to do with the returned figure.
    pub fn set_group_enabled(&mut self, name: &str, enabled: bool) -> Result<u8> {
        let group = self.group_mut(name)?;
        let prior = group.percentage;
        group.enabled = enabled;
        if !enabled {
            group.percentage = 0;
        }
        Ok(prior)
    }

    /// Adds an allocation for `asset_type` at 0% to the named group.
    pub fn add_asset_to_group(&mut self, group_name: &str, asset_type: AssetType) -> Result<()> {
        let group = self.group_mut(group_name)?;
        if group.assets.iter().any(|a| a.asset_type == asset_type) {
            return Err(Error::DuplicateAsset(
                asset_type.wire_value(),
                group_name.to_string(),
            ));
        }
        group.assets.push(AssetAllocation {
            asset_type,
            percentage: 0,
            color_index: None,
        });
        Ok(())
    }

    /// Sets an allocation's percentage, clamped to the remaining budget
    /// among its siblings within the group. Returns the applied value.
    pub fn set_asset_percentage(
        &mut self,
        group_name: &str,
        asset_type: AssetType,
        requested: u8,
    ) -> Result<u8> {
        let group = self.group_mut(group_name)?;
        let others = sum_percentages(
            group
                .assets
                .iter()
                .filter(|a| a.asset_type != asset_type)
                .map(|a| a.percentage),
        );
        let allocation = group
            .assets
            .iter_mut()
            .find(|a| a.asset_type == asset_type)
            .ok_or_else(|| Error::AssetNotFound(asset_type.wire_value(), group_name.to_string()))?;
        let applied = requested.min(PERCENTAGE_BUDGET - others);
        allocation.percentage = applied;
        Ok(applied)
    }

    /// Removes an allocation from a group. The freed percentage simply
    /// becomes available budget; nothing is redistributed.
    pub fn remove_asset_from_group(
        &mut self,
        group_name: &str,
        asset_type: AssetType,
    ) -> Result<()> {
        let group = self.group_mut(group_name)?;
        group.assets.retain(|a| a.asset_type != asset_type);
        Ok(())
    }
}

impl AssetGroup {
    /// Sum of this group's allocation percentages. Always <= 100.
    pub fn allocated_percentage(&self) -> u8 {
        sum_percentages(self.assets.iter().map(|a| a.percentage))
    }

    /// Budget still unassigned among this group's allocations.
    pub fn available_percentage(&self) -> u8 {
        PERCENTAGE_BUDGET - self.allocated_percentage()
    }

    /// Whether the group's percentage may currently be edited.
    /// Disabled groups are pinned at 0 and excluded from balancing.
    pub fn can_edit_percentage(&self) -> bool {
        self.enabled
    }
}

// Saturates at the budget so a hand-built tree with bad values cannot
// overflow the u8 arithmetic in the setters.
fn sum_percentages(percentages: impl Iterator<Item = u8>) -> u8 {
    percentages
        .map(u32::from)
        .sum::<u32>()
        .min(u32::from(PERCENTAGE_BUDGET)) as u8
}

fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "name".to_string(),
        )));
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Name must be between {} and {} characters",
            NAME_MIN_LEN, NAME_MAX_LEN
        ))));
    }
    Ok(())
}
