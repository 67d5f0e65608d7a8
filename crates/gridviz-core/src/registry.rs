//! The active-array registry.
//!
//! An [`AttributeRegistry`] owns a dataset's three attribute collections
//! (point, cell, field) together with the dataset-level designations of
//! which named array is "active" for scalar coloring and for vector
//! operations, and keeps those designations consistent as arrays are
//! activated, renamed and removed.

use log::{debug, trace, warn};

use crate::array::AttributeArray;
use crate::association::Association;
use crate::attributes::Attributes;
use crate::error::{GridvizError, Result};

/// Reserved array names that are never auto-selected as active scalars.
pub const EXCLUDED_NAMES: [&str; 4] = ["Normals", "TCoords", "OriginalPointIds", "__custom_rgba"];

/// Whether a name is reserved and so skipped by automatic selection.
#[must_use]
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAMES.contains(&name)
}

/// An (association, name) designation of an active array.
///
/// When `name` is `None` no array is designated; the association then only
/// records the default search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInfo {
    /// The collection the designated array lives in.
    pub association: Association,
    /// The designated array name, if any.
    pub name: Option<String>,
}

impl Default for ActiveInfo {
    fn default() -> Self {
        Self {
            association: Association::Point,
            name: None,
        }
    }
}

impl ActiveInfo {
    fn named(association: Association, name: &str) -> Self {
        Self {
            association,
            name: Some(name.to_string()),
        }
    }
}

/// A dataset's attribute collections and active-array designations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeRegistry {
    point: Attributes,
    cell: Attributes,
    field: Attributes,
    scalars_info: ActiveInfo,
    vectors_info: Option<ActiveInfo>,
    last_scalars_name: Option<String>,
}

impl AttributeRegistry {
    /// Creates an empty registry with unset designations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the point-associated collection.
    #[must_use]
    pub fn point_arrays(&self) -> &Attributes {
        &self.point
    }

    /// Returns the point-associated collection mutably.
    pub fn point_arrays_mut(&mut self) -> &mut Attributes {
        &mut self.point
    }

    /// Returns the cell-associated collection.
    #[must_use]
    pub fn cell_arrays(&self) -> &Attributes {
        &self.cell
    }

    /// Returns the cell-associated collection mutably.
    pub fn cell_arrays_mut(&mut self) -> &mut Attributes {
        &mut self.cell
    }

    /// Returns the field-associated collection.
    #[must_use]
    pub fn field_arrays(&self) -> &Attributes {
        &self.field
    }

    /// Returns the field-associated collection mutably.
    pub fn field_arrays_mut(&mut self) -> &mut Attributes {
        &mut self.field
    }

    /// Returns the collection for the given association.
    #[must_use]
    pub fn arrays(&self, association: Association) -> &Attributes {
        match association {
            Association::Point => &self.point,
            Association::Cell => &self.cell,
            Association::Field => &self.field,
        }
    }

    /// Returns the collection for the given association mutably.
    pub fn arrays_mut(&mut self, association: Association) -> &mut Attributes {
        match association {
            Association::Point => &mut self.point,
            Association::Cell => &mut self.cell,
            Association::Field => &mut self.field,
        }
    }

    /// Total number of arrays across all three collections.
    #[must_use]
    pub fn n_arrays(&self) -> usize {
        self.point.len() + self.cell.len() + self.field.len()
    }

    /// Searches all collections for an array by name.
    ///
    /// When the name exists in more than one collection, `preference`
    /// decides; otherwise the search order is point, then cell, then field.
    #[must_use]
    pub fn get_array(&self, name: &str, preference: Association) -> Option<&AttributeArray> {
        let association = self.find_association(name, preference)?;
        self.arrays(association).get(name)
    }

    /// Resolves the collection a named array lives in.
    ///
    /// Same search-order rule as [`Self::get_array`].
    #[must_use]
    pub fn find_association(&self, name: &str, preference: Association) -> Option<Association> {
        let candidates = [Association::Point, Association::Cell, Association::Field];
        let hits = candidates
            .iter()
            .filter(|&&a| self.arrays(a).contains(name))
            .count();
        if hits > 1 && self.arrays(preference).contains(name) {
            return Some(preference);
        }
        candidates.into_iter().find(|&a| self.arrays(a).contains(name))
    }

    /// Resolves the active-scalars designation, lazily choosing a default.
    ///
    /// - A cached name that is one of [`EXCLUDED_NAMES`] is substituted with
    ///   the last-known-good name.
    /// - An unset name triggers a storage-order scan of the point collection,
    ///   then the cell collection, for the first non-excluded array, which
    ///   then becomes the active scalars designation; with no eligible array
    ///   the designation stays unset.
    ///
    /// Returns the resulting designation and whether this call changed it.
    pub fn resolve_active_scalars(&mut self) -> (ActiveInfo, bool) {
        let mut changed = false;
        let mut name = self.scalars_info.name.clone();

        if name.as_deref().is_some_and(is_excluded) {
            warn!(
                "active scalars '{}' is a reserved name; substituting last-known name {:?}",
                name.as_deref().unwrap_or_default(),
                self.last_scalars_name
            );
            name.clone_from(&self.last_scalars_name);
            self.scalars_info.name.clone_from(&name);
            changed = true;
        }

        if name.is_none() && self.n_arrays() > 0 {
            let first_valid =
                |attrs: &Attributes| attrs.names().find(|n| !is_excluded(n)).map(str::to_string);
            if let Some(found) = first_valid(&self.point) {
                debug!("defaulting active scalars to point array '{found}'");
                self.point.set_active_scalars(Some(&found));
                self.scalars_info = ActiveInfo::named(Association::Point, &found);
                changed = true;
            } else if let Some(found) = first_valid(&self.cell) {
                debug!("defaulting active scalars to cell array '{found}'");
                self.cell.set_active_scalars(Some(&found));
                self.scalars_info = ActiveInfo::named(Association::Cell, &found);
                changed = true;
            }
        }

        (self.scalars_info.clone(), changed)
    }

    /// Returns the active-scalars designation, resolving lazily.
    pub fn active_scalars_info(&mut self) -> ActiveInfo {
        self.resolve_active_scalars().0
    }

    /// Returns the active-scalars name, resolving lazily.
    pub fn active_scalars_name(&mut self) -> Option<String> {
        self.active_scalars_info().name
    }

    /// Finds scalars by name and sets them active.
    ///
    /// Passing `None` deactivates: the point and cell selections and the
    /// cached designation are cleared. Field arrays are never eligible.
    pub fn set_active_scalars(&mut self, name: Option<&str>, preference: Association) -> Result<()> {
        let Some(name) = name else {
            trace!("deactivating scalars");
            self.point.set_active_scalars(None);
            self.cell.set_active_scalars(None);
            self.scalars_info.name = None;
            return Ok(());
        };
        let association = self
            .find_association(name, preference)
            .ok_or_else(|| GridvizError::ArrayNotFound(name.to_string()))?;
        // Remember the previous active name so a later excluded-name
        // substitution has something to fall back on.
        self.last_scalars_name = self.resolve_active_scalars().0.name;
        match association {
            Association::Point => self.point.set_active_scalars(Some(name)),
            Association::Cell => self.cell.set_active_scalars(Some(name)),
            Association::Field => {
                return Err(GridvizError::AssociationNotUsable(Association::Field))
            }
        }
        trace!("active scalars set to {association} array '{name}'");
        self.scalars_info = ActiveInfo::named(association, name);
        Ok(())
    }

    /// Returns the active-vectors designation.
    ///
    /// On first access a point or cell array named `Normals` is activated
    /// when present; otherwise the designation starts unset.
    pub fn active_vectors_info(&mut self) -> ActiveInfo {
        if let Some(info) = &self.vectors_info {
            return info.clone();
        }
        let info = match self.find_association("Normals", Association::Point) {
            Some(Association::Point) => {
                self.point.set_active_vectors(Some("Normals"));
                ActiveInfo::named(Association::Point, "Normals")
            }
            Some(Association::Cell) => {
                self.cell.set_active_vectors(Some("Normals"));
                ActiveInfo::named(Association::Cell, "Normals")
            }
            _ => ActiveInfo::default(),
        };
        self.vectors_info = Some(info.clone());
        info
    }

    /// Returns the active-vectors name.
    pub fn active_vectors_name(&mut self) -> Option<String> {
        self.active_vectors_info().name
    }

    /// Finds vectors by name and sets them active.
    ///
    /// Passing `None` deactivates on both the point and cell collections.
    /// Field arrays are never eligible.
    pub fn set_active_vectors(&mut self, name: Option<&str>, preference: Association) -> Result<()> {
        let Some(name) = name else {
            trace!("deactivating vectors");
            self.point.set_active_vectors(None);
            self.cell.set_active_vectors(None);
            self.vectors_info = Some(ActiveInfo::default());
            return Ok(());
        };
        let association = self
            .find_association(name, preference)
            .ok_or_else(|| GridvizError::ArrayNotFound(name.to_string()))?;
        match association {
            Association::Point => self.point.set_active_vectors(Some(name)),
            Association::Cell => self.cell.set_active_vectors(Some(name)),
            Association::Field => {
                return Err(GridvizError::AssociationNotUsable(Association::Field))
            }
        }
        trace!("active vectors set to {association} array '{name}'");
        self.vectors_info = Some(ActiveInfo::named(association, name));
        Ok(())
    }

    /// Renames an array, keeping the active-scalars designation in step.
    pub fn rename_array(&mut self, old_name: &str, new_name: &str, preference: Association) -> Result<()> {
        let association = self
            .find_association(old_name, preference)
            .ok_or_else(|| GridvizError::ArrayNotFound(old_name.to_string()))?;
        let collection = self.arrays_mut(association);
        let Some(mut array) = collection.pop(old_name) else {
            return Err(GridvizError::ArrayNotFound(old_name.to_string()));
        };
        array.set_name(new_name);
        collection.insert(array);
        debug!("renamed {association} array '{old_name}' to '{new_name}'");
        if self.resolve_active_scalars().0.name.as_deref() == Some(old_name) {
            self.set_active_scalars(Some(new_name), association)?;
        }
        Ok(())
    }

    /// Removes an array from the named collection.
    ///
    /// An active designation naming the removed array is cleared so the
    /// registry never reports a dangling name.
    pub fn remove_array(&mut self, association: Association, name: &str) -> Result<()> {
        if self.arrays_mut(association).pop(name).is_none() {
            return Err(GridvizError::ArrayNotFound(name.to_string()));
        }
        debug!("removed {association} array '{name}'");
        if self.scalars_info.association == association
            && self.scalars_info.name.as_deref() == Some(name)
        {
            self.scalars_info.name = None;
        }
        if let Some(vectors) = &self.vectors_info {
            if vectors.association == association && vectors.name.as_deref() == Some(name) {
                self.vectors_info = Some(ActiveInfo::default());
            }
        }
        if self.last_scalars_name.as_deref() == Some(name) {
            self.last_scalars_name = None;
        }
        Ok(())
    }

    /// Lists all array names, the active scalars name first.
    ///
    /// Field names come first, then point, then cell, each in storage
    /// order; names colliding across collections appear once per
    /// collection of origin.
    pub fn array_names(&mut self) -> Vec<String> {
        let mut names: Vec<String> = self
            .field
            .names()
            .chain(self.point.names())
            .chain(self.cell.names())
            .map(str::to_string)
            .collect();
        if let Some(active) = self.active_scalars_name() {
            if let Some(index) = names.iter().position(|n| *n == active) {
                names.remove(index);
                names.insert(0, active);
            }
        }
        names
    }

    /// Removes all point arrays.
    pub fn clear_point_arrays(&mut self) {
        self.point.clear();
        self.prune_designations();
    }

    /// Removes all cell arrays.
    pub fn clear_cell_arrays(&mut self) {
        self.cell.clear();
        self.prune_designations();
    }

    /// Removes all field arrays.
    pub fn clear_field_arrays(&mut self) {
        self.field.clear();
    }

    /// Removes every array from all three collections.
    pub fn clear_arrays(&mut self) {
        self.point.clear();
        self.cell.clear();
        self.field.clear();
        self.scalars_info = ActiveInfo::default();
        self.vectors_info = None;
        self.last_scalars_name = None;
    }

    /// Copies the designations from another registry (shallow meta copy).
    pub fn copy_meta_from(&mut self, other: &Self) {
        self.scalars_info = other.scalars_info.clone();
        self.vectors_info = other.vectors_info.clone();
        self.last_scalars_name.clone_from(&other.last_scalars_name);
    }

    /// Drops designations whose array no longer exists.
    fn prune_designations(&mut self) {
        let exists = |info: &ActiveInfo, point: &Attributes, cell: &Attributes| match info
            .name
            .as_deref()
        {
            Some(name) => match info.association {
                Association::Point => point.contains(name),
                Association::Cell => cell.contains(name),
                Association::Field => false,
            },
            None => true,
        };
        if !exists(&self.scalars_info, &self.point, &self.cell) {
            self.scalars_info.name = None;
        }
        if let Some(vectors) = &self.vectors_info {
            if !exists(vectors, &self.point, &self.cell) {
                self.vectors_info = Some(ActiveInfo::default());
            }
        }
        if let Some(last) = self.last_scalars_name.as_deref() {
            if !self.point.contains(last) && !self.cell.contains(last) {
                self.last_scalars_name = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ArrayValues;
    use glam::Vec3;

    fn floats(name: &str, values: Vec<f32>) -> AttributeArray {
        AttributeArray::new(name, ArrayValues::Float(values))
    }

    fn vectors(name: &str, values: Vec<Vec3>) -> AttributeArray {
        AttributeArray::new(name, ArrayValues::Vector(values))
    }

    #[test]
    fn empty_dataset_resolves_to_unset_name() {
        let mut reg = AttributeRegistry::new();
        let (info, changed) = reg.resolve_active_scalars();
        assert_eq!(info.name, None);
        assert!(!changed);
    }

    #[test]
    fn sole_point_array_becomes_active() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("A", vec![1.0, 2.0]));

        let (info, changed) = reg.resolve_active_scalars();
        assert!(changed);
        assert_eq!(info.association, Association::Point);
        assert_eq!(info.name.as_deref(), Some("A"));
        assert_eq!(reg.point_arrays().active_scalars(), Some("A"));

        // Resolving again is a no-op.
        let (info, changed) = reg.resolve_active_scalars();
        assert!(!changed);
        assert_eq!(info.name.as_deref(), Some("A"));
    }

    #[test]
    fn cell_collection_scanned_after_point() {
        let mut reg = AttributeRegistry::new();
        reg.cell_arrays_mut().insert(floats("c", vec![1.0]));

        let (info, _) = reg.resolve_active_scalars();
        assert_eq!(info.association, Association::Cell);
        assert_eq!(info.name.as_deref(), Some("c"));
        assert_eq!(reg.cell_arrays().active_scalars(), Some("c"));
    }

    #[test]
    fn set_active_scalars_falls_through_to_cell() {
        let mut reg = AttributeRegistry::new();
        reg.cell_arrays_mut().insert(floats("only_cell", vec![1.0]));

        reg.set_active_scalars(Some("only_cell"), Association::Point)
            .unwrap();
        let info = reg.active_scalars_info();
        assert_eq!(info.association, Association::Cell);
        assert_eq!(info.name.as_deref(), Some("only_cell"));
    }

    #[test]
    fn preference_breaks_cross_collection_ties() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("dup", vec![1.0]));
        reg.cell_arrays_mut().insert(floats("dup", vec![2.0]));

        assert_eq!(
            reg.find_association("dup", Association::Cell),
            Some(Association::Cell)
        );
        assert_eq!(
            reg.find_association("dup", Association::Point),
            Some(Association::Point)
        );
        // A preference that misses falls back to the point-first order.
        assert_eq!(
            reg.find_association("dup", Association::Field),
            Some(Association::Point)
        );
    }

    #[test]
    fn deactivation_clears_then_fallback_reactivates() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("A", vec![1.0]));
        reg.set_active_scalars(Some("A"), Association::Cell).unwrap();

        reg.set_active_scalars(None, Association::Cell).unwrap();
        assert_eq!(reg.point_arrays().active_scalars(), None);
        assert_eq!(reg.cell_arrays().active_scalars(), None);

        // A non-excluded array remains, so the next read re-resolves to it.
        assert_eq!(reg.active_scalars_name().as_deref(), Some("A"));
    }

    #[test]
    fn deactivation_stays_unset_with_only_excluded_arrays() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut()
            .insert(vectors("Normals", vec![Vec3::Z]));

        reg.set_active_scalars(None, Association::Cell).unwrap();
        assert_eq!(reg.active_scalars_name(), None);
    }

    #[test]
    fn excluded_name_never_chosen_by_fallback() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut()
            .insert(vectors("Normals", vec![Vec3::Z]));

        let (info, changed) = reg.resolve_active_scalars();
        assert_eq!(info.name, None);
        assert!(!changed);
    }

    #[test]
    fn excluded_cached_name_substitutes_last_known_good() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("temperature", vec![1.0]));
        reg.point_arrays_mut()
            .insert(vectors("Normals", vec![Vec3::Z]));

        reg.set_active_scalars(Some("temperature"), Association::Point)
            .unwrap();
        reg.set_active_scalars(Some("Normals"), Association::Point)
            .unwrap();

        let (info, changed) = reg.resolve_active_scalars();
        assert!(changed);
        assert_eq!(info.name.as_deref(), Some("temperature"));
    }

    #[test]
    fn missing_name_errors_and_preserves_designation() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("A", vec![1.0]));
        reg.set_active_scalars(Some("A"), Association::Cell).unwrap();

        let err = reg
            .set_active_scalars(Some("missing"), Association::Cell)
            .unwrap_err();
        assert!(matches!(err, GridvizError::ArrayNotFound(_)));
        assert_eq!(reg.active_scalars_name().as_deref(), Some("A"));
    }

    #[test]
    fn field_arrays_not_usable_as_active_scalars() {
        let mut reg = AttributeRegistry::new();
        reg.field_arrays_mut().insert(floats("meta", vec![1.0]));

        let err = reg
            .set_active_scalars(Some("meta"), Association::Cell)
            .unwrap_err();
        assert!(matches!(
            err,
            GridvizError::AssociationNotUsable(Association::Field)
        ));
    }

    #[test]
    fn rename_tracks_active_scalars() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("old", vec![1.0, 2.0]));
        reg.set_active_scalars(Some("old"), Association::Cell).unwrap();

        reg.rename_array("old", "new", Association::Cell).unwrap();

        assert!(!reg.point_arrays().contains("old"));
        assert_eq!(
            reg.point_arrays().get("new").unwrap().values(),
            &ArrayValues::Float(vec![1.0, 2.0])
        );
        let info = reg.active_scalars_info();
        assert_eq!(info.association, Association::Point);
        assert_eq!(info.name.as_deref(), Some("new"));
    }

    #[test]
    fn rename_missing_errors() {
        let mut reg = AttributeRegistry::new();
        assert!(matches!(
            reg.rename_array("absent", "other", Association::Cell),
            Err(GridvizError::ArrayNotFound(_))
        ));
    }

    #[test]
    fn rename_of_inactive_array_leaves_designation_alone() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("active", vec![1.0]));
        reg.point_arrays_mut().insert(floats("other", vec![2.0]));
        reg.set_active_scalars(Some("active"), Association::Point)
            .unwrap();

        reg.rename_array("other", "renamed", Association::Point)
            .unwrap();
        assert_eq!(reg.active_scalars_name().as_deref(), Some("active"));
    }

    #[test]
    fn remove_array_clears_dangling_designation() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("A", vec![1.0]));
        reg.set_active_scalars(Some("A"), Association::Cell).unwrap();

        reg.remove_array(Association::Point, "A").unwrap();
        assert_eq!(reg.n_arrays(), 0);
        assert_eq!(reg.active_scalars_name(), None);
    }

    #[test]
    fn remove_missing_errors() {
        let mut reg = AttributeRegistry::new();
        assert!(matches!(
            reg.remove_array(Association::Field, "nope"),
            Err(GridvizError::ArrayNotFound(_))
        ));
    }

    #[test]
    fn array_names_puts_active_first_and_keeps_collisions() {
        let mut reg = AttributeRegistry::new();
        reg.field_arrays_mut().insert(floats("meta", vec![0.0]));
        reg.point_arrays_mut().insert(floats("shared", vec![1.0]));
        reg.point_arrays_mut().insert(floats("p", vec![1.0]));
        reg.cell_arrays_mut().insert(floats("shared", vec![2.0]));
        reg.set_active_scalars(Some("p"), Association::Point).unwrap();

        let names = reg.array_names();
        assert_eq!(names.len(), 4);
        assert_eq!(names[0], "p");
        assert_eq!(
            names.iter().filter(|n| n.as_str() == "shared").count(),
            2
        );
    }

    #[test]
    fn vectors_lazily_pick_up_precomputed_normals() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut()
            .insert(vectors("Normals", vec![Vec3::Z, Vec3::Z]));

        let info = reg.active_vectors_info();
        assert_eq!(info.association, Association::Point);
        assert_eq!(info.name.as_deref(), Some("Normals"));
        assert_eq!(reg.point_arrays().active_vectors(), Some("Normals"));
    }

    #[test]
    fn vectors_default_unset_without_normals() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("A", vec![1.0]));

        let info = reg.active_vectors_info();
        assert_eq!(info.association, Association::Point);
        assert_eq!(info.name, None);
    }

    #[test]
    fn set_active_vectors_rejects_field_arrays() {
        let mut reg = AttributeRegistry::new();
        reg.field_arrays_mut()
            .insert(vectors("flow", vec![Vec3::X]));

        assert!(matches!(
            reg.set_active_vectors(Some("flow"), Association::Point),
            Err(GridvizError::AssociationNotUsable(Association::Field))
        ));
    }

    #[test]
    fn clear_arrays_resets_everything() {
        let mut reg = AttributeRegistry::new();
        reg.point_arrays_mut().insert(floats("A", vec![1.0]));
        reg.set_active_scalars(Some("A"), Association::Cell).unwrap();

        reg.clear_arrays();
        assert_eq!(reg.n_arrays(), 0);
        assert_eq!(reg.active_scalars_name(), None);
    }
}
