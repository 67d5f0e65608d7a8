//! Basic integration tests for gridviz.
//!
//! These exercise the active-array bookkeeping end to end through the
//! public dataset types rather than the registry directly.

use gridviz::*;

fn triangle() -> PolyData {
    let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
    PolyData::from_polygons(points, vec![vec![0, 1, 2]]).expect("valid triangle")
}

#[test]
fn empty_dataset_has_no_active_scalars() {
    let mut surface = triangle();
    let info = surface.active_scalars_info();
    assert_eq!(info.association, Association::Point);
    assert_eq!(info.name, None);
    assert!(surface.active_scalars().is_none());
}

#[test]
fn sole_array_becomes_active_lazily() {
    let mut surface = triangle();
    surface.set_array("elevation", vec![0.0f32, 0.5, 1.0]).unwrap();

    // Nothing is active until somebody asks.
    assert_eq!(surface.attributes().point_arrays().active_scalars(), None);

    let info = surface.active_scalars_info();
    assert_eq!(info.name.as_deref(), Some("elevation"));
    assert_eq!(info.association, Association::Point);
    assert_eq!(
        surface.attributes().point_arrays().active_scalars(),
        Some("elevation")
    );
}

#[test]
fn arrays_are_placed_by_length() {
    let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
    let mut grid = UnstructuredGrid::from_cells(
        points,
        vec![vec![0, 1, 2, 3]],
        vec![CellKind::Tetra],
    )
    .unwrap();

    grid.set_array("per_point", vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
    grid.set_array("per_cell", vec![9i32]).unwrap();
    grid.set_field_array("metadata", vec![7i32, 8]);

    assert!(grid.attributes().point_arrays().contains("per_point"));
    assert!(grid.attributes().cell_arrays().contains("per_cell"));
    assert!(grid.attributes().field_arrays().contains("metadata"));
    assert_eq!(grid.n_arrays(), 3);

    // A length matching neither collection is rejected.
    let err = grid.set_array("bad", vec![1.0f32, 2.0]).unwrap_err();
    assert!(matches!(err, GridvizError::ShapeMismatch { .. }));
}

#[test]
fn activation_prefers_the_requested_association() {
    let mut surface = triangle();
    // Same name in both collections: three points and one cell would
    // collide only for a one-point mesh, so use explicit inserts.
    surface.set_array("values", vec![0.0f32, 1.0, 2.0]).unwrap();
    surface
        .attributes_mut()
        .cell_arrays_mut()
        .insert(AttributeArray::new("values", vec![5.0f32]));

    surface.set_active_scalars(Some("values"), Association::Cell).unwrap();
    assert_eq!(surface.active_scalars_info().association, Association::Cell);

    surface.set_active_scalars(Some("values"), Association::Point).unwrap();
    assert_eq!(surface.active_scalars_info().association, Association::Point);
}

#[test]
fn missing_name_errors_and_leaves_designation_alone() {
    let mut surface = triangle();
    surface.set_array("elevation", vec![0.0f32, 0.5, 1.0]).unwrap();
    surface.set_active_scalars(Some("elevation"), Association::Point).unwrap();

    let err = surface
        .set_active_scalars(Some("nope"), Association::Point)
        .unwrap_err();
    assert!(matches!(err, GridvizError::ArrayNotFound(_)));
    assert_eq!(
        surface.active_scalars_info().name.as_deref(),
        Some("elevation")
    );
}

#[test]
fn field_arrays_cannot_be_active() {
    let mut surface = triangle();
    surface.set_field_array("notes", vec![1i32]);
    let err = surface
        .set_active_scalars(Some("notes"), Association::Field)
        .unwrap_err();
    assert!(matches!(err, GridvizError::AssociationNotUsable(_)));
}

#[test]
fn deactivation_falls_back_on_next_resolution() {
    let mut surface = triangle();
    surface.set_array("a", vec![0.0f32, 1.0, 2.0]).unwrap();
    surface.set_array("b", vec![3.0f32, 4.0, 5.0]).unwrap();
    surface.set_active_scalars(Some("b"), Association::Point).unwrap();

    surface.set_active_scalars(None, Association::Point).unwrap();
    assert_eq!(surface.attributes().point_arrays().active_scalars(), None);

    // The next query re-resolves in storage order.
    assert_eq!(surface.active_scalars_info().name.as_deref(), Some("a"));
}

#[test]
fn excluded_names_are_never_chosen_automatically() {
    let mut surface = triangle();
    surface
        .set_array("Normals", vec![Vec3::Z, Vec3::Z, Vec3::Z])
        .unwrap();
    assert_eq!(surface.active_scalars_info().name, None);

    surface.set_array("real_data", vec![1.0f32, 2.0, 3.0]).unwrap();
    assert_eq!(
        surface.active_scalars_info().name.as_deref(),
        Some("real_data")
    );
}

#[test]
fn excluded_active_name_is_substituted_with_last_known_good() {
    let mut surface = triangle();
    surface.set_array("temperature", vec![1.0f32, 2.0, 3.0]).unwrap();
    surface
        .set_array("Normals", vec![Vec3::Z, Vec3::Z, Vec3::Z])
        .unwrap();

    surface
        .set_active_scalars(Some("temperature"), Association::Point)
        .unwrap();
    assert_eq!(
        surface.active_scalars_info().name.as_deref(),
        Some("temperature")
    );

    // Excluded names may be activated explicitly, but queries swap the
    // last well-behaved selection back in.
    surface.set_active_scalars(Some("Normals"), Association::Point).unwrap();
    assert_eq!(
        surface.active_scalars_info().name.as_deref(),
        Some("temperature")
    );
}

#[test]
fn rename_follows_the_active_array() {
    let mut surface = triangle();
    surface.set_array("elevation", vec![0.0f32, 0.5, 1.0]).unwrap();
    surface
        .set_active_scalars(Some("elevation"), Association::Point)
        .unwrap();

    surface
        .rename_array("elevation", "height", Association::Point)
        .unwrap();

    assert!(surface.get_array("elevation", Association::Point).is_none());
    assert!(surface.get_array("height", Association::Point).is_some());
    assert_eq!(surface.active_scalars_info().name.as_deref(), Some("height"));
}

#[test]
fn removal_clears_a_dangling_designation() {
    let mut surface = triangle();
    surface.set_array("elevation", vec![0.0f32, 0.5, 1.0]).unwrap();
    surface
        .set_active_scalars(Some("elevation"), Association::Point)
        .unwrap();

    surface.remove_array(Association::Point, "elevation").unwrap();
    assert_eq!(surface.active_scalars_info().name, None);

    let err = surface
        .remove_array(Association::Point, "elevation")
        .unwrap_err();
    assert!(matches!(err, GridvizError::ArrayNotFound(_)));
}

#[test]
fn array_names_lists_the_active_array_first() {
    let mut surface = triangle();
    surface.set_array("alpha", vec![0.0f32, 1.0, 2.0]).unwrap();
    surface.set_array("beta", vec![3.0f32, 4.0, 5.0]).unwrap();
    surface.set_field_array("gamma", vec![1i32]);

    surface.set_active_scalars(Some("beta"), Association::Point).unwrap();
    let names = surface.array_names();
    assert_eq!(names[0], "beta");
    assert!(names.contains(&"alpha".to_string()));
    assert!(names.contains(&"gamma".to_string()));
    assert_eq!(names.len(), 3);
}

#[test]
fn vectors_have_their_own_selection() {
    let mut surface = triangle();
    surface
        .set_vectors(vec![Vec3::X, Vec3::Y, Vec3::Z])
        .unwrap();

    let info = surface.active_vectors_info();
    assert_eq!(info.name.as_deref(), Some(DEFAULT_VECTOR_KEY));
    assert_eq!(info.association, Association::Point);

    // Scalars are untouched by vector activation.
    assert_eq!(surface.attributes().point_arrays().active_scalars(), None);
}

#[test]
fn normals_act_as_default_vectors() {
    let mut surface = triangle();
    surface
        .set_array("Normals", vec![Vec3::Z, Vec3::Z, Vec3::Z])
        .unwrap();
    let info = surface.active_vectors_info();
    assert_eq!(info.name.as_deref(), Some("Normals"));
}

#[test]
fn data_range_reads_the_active_array_by_default() {
    let mut surface = triangle();
    surface.set_array("elevation", vec![0.0f32, 0.5, 1.0]).unwrap();
    assert_eq!(
        surface.get_data_range(None, Association::Point),
        Some((0.0, 1.0))
    );
    assert_eq!(
        surface.get_data_range(Some("elevation"), Association::Point),
        Some((0.0, 1.0))
    );
    assert_eq!(surface.get_data_range(Some("nope"), Association::Point), None);
}

#[test]
fn head_summarizes_the_dataset() {
    let mut surface = triangle();
    surface.set_array("elevation", vec![0.0f32, 0.5, 1.0]).unwrap();
    let summary = surface.head();
    assert!(summary.starts_with("PolyData"));
    assert!(summary.contains("N Cells"));
    assert!(summary.contains("N Points"));
    assert!(summary.contains("N Arrays"));
}
