use approx::assert_relative_eq;
use byu_mesh::{IndexedMeshBuilder, MeshBuilder, RootNode};
use glam::Vec3;

#[test]
fn test_root_node_survives_json() {
    let mut builder = IndexedMeshBuilder::start_mesh("square");
    builder.set_swap_winding_order(true);
    for p in [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ] {
        builder.create_position(p);
    }
    for index in [0, 1, 2, 0, 2, 3] {
        builder.add_triangle_vertex(index).unwrap();
    }
    let mut root = RootNode::new("root");
    root.add_child(builder.finish_mesh().unwrap());

    let json = serde_json::to_string(&root).unwrap();
    let back: RootNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, root);

    let mesh = back.into_single_mesh().unwrap();
    assert_eq!(mesh.name(), "square");
    assert_eq!(mesh.triangles(), &[[0, 2, 1], [0, 3, 2]]);
    let (min, max) = mesh.bounding_box().unwrap();
    assert_relative_eq!(min.x, 0.0);
    assert_relative_eq!(max.y, 1.0);
}
