//! Builds collision shapes and ready-to-render collision objects from
//! render-side meshes and images.

use crate::bodies::{DefaultMotionState, RigidBody, SoftBody};
use crate::collision_object::{CollisionObject, PrimitiveType};
use crate::convert::{from_physics_transform, from_physics_vector3, to_physics_transform, to_physics_vector3};
use crate::core::BridgeConfig;
use crate::error::PhysicsError;
use crate::geometry::{Channel32f, ColorChannel, Surface32f, TriMesh};
use crate::math::Vector3;
use crate::shapes::{
    BoxShape, BvhTriangleMeshShape, Capsule, Cone, ConvexHullShape, Cylinder,
    HeightfieldTerrainShape, Shape, Sphere, TriangleMesh, UpAxis,
};
use crate::Result;

use glam::{Mat4, Vec2, Vec3};
use log::{debug, warn};
use std::sync::Arc;

/// Terrain shape from a single-channel float image, displaced along Y
///
/// The image width and height become the grid width and length. The height
/// scale is `|min_height| + |max_height|`.
pub fn create_heightfield_terrain_shape(
    height_field: &Channel32f,
    min_height: f32,
    max_height: f32,
    scale: Vec3,
) -> Result<HeightfieldTerrainShape> {
    let width = height_field.width() as usize;
    let length = height_field.height() as usize;
    let height_scale = min_height.abs() + max_height.abs();

    let mut shape = HeightfieldTerrainShape::new(
        width,
        length,
        height_field.as_raw().clone(),
        height_scale,
        min_height,
        max_height,
        UpAxis::Y,
    )?;
    shape.set_local_scaling(to_physics_vector3(scale));

    debug!("heightfield {}x{}, heights {}..{}", width, length, min_height, max_height);
    Ok(shape)
}

/// Terrain shape sampled from one channel of an RGB float surface
///
/// Only the top-left `stick_width` by `stick_length` pixels are used.
#[allow(clippy::too_many_arguments)]
pub fn create_heightfield_terrain_shape_from_surface(
    height_field: &Surface32f,
    channel: ColorChannel,
    stick_width: usize,
    stick_length: usize,
    height_scale: f32,
    min_height: f32,
    max_height: f32,
    up_axis: UpAxis,
    scale: Vec3,
) -> Result<HeightfieldTerrainShape> {
    let (width, length) = (height_field.width() as usize, height_field.height() as usize);
    if stick_width > width || stick_length > length {
        return Err(PhysicsError::InvalidParameter(format!(
            "{}x{} heightfield does not fit in a {}x{} surface",
            stick_width, stick_length, width, length
        )));
    }

    let mut heights = Vec::with_capacity(stick_width * stick_length);
    for row in 0..stick_length {
        for column in 0..stick_width {
            let pixel = height_field.get_pixel(column as u32, row as u32);
            heights.push(pixel.0[channel.index()]);
        }
    }

    let mut shape = HeightfieldTerrainShape::new(
        stick_width,
        stick_length,
        heights,
        height_scale,
        min_height,
        max_height,
        up_axis,
    )?;
    shape.set_local_scaling(to_physics_vector3(scale));

    debug!(
        "heightfield {}x{} from {:?} channel, up axis {:?}",
        stick_width, stick_length, channel, up_axis
    );
    Ok(shape)
}

/// Static triangle-mesh shape with a BVH over its triangles
///
/// Every index triple becomes one triangle. The index count must be a multiple
/// of three and every index must address `vertices`.
pub fn create_concave_mesh_shape(
    vertices: &[Vec3],
    indices: &[u32],
    scale: Vec3,
    margin: f32,
) -> Result<BvhTriangleMeshShape> {
    build_concave_mesh(vertices, indices, scale, margin, true)
}

/// [`create_concave_mesh_shape`] over a mesh's positions and indices
pub fn create_concave_mesh_shape_from_mesh(
    mesh: &TriMesh,
    scale: Vec3,
    margin: f32,
) -> Result<BvhTriangleMeshShape> {
    create_concave_mesh_shape(mesh.get_positions(), mesh.get_indices(), scale, margin)
}

fn build_concave_mesh(
    vertices: &[Vec3],
    indices: &[u32],
    scale: Vec3,
    margin: f32,
    remove_duplicate_vertices: bool,
) -> Result<BvhTriangleMeshShape> {
    if indices.len() % 3 != 0 {
        return Err(PhysicsError::InvalidParameter(format!(
            "concave mesh index count {} is not a multiple of 3",
            indices.len()
        )));
    }

    let mut soup = TriangleMesh::new();
    for tri in indices.chunks_exact(3) {
        let corner = |i: u32| {
            vertices.get(i as usize).copied().map(to_physics_vector3).ok_or_else(|| {
                PhysicsError::InvalidParameter(format!(
                    "concave mesh index {} out of range for {} vertices",
                    i,
                    vertices.len()
                ))
            })
        };
        soup.add_triangle(corner(tri[0])?, corner(tri[1])?, corner(tri[2])?, remove_duplicate_vertices);
    }

    if soup.triangle_count() == 0 {
        warn!("concave mesh shape built without triangles");
    }

    let mut shape = BvhTriangleMeshShape::new(soup, true);
    shape.set_local_scaling(to_physics_vector3(scale));
    shape.set_margin(margin);
    Ok(shape)
}

/// Convex hull over every given vertex
pub fn create_convex_hull_shape(vertices: &[Vec3], scale: Vec3) -> ConvexHullShape {
    let mut shape = ConvexHullShape::new();
    for vertex in vertices {
        shape.add_point(to_physics_vector3(*vertex));
    }
    shape.set_local_scaling(to_physics_vector3(scale));

    if shape.num_points() < 4 {
        warn!("convex hull built from {} points has no volume", shape.num_points());
    }
    shape
}

/// [`create_convex_hull_shape`] over a mesh's positions
pub fn create_convex_hull_shape_from_mesh(mesh: &TriMesh, scale: Vec3) -> ConvexHullShape {
    create_convex_hull_shape(mesh.get_positions(), scale)
}

/// Unit-density mass of a shape; concave shapes can only be static and weigh nothing
pub fn get_mass(shape: &dyn Shape) -> f32 {
    if shape.is_concave() {
        0.0
    } else {
        shape.get_volume()
    }
}

/// Render transform of a rigid body, read through its motion state
pub fn get_world_transform_rigid(body: &RigidBody) -> Mat4 {
    from_physics_transform(&body.get_interpolated_transform())
}

/// Render transform of a soft body
pub fn get_world_transform_soft(body: &SoftBody) -> Mat4 {
    from_physics_transform(&body.get_world_transform())
}

fn rigid_object(
    shape: Arc<dyn Shape>,
    mass: f32,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let motion_state = DefaultMotionState::new(to_physics_transform(transform));
    let body = RigidBody::new(mass, Some(Box::new(motion_state)), shape)?;

    let mut object = CollisionObject::with_config(config.clone());
    object.set_rigid_body(body);
    Ok(object)
}

fn rigid_primitive(
    shape: Arc<dyn Shape>,
    primitive_type: PrimitiveType,
    render_scale: Vec3,
    mass: f32,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let mut object = rigid_object(shape, mass, transform, config)?;
    object.set_primitive_type(primitive_type);
    object.set_scale(render_scale);
    Ok(object)
}

/// Box of full size `size`; renders as a unit cube scaled by `size`
///
/// `transform` must be rigid; scale belongs in `size`.
pub fn create_rigid_box(size: Vec3, mass: f32, transform: &Mat4, config: &BridgeConfig) -> Result<CollisionObject> {
    let shape = Arc::new(BoxShape::from_size(to_physics_vector3(size)));
    rigid_primitive(shape, PrimitiveType::Box, size, mass, transform, config)
}

/// Sphere; renders as a unit-radius sphere scaled by `radius`
pub fn create_rigid_sphere(radius: f32, mass: f32, transform: &Mat4, config: &BridgeConfig) -> Result<CollisionObject> {
    let shape = Arc::new(Sphere::new(radius));
    rigid_primitive(shape, PrimitiveType::Sphere, Vec3::splat(radius), mass, transform, config)
}

/// Y-aligned cylinder; renders as a unit cylinder scaled by radius and height
pub fn create_rigid_cylinder(
    radius: f32,
    height: f32,
    mass: f32,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let shape = Arc::new(Cylinder::new(radius, height));
    let render_scale = Vec3::new(radius, height, radius);
    rigid_primitive(shape, PrimitiveType::Cylinder, render_scale, mass, transform, config)
}

/// Y-aligned cone; renders as a unit cone scaled by radius and height
pub fn create_rigid_cone(
    radius: f32,
    height: f32,
    mass: f32,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let shape = Arc::new(Cone::new(radius, height));
    let render_scale = Vec3::new(radius, height, radius);
    rigid_primitive(shape, PrimitiveType::Cone, render_scale, mass, transform, config)
}

/// Y-aligned capsule; not scalable, so the renderer builds it from the shape
pub fn create_rigid_capsule(
    radius: f32,
    height: f32,
    mass: f32,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let shape = Arc::new(Capsule::new(radius, height));
    rigid_primitive(shape, PrimitiveType::Capsule, Vec3::ONE, mass, transform, config)
}

fn copy_mesh_buffers(object: &mut CollisionObject, mesh: &TriMesh) {
    object.set_positions(mesh.get_positions().to_vec());
    object.set_normals(mesh.get_normals().to_vec());
    object.set_tex_coords(mesh.get_tex_coords().to_vec());
    object.set_indices(mesh.get_indices().to_vec());
}

/// Static concave body drawn with the mesh's own buffers
pub fn create_rigid_mesh(
    mesh: &TriMesh,
    scale: Vec3,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let shape = build_concave_mesh(
        mesh.get_positions(),
        mesh.get_indices(),
        scale,
        config.concave_margin,
        config.remove_duplicate_vertices,
    )?;
    debug!(
        "rigid mesh: {} triangles, {} soup vertices",
        shape.get_mesh().triangle_count(),
        shape.get_mesh().vertex_count()
    );

    let mut object = rigid_object(Arc::new(shape), 0.0, transform, config)?;
    copy_mesh_buffers(&mut object, mesh);
    object.set_scale(scale);
    Ok(object)
}

/// Dynamic convex body drawn with the mesh's own buffers
pub fn create_rigid_hull(
    mesh: &TriMesh,
    scale: Vec3,
    mass: f32,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let shape = create_convex_hull_shape_from_mesh(mesh, scale);
    let mut object = rigid_object(Arc::new(shape), mass, transform, config)?;
    copy_mesh_buffers(&mut object, mesh);
    object.set_scale(scale);
    Ok(object)
}

/// Static terrain body with a matching render grid
///
/// The grid has one vertex per sample, texture coordinates spanning 0..1 and
/// two counter-clockwise triangles per cell seen from above.
pub fn create_rigid_terrain(
    height_field: &Channel32f,
    min_height: f32,
    max_height: f32,
    scale: Vec3,
    transform: &Mat4,
    config: &BridgeConfig,
) -> Result<CollisionObject> {
    let mut shape = create_heightfield_terrain_shape(height_field, min_height, max_height, Vec3::ONE)?;
    let grid = terrain_grid(&shape)?;
    shape.set_local_scaling(to_physics_vector3(scale));

    let mut object = rigid_object(Arc::new(shape), 0.0, transform, config)?;
    copy_mesh_buffers(&mut object, &grid);
    object.set_scale(scale);
    Ok(object)
}

fn terrain_grid(shape: &HeightfieldTerrainShape) -> Result<TriMesh> {
    let (width, length) = (shape.get_width(), shape.get_length());
    let mut grid = TriMesh::new();

    for row in 0..length {
        for column in 0..width {
            let vertex = shape.get_vertex(column, row).ok_or_else(|| {
                PhysicsError::InternalError(format!("terrain sample ({}, {}) missing", column, row))
            })?;
            grid.append_vertex(from_physics_vector3(vertex));
            grid.append_tex_coord(Vec2::new(
                column as f32 / (width - 1) as f32,
                row as f32 / (length - 1) as f32,
            ));
        }
    }

    for row in 0..length - 1 {
        for column in 0..width - 1 {
            let i = (row * width + column) as u32;
            let w = width as u32;
            grid.append_triangle(i, i + w, i + 1);
            grid.append_triangle(i + 1, i + w, i + w + 1);
        }
    }

    grid.recalculate_normals();
    Ok(grid)
}

/// Soft body over a mesh, its vertices placed in world space by `transform`
///
/// Render buffers are unindexed, three corners per face, which is the layout
/// [`CollisionObject::update`] rewrites every frame.
pub fn create_soft_mesh(mesh: &TriMesh, transform: &Mat4, config: &BridgeConfig) -> Result<CollisionObject> {
    let tex_coords = mesh.get_tex_coords();
    if !tex_coords.is_empty() && tex_coords.len() != mesh.num_vertices() {
        return Err(PhysicsError::InvalidParameter(format!(
            "{} texture coordinates for {} positions",
            tex_coords.len(),
            mesh.num_vertices()
        )));
    }

    let nodes: Vec<Vector3> = mesh
        .get_positions()
        .iter()
        .map(|p| to_physics_vector3(transform.transform_point3(*p)))
        .collect();
    let body = SoftBody::from_tri_mesh(&nodes, mesh.get_indices())?;

    // Indices were range-checked against the nodes, which match the tex coords
    let corner_tex_coords: Vec<Vec2> = if tex_coords.is_empty() {
        Vec::new()
    } else {
        mesh.get_indices().iter().map(|&i| tex_coords[i as usize]).collect()
    };
    let corner_count = body.faces().len() as u32 * 3;

    debug!("soft mesh: {} nodes, {} faces", body.nodes().len(), body.faces().len());

    let mut object = CollisionObject::with_config(config.clone());
    object.set_soft_body(body);
    object.set_tex_coords(corner_tex_coords);
    object.set_indices((0..corner_count).collect());
    object.update();
    Ok(object)
}
