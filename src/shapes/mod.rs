mod shape;
mod sphere;
mod box_shape;
mod cylinder;
mod cone;
mod capsule;
mod plane;
mod height_field;
mod bvh;
mod mesh;
mod convex_hull;

pub use self::shape::{Shape, ShapeType, DEFAULT_MARGIN};
pub use self::sphere::Sphere;
pub use self::box_shape::BoxShape;
pub use self::cylinder::Cylinder;
pub use self::cone::Cone;
pub use self::capsule::Capsule;
pub use self::plane::StaticPlane;
pub use self::height_field::{HeightfieldTerrainShape, UpAxis};
pub use self::bvh::{Bvh, BvhNode, BvhNodeKind};
pub use self::mesh::{Triangle, TriangleMesh, BvhTriangleMeshShape};
pub use self::convex_hull::ConvexHullShape;
