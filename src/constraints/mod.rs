mod point_to_point;

pub use self::point_to_point::{Point2PointConstraint, Point2PointSettings};
