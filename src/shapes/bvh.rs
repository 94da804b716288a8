use crate::math::{Vector3, Aabb};

/// Child layout of a BVH node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BvhNodeKind {
    /// A leaf referencing one primitive by index
    Leaf { primitive: usize },

    /// An internal node referencing two children by node index
    Internal { left: usize, right: usize },
}

/// A node of the bounding-volume hierarchy
#[derive(Debug, Clone, Copy)]
pub struct BvhNode {
    /// Bounds enclosing every primitive below this node
    pub bounds: Aabb,

    /// Leaf or internal layout
    pub kind: BvhNodeKind,
}

/// A binary AABB tree over a fixed set of primitives
///
/// Built top-down: each internal node splits its primitives at the median
/// centroid along the longest axis of their centroid bounds. Leaves hold a
/// single primitive.
#[derive(Debug, Clone, Default)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
    root: Option<usize>,
}

struct BuildItem {
    primitive: usize,
    bounds: Aabb,
    centroid: Vector3,
}

impl Bvh {
    /// Builds a tree over primitives given by their bounds
    pub fn build(primitive_bounds: &[Aabb]) -> Self {
        let mut items: Vec<BuildItem> = primitive_bounds
            .iter()
            .enumerate()
            .map(|(primitive, bounds)| BuildItem {
                primitive,
                bounds: *bounds,
                centroid: bounds.center(),
            })
            .collect();

        let mut bvh = Self {
            nodes: Vec::with_capacity(primitive_bounds.len().saturating_mul(2)),
            root: None,
        };
        if !items.is_empty() {
            bvh.root = Some(bvh.build_recursive(&mut items));
        }
        bvh
    }

    fn build_recursive(&mut self, items: &mut [BuildItem]) -> usize {
        let bounds = items
            .iter()
            .skip(1)
            .fold(items[0].bounds, |acc, item| acc.union(&item.bounds));

        if items.len() == 1 {
            return self.push(BvhNode {
                bounds,
                kind: BvhNodeKind::Leaf { primitive: items[0].primitive },
            });
        }

        let centroids: Vec<Vector3> = items.iter().map(|item| item.centroid).collect();
        let axis = Aabb::from_points(&centroids)
            .map(|c| c.extents().max_axis())
            .unwrap_or(0);

        let mid = items.len() / 2;
        items.select_nth_unstable_by(mid, |a, b| a.centroid[axis].total_cmp(&b.centroid[axis]));

        let (lower, upper) = items.split_at_mut(mid);
        let left = self.build_recursive(lower);
        let right = self.build_recursive(upper);

        self.push(BvhNode {
            bounds,
            kind: BvhNodeKind::Internal { left, right },
        })
    }

    fn push(&mut self, node: BvhNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Returns true when the tree holds no primitives
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total node count, leaves included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Bounds of the whole tree
    pub fn root_bounds(&self) -> Option<Aabb> {
        self.root.map(|root| self.nodes[root].bounds)
    }

    /// Calls `visit` for every primitive whose bounds overlap `aabb`
    pub fn query_aabb<F: FnMut(usize)>(&self, aabb: &Aabb, mut visit: F) {
        let Some(root) = self.root else {
            return;
        };

        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.bounds.intersects(aabb) {
                continue;
            }
            match node.kind {
                BvhNodeKind::Leaf { primitive } => visit(primitive),
                BvhNodeKind::Internal { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
    }
}
