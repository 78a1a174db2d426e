use crate::clipper::constants::UNASSIGNED;
use crate::geometry::point::{Path64, Paths64, PathsD, Point64};
use crate::geometry::polygon::{
    area, distance_sq_to_path, path_inside_path, point_in_polygon, scale_path_to_d,
    PointInPolygonResult,
};
use crate::geometry::rect::{path_bounds, Rect64};

/// A vertex this close to its parent's boundary is a rounding artifact, not a
/// stray: both the vertex and the edge it crosses may have moved half a unit
/// on each axis.
const ROUNDING_DISTANCE_SQ: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
struct PolyNode {
    polygon: Path64,
    area: f64,
    is_hole: bool,
    parent: usize,
    children: Vec<usize>,
}

impl PolyNode {
    fn new(polygon: Path64) -> Self {
        let area = area(&polygon);

        Self {
            polygon,
            area,
            is_hole: false,
            parent: UNASSIGNED,
            children: Vec::new(),
        }
    }
}

/// Hole-ownership hierarchy of a clipping result. Node 0 is the root, which
/// carries no polygon; its children are the outermost solids.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyTree {
    nodes: Vec<PolyNode>,
    reverse_solution: bool,
    containment_failures: usize,
}

impl PolyTree {
    pub const ROOT: usize = 0;

    pub fn new() -> Self {
        Self::with_orientation(false)
    }

    /// A tree whose outer polygons carry negative area when `reverse_solution` is set.
    pub fn with_orientation(reverse_solution: bool) -> Self {
        Self {
            nodes: vec![PolyNode::new(Vec::new())],
            reverse_solution,
            containment_failures: 0,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[Self::ROOT].children.clear();
        self.containment_failures = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT].children.is_empty()
    }

    /// Number of nodes below the root.
    pub fn total_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn root(&self) -> PolyPath<'_> {
        PolyPath {
            tree: self,
            index: Self::ROOT,
        }
    }

    pub fn containment_failures(&self) -> usize {
        self.containment_failures
    }

    pub fn area(&self) -> f64 {
        self.root().area()
    }

    pub(crate) fn create_node(&mut self, polygon: Path64) -> usize {
        let index = self.nodes.len();

        self.nodes.push(PolyNode::new(polygon));

        index
    }

    /// Links `child` under `parent`. Solids and holes alternate by depth, and
    /// a polygon wound against its role is reversed so that a hole's sign is
    /// always opposite its parent's.
    pub(crate) fn attach(&mut self, parent: usize, child: usize) {
        let is_hole = parent != Self::ROOT && !self.nodes[parent].is_hole;
        let is_positive = is_hole == self.reverse_solution;
        let node = &mut self.nodes[child];

        if (node.area > 0.0) != is_positive {
            log::debug!("poly tree: reversing node {} to match its depth", child);
            node.polygon.reverse();
            node.area = -node.area;
        }

        node.parent = parent;
        node.is_hole = is_hole;
        self.nodes[parent].children.push(child);
    }

    /// Places every node under the smallest larger node that encloses it, or
    /// under the root when none does. Larger nodes are placed first so a
    /// parent's hole flag is settled before its children are attached.
    pub(crate) fn nest(&mut self) {
        let bounds: Vec<Rect64> = self
            .nodes
            .iter()
            .map(|node| path_bounds(&node.polygon))
            .collect();
        let mut order: Vec<usize> = (1..self.nodes.len()).collect();

        order.sort_by(|&a, &b| self.nodes[b].area.abs().total_cmp(&self.nodes[a].area.abs()));

        for (position, &child) in order.iter().enumerate() {
            let child_node = &self.nodes[child];
            let parent = order[..position]
                .iter()
                .rev()
                .copied()
                .find(|&candidate| {
                    let outer = &self.nodes[candidate];

                    outer.area.abs() > child_node.area.abs()
                        && bounds[candidate].contains_rect(&bounds[child])
                        && path_inside_path(&child_node.polygon, &outer.polygon)
                })
                .unwrap_or(Self::ROOT);

            self.attach(parent, child);
        }

        // creation order, as the output records were numbered
        for node in self.nodes.iter_mut() {
            node.children.sort_unstable();
        }
    }

    /// Checks that every vertex of every nested polygon lies inside or on its
    /// parent, up to grid rounding. Failures are logged and counted but leave
    /// the tree as built.
    pub(crate) fn check_containment(&mut self) -> usize {
        let mut failures = 0;

        for index in 1..self.nodes.len() {
            let parent = self.nodes[index].parent;

            if parent == Self::ROOT || parent == UNASSIGNED {
                continue;
            }

            let outer = &self.nodes[parent].polygon;
            let stray = self.nodes[index].polygon.iter().find(|pt| {
                point_in_polygon(pt, outer) == PointInPolygonResult::Outside
                    && distance_sq_to_path(pt, outer) > ROUNDING_DISTANCE_SQ
            });

            if let Some(pt) = stray {
                log::warn!(
                    "poly tree: vertex {} of node {} lies outside its parent {}",
                    pt,
                    index,
                    parent
                );
                failures += 1;
            }
        }

        self.containment_failures = failures;

        failures
    }

    /// Net enclosure count at `pt`: +1 for every solid containing it, -1 for
    /// every hole strictly containing it.
    pub fn containment_count(&self, pt: &Point64) -> i32 {
        let mut result = 0;
        let mut pending = vec![Self::ROOT];

        while let Some(index) = pending.pop() {
            for &child in self.nodes[index].children.iter() {
                let node = &self.nodes[child];
                let location = point_in_polygon(pt, &node.polygon);

                if node.is_hole {
                    if location != PointInPolygonResult::Inside {
                        continue;
                    }
                    result -= 1;
                } else {
                    if location == PointInPolygonResult::Outside {
                        continue;
                    }
                    result += 1;
                }

                pending.push(child);
            }
        }

        result
    }

    pub fn contains_point(&self, pt: &Point64) -> bool {
        self.containment_count(pt) > 0
    }

    pub fn to_paths(&self) -> Paths64 {
        poly_tree_to_paths(self)
    }

    pub fn to_paths_d(&self, scale: f64) -> PathsD {
        self.to_paths()
            .iter()
            .map(|path| scale_path_to_d(path, scale))
            .collect()
    }
}

impl Default for PolyTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of one node of a `PolyTree`.
#[derive(Debug, Clone, Copy)]
pub struct PolyPath<'a> {
    tree: &'a PolyTree,
    index: usize,
}

impl<'a> PolyPath<'a> {
    fn node(&self) -> &'a PolyNode {
        &self.tree.nodes[self.index]
    }

    fn view(&self, index: usize) -> PolyPath<'a> {
        PolyPath {
            tree: self.tree,
            index,
        }
    }

    pub fn is_root(&self) -> bool {
        self.index == PolyTree::ROOT
    }

    pub fn polygon(&self) -> &'a [Point64] {
        &self.node().polygon
    }

    pub fn is_hole(&self) -> bool {
        self.node().is_hole
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    pub fn get_child(&self, index: usize) -> Option<PolyPath<'a>> {
        self.node()
            .children
            .get(index)
            .map(|&child| self.view(child))
    }

    pub fn children(&self) -> impl Iterator<Item = PolyPath<'a>> + 'a {
        let tree = self.tree;

        self.node()
            .children
            .iter()
            .map(move |&index| PolyPath { tree, index })
    }

    pub fn parent(&self) -> Option<PolyPath<'a>> {
        let parent = self.node().parent;

        if self.is_root() || parent == UNASSIGNED {
            None
        } else {
            Some(self.view(parent))
        }
    }

    /// Depth below the root; top-level polygons are at level 1.
    pub fn level(&self) -> usize {
        let mut result = 0;
        let mut curr = *self;

        while let Some(parent) = curr.parent() {
            result += 1;
            curr = parent;
        }

        result
    }

    /// Signed area of this polygon plus all of its descendants. Holes carry
    /// the opposite sign, so they subtract.
    pub fn area(&self) -> f64 {
        self.node().area + self.children().map(|child| child.area()).sum::<f64>()
    }
}

/// Flattens a tree into its polygons, parents before their children, with
/// orientation kept.
pub fn poly_tree_to_paths(tree: &PolyTree) -> Paths64 {
    let mut result = Vec::with_capacity(tree.total_count());

    fn collect(path: PolyPath<'_>, result: &mut Paths64) {
        for child in path.children() {
            result.push(child.polygon().to_vec());
            collect(child, result);
        }
    }

    collect(tree.root(), &mut result);

    result
}
