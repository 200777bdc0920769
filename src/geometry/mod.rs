use num_traits::{Num, Signed, Float};
use crate::errors::GeometryError;
use crate::graph::Node;


/// Manhattan distance between two coordinate sequences of equal length
pub fn manhattan<T>(a: &[T], b: &[T]) -> T
where
    T: Num + Copy + Signed,
    {
    a.iter().zip(b).fold(T::zero(), |sum, (&a, &b)| sum + (a - b).abs())
}

/// Euclidean distance
pub fn euclidean<T>(a: &[T], b: &[T]) -> T
where
    T: Float,
    {
    squared_euclidean(a, b).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(a: &[T], b: &[T]) -> T
where
    T: Float,
    {
    a.iter().zip(b).fold(T::zero(), |sum, (&a, &b)| sum + (a - b).powi(2))
}


/// Manhattan distance between two nodes
pub fn manhattan_distance(a: &Node, b: &Node) -> f64 {
    manhattan(a.coordinates(), b.coordinates())
}

/// Euclidean distance between two nodes
pub fn euclidean_distance(a: &Node, b: &Node) -> f64 {
    euclidean(a.coordinates(), b.coordinates())
}

/// Least squares distance between two nodes: sum of squared coordinate differences
/// Not admissible as an A* heuristic once distances exceed 1
pub fn least_squares_distance(a: &Node, b: &Node) -> f64 {
    squared_euclidean(a.coordinates(), b.coordinates())
}


/// 2D Point
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar projection of a node, None unless the node is 2D
    pub fn from_node(node: &Node) -> Option<Self> {
        match node.coordinates() {
            [x, y] => Some(Self::new(*x, *y)),
            _ => None,
        }
    }
}


/// 2D Polygon, used as an obstacle when validating edges
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>, // Clockwise or counter-clockwise
}

impl Polygon {

    /// Create a new polygon from a list of points
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::InvalidPolygon);
        }
        Ok(Self { points })
    }

    /// Check if a point is inside the polygon
    /// Uses Ray-casting algorithm
    /// https://en.wikipedia.org/wiki/Point_in_polygon
    pub fn contains(&self, point: &Point) -> bool {
        let mut inside = false;

        for (vi, vj) in self.sides() {
            if (vi.y > point.y) != (vj.y > point.y) &&
               point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x {
                inside = !inside;
            }
        }

        inside
    }

    /// Check if a line segment crosses the polygon
    /// A segment that ends inside the polygon without touching a side also counts
    pub fn line_intersects(&self, start: &Point, end: &Point) -> bool {
        if self.contains(start) || self.contains(end) {
            return true;
        }
        self.sides().any(|(vi, vj)| segments_intersect(start, end, vi, vj))
    }

    /// Pairs of consecutive vertices, wrapping back to the first one
    fn sides(&self) -> impl Iterator<Item = (&Point, &Point)> {
        let n = self.points.len();
        (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }
}


/// Point Orientation
/// Returns:
/// 0 if collinear, >0 if clockwise, <0 if counterclockwise.
fn orientation(p: &Point, q: &Point, r: &Point) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Check if point q lies within the bounding box of segment pr
fn on_segment(p: &Point, q: &Point, r: &Point) -> bool {
    q.x <= f64::max(p.x, r.x) &&
    q.x >= f64::min(p.x, r.x) &&
    q.y <= f64::max(p.y, r.y) &&
    q.y >= f64::min(p.y, r.y)
}

/// Check if segments p1q1 and p2q2 intersect
fn segments_intersect(p1: &Point, q1: &Point, p2: &Point, q2: &Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return true;
    }

    // collinear and touching
    (o1 == 0.0 && on_segment(p1, p2, q1)) ||
    (o2 == 0.0 && on_segment(p1, q2, q1)) ||
    (o3 == 0.0 && on_segment(p2, p1, q2)) ||
    (o4 == 0.0 && on_segment(p2, q1, q2))
}
