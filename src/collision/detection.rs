use super::manifold::ContactManifold;
use crate::config::{CollisionConfig, PolygonContactMode};
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Polygon};

/// Tests two circles centered at `pos_a` and `pos_b`.
///
/// Circles whose centers are exactly `radius_a + radius_b` apart are not
/// colliding. Coincident centers get the fixed normal `(1, 0)`, a
/// penetration of `radius_a`, and a single contact at `pos_a`.
pub fn check_circle_circle(
    pos_a: Vec2,
    circle_a: &Circle,
    pos_b: Vec2,
    circle_b: &Circle,
) -> Option<ContactManifold> {
    let offset = pos_b - pos_a;
    let dist_sq = offset.magnitude_squared();
    let radii_sum = circle_a.radius() + circle_b.radius();

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    if distance == 0.0 {
        return Some(ContactManifold::new(Vec2::X, circle_a.radius(), vec![pos_a]));
    }

    let normal = offset / distance;
    let contact = pos_a + normal * circle_a.radius();
    Some(ContactManifold::new(normal, radii_sum - distance, vec![contact]))
}

// --- SAT helpers ---

/// Interval covered by a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Projection {
    min: f64,
    max: f64,
}

impl Projection {
    fn of(vertices: &[Vec2], axis: Vec2) -> Self {
        vertices.iter().map(|v| v.dot(axis)).fold(
            Projection {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |p, d| Projection {
                min: p.min.min(d),
                max: p.max.max(d),
            },
        )
    }

    /// Length of the shared part of both intervals, or `None` when they are
    /// disjoint or only touch.
    fn overlap(&self, other: &Projection) -> Option<f64> {
        if self.max < other.min || other.max < self.min {
            return None;
        }
        let overlap = self.max.min(other.max) - self.min.max(other.min);
        (overlap > 0.0).then_some(overlap)
    }
}

/// Finds the axis of least penetration between two convex vertex sets.
///
/// Returns `None` as soon as a separating axis is found. On ties the first
/// axis in iteration order wins.
fn least_penetration_axis(
    axes: impl IntoIterator<Item = Vec2>,
    vertices_a: &[Vec2],
    vertices_b: &[Vec2],
) -> Option<(Vec2, f64)> {
    axes.into_iter()
        .try_fold(None, |best: Option<(Vec2, f64)>, axis| {
            let overlap = Projection::of(vertices_a, axis).overlap(&Projection::of(vertices_b, axis))?;
            Some(match best {
                Some((_, smallest)) if smallest <= overlap => best,
                _ => Some((axis, overlap)),
            })
        })
        .flatten()
}

/// Tests two convex polygons positioned at `pos_a` and `pos_b` with the
/// separating axis theorem.
///
/// The normal is the least-penetration axis, oriented from A's center
/// towards B's center.
pub fn check_polygon_polygon(
    polygon_a: &Polygon,
    pos_a: Vec2,
    polygon_b: &Polygon,
    pos_b: Vec2,
    config: &CollisionConfig,
) -> Option<ContactManifold> {
    let world_a = polygon_a.translated(pos_a);
    let world_b = polygon_b.translated(pos_b);

    let axes = polygon_a.axes().into_iter().chain(polygon_b.axes());
    let (axis, penetration) = least_penetration_axis(axes, &world_a, &world_b)?;

    let center_a = polygon_a.center() + pos_a;
    let center_b = polygon_b.center() + pos_b;
    let normal = if (center_b - center_a).dot(axis) < 0.0 {
        -axis
    } else {
        axis
    };

    let midpoint = (center_a + center_b) / 2.0;
    let contact_points = match config.polygon_contacts {
        PolygonContactMode::CenterMidpoint => vec![midpoint],
        PolygonContactMode::Clipped => {
            let tolerance = config.contact_tolerance;
            let mut points = clip_contacts(&world_a, &world_b, normal, tolerance);
            points.retain(|&p| {
                convex_contains(&world_a, p, tolerance) && convex_contains(&world_b, p, tolerance)
            });
            if points.is_empty() {
                // nested or deeply overlapping shapes
                log::trace!("edge clipping produced no overlap points, using contained vertices");
                points = contained_vertices(&world_a, &world_b, tolerance);
            }
            if points.is_empty() {
                log::trace!("no contained vertices, using center midpoint");
                points.push(midpoint);
            }
            points
        }
    };

    Some(ContactManifold::new(normal, penetration, contact_points))
}

// --- Contact clipping ---

/// The edge of a polygon that faces furthest along some direction.
#[derive(Debug, Clone, Copy)]
struct Feature {
    deepest: Vec2,
    start: Vec2,
    end: Vec2,
}

impl Feature {
    fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize()
    }
}

/// Picks the vertex furthest along `direction` and, of its two adjacent
/// edges, the one closest to perpendicular to `direction`.
fn best_edge(vertices: &[Vec2], direction: Vec2) -> Feature {
    let n = vertices.len();
    let index = (1..n).fold(0, |best, i| {
        if vertices[i].dot(direction) > vertices[best].dot(direction) {
            i
        } else {
            best
        }
    });

    let deepest = vertices[index];
    let prev = vertices[(index + n - 1) % n];
    let next = vertices[(index + 1) % n];

    let incoming = (deepest - prev).normalize();
    let outgoing = (next - deepest).normalize();
    if incoming.dot(direction).abs() <= outgoing.dot(direction).abs() {
        Feature {
            deepest,
            start: prev,
            end: deepest,
        }
    } else {
        Feature {
            deepest,
            start: deepest,
            end: next,
        }
    }
}

/// Keeps the points with `direction . p >= offset`. For a two-point segment
/// crossing the plane, the crossing point is added as well.
fn clip(points: &[Vec2], direction: Vec2, offset: f64) -> Vec<Vec2> {
    let mut kept: Vec<Vec2> = points
        .iter()
        .copied()
        .filter(|p| direction.dot(*p) - offset >= 0.0)
        .collect();

    if let [v1, v2] = *points {
        let d1 = direction.dot(v1) - offset;
        let d2 = direction.dot(v2) - offset;
        if d1 * d2 < 0.0 {
            kept.push(v1 + (v2 - v1) * (d1 / (d1 - d2)));
        }
    }
    kept
}

/// Reference/incident edge clipping. `normal` points from A to B.
fn clip_contacts(vertices_a: &[Vec2], vertices_b: &[Vec2], normal: Vec2, tolerance: f64) -> Vec<Vec2> {
    let edge_a = best_edge(vertices_a, normal);
    let edge_b = best_edge(vertices_b, -normal);

    // the edge most perpendicular to the normal is the reference face
    let (reference, incident, face_normal) =
        if edge_a.direction().dot(normal).abs() <= edge_b.direction().dot(normal).abs() {
            (edge_a, edge_b, normal)
        } else {
            (edge_b, edge_a, -normal)
        };

    let side = reference.direction();
    let points = clip(&[incident.start, incident.end], side, side.dot(reference.start));
    let points = clip(&points, -side, -side.dot(reference.end));

    let face_offset = face_normal.dot(reference.deepest);
    points
        .into_iter()
        .filter(|p| face_normal.dot(*p) <= face_offset + tolerance)
        .collect()
}

/// Whether `point` lies inside or on the boundary of the convex outline
/// `vertices`, within `tolerance` of each edge. Works for either winding.
fn convex_contains(vertices: &[Vec2], point: Vec2, tolerance: f64) -> bool {
    let n = vertices.len();
    let (mut left, mut right) = (false, false);
    for i in 0..n {
        let (start, end) = (vertices[i], vertices[(i + 1) % n]);
        let edge = end - start;
        let distance = edge.cross(point - start) / edge.magnitude();
        if distance > tolerance {
            left = true;
        } else if distance < -tolerance {
            right = true;
        }
        if left && right {
            return false;
        }
    }
    true
}

/// Vertices of A inside B followed by vertices of B inside A, without
/// repeats.
fn contained_vertices(vertices_a: &[Vec2], vertices_b: &[Vec2], tolerance: f64) -> Vec<Vec2> {
    let a_in_b = vertices_a
        .iter()
        .filter(|&&v| convex_contains(vertices_b, v, tolerance));
    let b_in_a = vertices_b
        .iter()
        .filter(|&&v| convex_contains(vertices_a, v, tolerance));

    let mut points: Vec<Vec2> = Vec::new();
    for &v in a_in_b.chain(b_in_a) {
        if !points.contains(&v) {
            points.push(v);
        }
    }
    points
}
