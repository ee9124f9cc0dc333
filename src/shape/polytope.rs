//! Polytopes: point sets with shared static adjacency information.

use core::cell::Cell;

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use crate::shape::topology::{FaceData, Topology, VertexData, CUBE_TOPOLOGY, TETRAHEDRON_TOPOLOGY};
use crate::shape::{Pose, Segment, SupportMap};
use crate::utils::{self, PluckerPlane, PluckerPoint};
use log::debug;
use na::Unit;
use smallvec::SmallVec;

/// Error indicating that a polytope could not be constructed from the given
/// points and topology.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolytopeError {
    /// The point list was empty.
    #[error("a polytope requires at least one point")]
    Empty,
    /// A polygon needs at least three points, and its first three points
    /// must span a plane.
    #[error("a polygon requires at least three points spanning a plane, got {0}")]
    DegeneratePolygon(usize),
    /// The point list and the topology tables disagree on the vertex count.
    #[error("the polytope has {points} points but its topology describes {vertices} vertices")]
    TopologyMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of vertices in the topology tables.
        vertices: usize,
    },
}

/// A convex polytope: a set of local-space points, a pose, and optional
/// shared adjacency tables.
///
/// With adjacency available, support queries hill-climb the vertex graph
/// from a cached warm-start vertex instead of scanning every point. The
/// cache makes the polytope `!Sync`: concurrent queries against the same
/// instance are not allowed, replicate instances across workers instead.
#[derive(Debug, Clone)]
pub struct Polytope {
    pose: Pose,
    points: Vec<Point<Real>>,
    topology: Option<&'static Topology>,
    support_point: Cell<usize>,
}

impl Polytope {
    /// Creates a polytope from a point list and optional topology tables.
    ///
    /// With topology, the point count must match the vertex-table size so
    /// every neighbor index stays valid.
    pub fn try_new(
        pose: Pose,
        points: Vec<Point<Real>>,
        topology: Option<&'static Topology>,
    ) -> Result<Polytope, PolytopeError> {
        if points.is_empty() {
            return Err(PolytopeError::Empty);
        }
        if let Some(topology) = topology {
            if points.len() != topology.vertices.len() {
                return Err(PolytopeError::TopologyMismatch {
                    points: points.len(),
                    vertices: topology.vertices.len(),
                });
            }
        }
        Ok(Polytope {
            pose,
            points,
            topology,
            support_point: Cell::new(0),
        })
    }

    /// The canonical unit cube with corners `±0.5`, sized and oriented
    /// through the pose matrix.
    pub fn cube(pose: Pose) -> Polytope {
        let points = vec![
            Point::new(-0.5, -0.5, -0.5),
            Point::new(0.5, -0.5, -0.5),
            Point::new(-0.5, -0.5, 0.5),
            Point::new(0.5, -0.5, 0.5),
            Point::new(-0.5, 0.5, -0.5),
            Point::new(0.5, 0.5, -0.5),
            Point::new(-0.5, 0.5, 0.5),
            Point::new(0.5, 0.5, 0.5),
        ];
        Polytope {
            pose,
            points,
            topology: Some(&CUBE_TOPOLOGY),
            support_point: Cell::new(0),
        }
    }

    /// A tetrahedron over four world-space points.
    ///
    /// The points must be ordered so that `p3` lies below the plane of the
    /// base triangle, i.e. `dot(p3 - p0, (p1 - p0) × (p2 - p0)) < 0`,
    /// otherwise the face normals point inward.
    pub fn tetrahedron(
        p0: Point<Real>,
        p1: Point<Real>,
        p2: Point<Real>,
        p3: Point<Real>,
    ) -> Polytope {
        Polytope {
            pose: Pose::identity(),
            points: vec![p0, p1, p2, p3],
            topology: Some(&TETRAHEDRON_TOPOLOGY),
            support_point: Cell::new(0),
        }
    }

    /// A triangle as a degenerate tetrahedron: the apex is the centroid
    /// displaced by a tolerance-sized step along the triangle normal, so the
    /// same support and contact code path handles thin geometry.
    ///
    /// The three points must not be collinear.
    pub fn triangle(p0: Point<Real>, p1: Point<Real>, p2: Point<Real>) -> Polytope {
        let up = (p2 - p0).cross(&(p1 - p0)).normalize() * DEFAULT_TOLERANCE;
        let centroid = Point::from((p0.coords + p1.coords + p2.coords) / 3.0);
        Polytope::tetrahedron(p0, p1, p2, centroid + up)
    }

    /// A planar quad as a degenerate box: the four coplanar corners plus
    /// copies lifted by a tolerance-sized step along the quad normal.
    ///
    /// The corners must be passed in the same zig-zag order as the cube's
    /// bottom face: `p0, p1` along one edge, then `p2, p3` along the
    /// opposite edge in the same direction.
    pub fn quad(
        p0: Point<Real>,
        p1: Point<Real>,
        p2: Point<Real>,
        p3: Point<Real>,
    ) -> Polytope {
        let up = (p2 - p0).cross(&(p1 - p0)).normalize() * DEFAULT_TOLERANCE;
        let points = vec![p0, p1, p2, p3, p0 + up, p1 + up, p2 + up, p3 + up];
        Polytope {
            pose: Pose::identity(),
            points,
            topology: Some(&CUBE_TOPOLOGY),
            support_point: Cell::new(0),
        }
    }

    /// A planar polygon with `N` coplanar corners, as an infinitely thin 3D
    /// body: the corners plus copies lifted along the polygon normal.
    ///
    /// No adjacency tables exist for arbitrary `N`, so support queries fall
    /// back to the linear scan.
    ///
    /// Fails when fewer than three points are given or when the first three
    /// are collinear (no normal to lift along).
    pub fn polygon(points: Vec<Point<Real>>) -> Result<Polytope, PolytopeError> {
        if points.len() < 3 {
            return Err(PolytopeError::DegeneratePolygon(points.len()));
        }
        let normal = (points[2] - points[0]).cross(&(points[1] - points[0]));
        let up = Unit::try_new(normal, DEFAULT_EPSILON)
            .ok_or(PolytopeError::DegeneratePolygon(points.len()))?
            .into_inner()
            * DEFAULT_TOLERANCE;
        let corners = points.len();
        let mut all = points;
        for i in 0..corners {
            let lifted = all[i] + up;
            all.push(lifted);
        }
        Polytope::try_new(Pose::identity(), all, None)
    }

    /// The pose of this polytope.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Mutable access to the pose of this polytope.
    #[inline]
    pub fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    /// The local-space points of this polytope.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The shared topology tables, if this shape family has them.
    #[inline]
    pub fn topology(&self) -> Option<&'static Topology> {
        self.topology
    }

    /// The world-space position of the vertex at `index`.
    #[inline]
    pub fn vertex_point(&self, index: usize) -> Point<Real> {
        self.pose.transform_point(&self.points[index])
    }

    /// A borrowed view of the vertex at `index`.
    ///
    /// Panics if the polytope has no topology.
    pub fn vertex(&self, index: usize) -> VertexRef<'_> {
        let topology = self
            .topology
            .expect("vertex queries require a polytope with topology");
        VertexRef {
            polytope: self,
            data: &topology.vertices[index],
            index,
        }
    }

    /// A borrowed view of the face at `index`.
    ///
    /// Panics if the polytope has no topology.
    pub fn face(&self, index: usize) -> FaceRef<'_> {
        let topology = self
            .topology
            .expect("face queries require a polytope with topology");
        FaceRef {
            polytope: self,
            data: &topology.faces[index],
            index,
        }
    }

    /// Iterates over the faces of this polytope. Empty without topology.
    pub fn faces(&self) -> impl Iterator<Item = FaceRef<'_>> {
        let faces: &'static [FaceData] = self.topology.map(|t| t.faces).unwrap_or(&[]);
        faces.iter().enumerate().map(move |(index, data)| FaceRef {
            polytope: self,
            data,
            index,
        })
    }

    /// Hill-climbs the vertex adjacency graph toward the support point along
    /// a local-space direction, warm-starting from the cached terminal
    /// vertex of the previous query.
    ///
    /// The support function of a convex polytope is unimodal over its
    /// connected vertex graph, so following strictly improving edges from
    /// any start reaches a global maximizer. Ties are not followed: any
    /// maximizer is acceptable.
    fn climb(&self, topology: &Topology, local_dir: &Vector<Real>) -> usize {
        let mut best = self.support_point.get();
        let mut best_dot = self.points[best].coords.dot(local_dir);

        loop {
            let current = best;
            for &neighbor in topology.vertices[current].neighbors {
                let dot = self.points[neighbor].coords.dot(local_dir);
                if dot > best_dot {
                    best_dot = dot;
                    best = neighbor;
                }
            }
            if best == current {
                break;
            }
        }

        self.support_point.set(best);
        best
    }
}

impl SupportMap for Polytope {
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.pose.inverse_transform_vector(dir);

        let best = match self.topology {
            Some(topology)
                if !topology.vertices[self.support_point.get()].neighbors.is_empty() =>
            {
                self.climb(topology, &local_dir)
            }
            _ => {
                debug!("polytope without adjacency information, using the linear support scan");
                utils::point_cloud_support_point_id(&local_dir, &self.points)
            }
        };

        self.pose.transform_point(&self.points[best])
    }
}

/// A borrowed view of one polytope vertex.
///
/// Views are created per query and carry the owning polytope by reference;
/// nothing is stored back into the shared topology tables.
#[derive(Copy, Clone)]
pub struct VertexRef<'a> {
    polytope: &'a Polytope,
    data: &'a VertexData,
    index: usize,
}

impl<'a> VertexRef<'a> {
    /// The polytope this vertex belongs to.
    #[inline]
    pub fn polytope(&self) -> &'a Polytope {
        self.polytope
    }

    /// The index of this vertex.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The world-space position of this vertex.
    #[inline]
    pub fn point(&self) -> Point<Real> {
        self.polytope.vertex_point(self.index)
    }

    /// Indices of the faces incident to this vertex.
    #[inline]
    pub fn incident_faces(&self) -> &'static [usize] {
        self.data.faces
    }

    /// Indices of the neighbors of this vertex.
    #[inline]
    pub fn neighbors(&self) -> &'static [usize] {
        self.data.neighbors
    }

    /// The homogeneous Plücker form of this vertex, in world space.
    #[inline]
    pub fn pluecker(&self) -> PluckerPoint {
        PluckerPoint::new(&self.point())
    }
}

impl SupportMap for VertexRef<'_> {
    #[inline]
    fn support_point(&self, _: &Vector<Real>) -> Point<Real> {
        self.point()
    }
}

/// A borrowed view of one polytope face.
#[derive(Copy, Clone)]
pub struct FaceRef<'a> {
    polytope: &'a Polytope,
    data: &'a FaceData,
    index: usize,
}

impl<'a> FaceRef<'a> {
    /// The polytope this face belongs to.
    #[inline]
    pub fn polytope(&self) -> &'a Polytope {
        self.polytope
    }

    /// The index of this face.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Indices of the vertices of this face, as a boundary loop.
    #[inline]
    pub fn vertices(&self) -> &'static [usize] {
        self.data.vertices
    }

    /// Indices of the faces sharing an edge with this face.
    #[inline]
    pub fn neighbors(&self) -> &'static [usize] {
        self.data.neighbors
    }

    /// Tests whether the vertex at `index` belongs to this face.
    #[inline]
    pub fn contains_vertex(&self, index: usize) -> bool {
        self.data.vertices.contains(&index)
    }

    /// The outward face normal, scaled by an arbitrary positive factor.
    ///
    /// Computed as the cross product of two edge vectors spanned by the four
    /// designated normal vertices of the face.
    pub fn scaled_normal(&self) -> Vector<Real> {
        let n = &self.data.normal_vertices;
        let points = &self.polytope.points;
        let matrix = self.polytope.pose.matrix();
        (matrix * (points[n[0]] - points[n[1]])).cross(&(matrix * (points[n[2]] - points[n[3]])))
    }

    /// The outward unit face normal, or `None` if the face is degenerate.
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The world-space positions of the vertices of this face.
    pub fn points(&self) -> SmallVec<[Point<Real>; 4]> {
        self.data
            .vertices
            .iter()
            .map(|&v| self.polytope.vertex_point(v))
            .collect()
    }

    /// The edge vectors of this face as a closed loop, starting with the
    /// edge from the last boundary vertex back to the first.
    pub fn edge_vectors(&self) -> SmallVec<[Vector<Real>; 4]> {
        let vertices = self.data.vertices;
        let mut result = SmallVec::new();
        let mut prev = vertices[vertices.len() - 1];
        for &v in vertices {
            result.push(
                self.polytope
                    .pose
                    .transform_vector(&(self.polytope.points[v] - self.polytope.points[prev])),
            );
            prev = v;
        }
        result
    }

    /// The edges of this face as world-space segments, as a closed loop.
    pub fn edges(&self) -> SmallVec<[Segment; 4]> {
        let vertices = self.data.vertices;
        let mut result = SmallVec::new();
        let mut prev = vertices[vertices.len() - 1];
        for &v in vertices {
            result.push(Segment::new(
                self.polytope.vertex_point(prev),
                self.polytope.vertex_point(v),
            ));
            prev = v;
        }
        result
    }

    /// The supporting plane of this face in Plücker form `[normal | d]`.
    pub fn pluecker(&self) -> PluckerPlane {
        PluckerPlane::new(
            &self.scaled_normal(),
            &self.polytope.vertex_point(self.data.vertices[0]),
        )
    }

    /// Tests whether a world-space point lies inside the prism spanned by
    /// this face's boundary.
    ///
    /// Walks the boundary and builds an inward side plane per edge from the
    /// edge vector and the face normal; the point must be on the positive
    /// side of all of them. Displacement along the face normal itself does
    /// not affect the result; pair this test with a plane-distance check.
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        let normal = self.scaled_normal();
        let vertices = self.data.vertices;
        let mut prev = vertices[vertices.len() - 1];

        for &v in vertices {
            let p0 = self.polytope.vertex_point(prev);
            let p1 = self.polytope.vertex_point(v);
            let side_normal = (p1 - p0).cross(&-normal);
            if (point - p0).dot(&side_normal) < 0.0 {
                return false;
            }
            prev = v;
        }

        true
    }
}

/// The support point of a face is the farthest of its boundary vertices.
impl SupportMap for FaceRef<'_> {
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.polytope.pose.inverse_transform_vector(dir);
        let points = &self.polytope.points;

        let mut best = self.data.vertices[0];
        let mut best_dot = points[best].coords.dot(&local_dir);
        for &v in &self.data.vertices[1..] {
            let dot = points[v].coords.dot(&local_dir);
            if dot > best_dot {
                best_dot = dot;
                best = v;
            }
        }

        self.polytope.pose.transform_point(&points[best])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Matrix;
    use approx::assert_relative_eq;

    fn sampled_directions(n: u32) -> Vec<Vector<Real>> {
        let mut rng = oorandom::Rand32::new(42);
        (0..n)
            .map(|_| {
                Vector::new(
                    rng.rand_float() as Real * 2.0 - 1.0,
                    rng.rand_float() as Real * 2.0 - 1.0,
                    rng.rand_float() as Real * 2.0 - 1.0,
                )
            })
            .filter(|dir| dir.norm_squared() > 1.0e-3)
            .collect()
    }

    #[test]
    fn hill_climb_matches_linear_scan_on_cube() {
        let cube = Polytope::cube(Pose::new(
            Point::new(1.0, -2.0, 0.5),
            Matrix::from_diagonal(&Vector::new(2.0, 1.0, 3.0)),
        ));

        for dir in sampled_directions(200) {
            let local_dir = cube.pose().inverse_transform_vector(&dir);
            let brute = utils::point_cloud_support_point(&local_dir, cube.points());
            let climbed = cube.support_point(&dir);
            assert_relative_eq!(
                climbed,
                cube.pose().transform_point(&brute),
                epsilon = 1.0e-4
            );
        }
    }

    #[test]
    fn hill_climb_matches_linear_scan_on_tetrahedron() {
        let tetra = Polytope::tetrahedron(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(0.3, 1.0, 0.3),
        );

        for dir in sampled_directions(200) {
            let brute = utils::point_cloud_support_point(&dir, tetra.points());
            assert_relative_eq!(tetra.support_point(&dir), brute, epsilon = 1.0e-4);
        }
    }

    #[test]
    fn warm_start_cache_is_updated() {
        let cube = Polytope::cube(Pose::identity());
        let _ = cube.support_point(&Vector::new(1.0, 1.0, 1.0));
        assert_eq!(cube.support_point.get(), 7);
        let _ = cube.support_point(&Vector::new(-1.0, -1.0, -1.0));
        assert_eq!(cube.support_point.get(), 0);
    }

    #[test]
    fn polygon_falls_back_to_linear_scan() {
        let polygon = Polytope::polygon(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 2.0),
            Point::new(0.0, 0.0, 2.0),
        ])
        .unwrap();

        assert!(polygon.topology().is_none());
        for dir in sampled_directions(50) {
            let brute = utils::point_cloud_support_point(&dir, polygon.points());
            assert_relative_eq!(polygon.support_point(&dir), brute);
        }
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Polytope::try_new(Pose::identity(), vec![], None).unwrap_err(),
            PolytopeError::Empty
        );
        assert_eq!(
            Polytope::try_new(
                Pose::identity(),
                vec![Point::origin(); 5],
                Some(&CUBE_TOPOLOGY)
            )
            .unwrap_err(),
            PolytopeError::TopologyMismatch {
                points: 5,
                vertices: 8
            }
        );
        assert_eq!(
            Polytope::polygon(vec![Point::origin(); 2]).unwrap_err(),
            PolytopeError::DegeneratePolygon(2)
        );
        // Collinear leading points span no plane to lift the copies along.
        assert_eq!(
            Polytope::polygon(vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(2.0, 0.0, 0.0),
            ])
            .unwrap_err(),
            PolytopeError::DegeneratePolygon(3)
        );
    }

    #[test]
    fn face_boundary_queries_form_closed_loops() {
        let cube = Polytope::cube(Pose::identity());
        for face in cube.faces() {
            let vectors = face.edge_vectors();
            assert_eq!(vectors.len(), 4);
            assert_relative_eq!(
                vectors.iter().sum::<Vector<Real>>(),
                Vector::zeros(),
                epsilon = 1.0e-6
            );

            let edges = face.edges();
            assert_eq!(edges.len(), 4);
            for w in 0..edges.len() {
                let next = (w + 1) % edges.len();
                assert_relative_eq!(edges[w].b, edges[next].a);
            }
        }
    }

    #[test]
    fn triangle_apex_is_tolerance_thin() {
        let triangle = Polytope::triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        );
        let apex = triangle.points()[3];
        assert!(apex.y.abs() > 0.0 && apex.y.abs() < 1.0e-5);
    }
}
