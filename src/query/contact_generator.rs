//! The contact-manifold generator.
//!
//! A single-pass pipeline per colliding pair: guard the seed direction,
//! greedily pick one candidate face per body (the first face passing the
//! separation test, plus its topological neighbors), gate every candidate
//! face pair through the separation test again, then emit vertex-face and
//! edge-edge contacts into a deduplicated, ordered set.

use crate::math::{Real, Vector, DEFAULT_TOLERANCE};
use crate::query::{Contact, ContactSet, IntervalSeparation, SeparationTest};
use crate::shape::{FaceRef, Polytope, Segment, VertexRef};
use log::debug;
use smallvec::SmallVec;

/// Tuning knobs of the contact generator.
///
/// The tolerance gates every plane/line proximity test and must be chosen
/// consistent with the units of the scene; it is not auto-scaled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContactConfig {
    /// The geometric tolerance below which distances count as touching.
    pub tolerance: Real,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Computes the contact points between two polytopes with the default
/// configuration and the built-in interval separation test.
///
/// `dir` is the contact direction supplied by an external penetration
/// oracle (GJK/EPA or SAT); the greedy face selection below relies on it
/// approximating the true contact normal. An empty result means no manifold
/// was found within tolerance, which is a valid outcome even when a
/// broad-phase reported the pair as overlapping.
pub fn generate_contacts<'a>(
    first: &'a Polytope,
    second: &'a Polytope,
    dir: &Vector<Real>,
) -> ContactSet<'a> {
    let config = ContactConfig::default();
    let sat = IntervalSeparation::new(config.tolerance);
    generate_contacts_with(first, second, dir, &config, &sat)
}

/// Computes the contact points between two polytopes with an explicit
/// configuration and separation oracle.
pub fn generate_contacts_with<'a>(
    first: &'a Polytope,
    second: &'a Polytope,
    dir: &Vector<Real>,
    config: &ContactConfig,
    sat: &dyn SeparationTest,
) -> ContactSet<'a> {
    let mut contacts = ContactSet::new();

    let dir = seed_direction(dir);

    let first_faces = candidate_faces(first, second, &dir, sat);
    let second_faces = candidate_faces(second, first, &dir, sat);

    for &f1 in &first_faces {
        for &f2 in &second_faces {
            let face1 = first.face(f1);
            let face2 = second.face(f2);
            if sat.overlap(&face1, &face2, &dir) {
                face_face_contacts(&face1, &face2, &dir, config, sat, &mut contacts);
            }
        }
    }

    contacts
}

/// Guards the seed direction: a degenerate direction would make every
/// projection downstream ill-defined, so it is replaced with the up axis.
///
/// The threshold on the squared norm is a fixed constant, independent of
/// [`ContactConfig::tolerance`]: the configurable tolerance gates geometric
/// acceptance, not direction validity.
fn seed_direction(dir: &Vector<Real>) -> Vector<Real> {
    if dir.norm_squared() < DEFAULT_TOLERANCE {
        debug!("degenerate contact direction, substituting the up axis");
        Vector::y()
    } else {
        *dir
    }
}

/// Finds the first face of `of` touching `against` along `dir` and returns
/// it together with its topological neighbors.
///
/// Greedy by design: when `dir` approximates the true contact normal, the
/// first qualifying face is representative of the whole contact region.
fn candidate_faces(
    of: &Polytope,
    against: &Polytope,
    dir: &Vector<Real>,
    sat: &dyn SeparationTest,
) -> SmallVec<[usize; 5]> {
    let mut result = SmallVec::new();
    for face in of.faces() {
        if sat.overlap(&face, against, dir) {
            result.push(face.index());
            result.extend_from_slice(face.neighbors());
            break;
        }
    }
    result
}

/// Cross-tests one candidate face pair: every vertex of each face against
/// the other face, then every edge pair.
fn face_face_contacts<'a>(
    face1: &FaceRef<'a>,
    face2: &FaceRef<'a>,
    dir: &Vector<Real>,
    config: &ContactConfig,
    sat: &dyn SeparationTest,
    contacts: &mut ContactSet<'a>,
) {
    for &v in face1.vertices() {
        let vertex = face1.polytope().vertex(v);
        if sat.overlap(&vertex, face2, dir) {
            vertex_face_contact(&vertex, face2, config, contacts);
        }
    }

    for &v in face2.vertices() {
        let vertex = face2.polytope().vertex(v);
        if sat.overlap(&vertex, face1, dir) {
            vertex_face_contact(&vertex, face1, config, contacts);
        }
    }

    let edges1 = face1.edges();
    let edges2 = face2.edges();
    for edge1 in &edges1 {
        for edge2 in &edges2 {
            if sat.overlap(edge1, edge2, dir) {
                edge_edge_contact(face1, edge1, face2, edge2, config, contacts);
            }
        }
    }
}

/// Emits a contact when a vertex rests on a face: the vertex must be within
/// tolerance of the face plane and project inside the face boundary.
///
/// The contact normal is the face normal: it points away from the face
/// owner (the second body of the emitted contact), toward the vertex owner.
fn vertex_face_contact<'a>(
    vertex: &VertexRef<'a>,
    face: &FaceRef<'a>,
    config: &ContactConfig,
    contacts: &mut ContactSet<'a>,
) {
    let point = vertex.point();
    if face.pluecker().distance_to_point(&point) < config.tolerance && face.contains_point(&point)
    {
        if let Some(normal) = face.normal() {
            let _ = contacts.insert(Contact {
                first: vertex.polytope(),
                second: face.polytope(),
                position: point,
                normal,
            });
        }
    }
}

/// Emits a contact when two face edges meet.
///
/// The lines must be coplanar (vanishing reciprocal product, measured as a
/// line-line distance below tolerance). The meet point is recovered as the
/// intersection of the second edge's line with the first face's plane; a
/// vanishing homogeneous weight means that line runs parallel to the plane
/// and has no finite meet (parallel edges in particular end up here). The
/// point must finally lie inside both finite segments.
fn edge_edge_contact<'a>(
    face1: &FaceRef<'a>,
    edge1: &Segment,
    face2: &FaceRef<'a>,
    edge2: &Segment,
    config: &ContactConfig,
    contacts: &mut ContactSet<'a>,
) {
    let line1 = edge1.pluecker();
    let line2 = edge2.pluecker();

    // NaN distances (parallel, coplanar lines) fail this comparison too.
    if line1.distance_to_line(&line2) < config.tolerance {
        let meet = face1.pluecker().meet(&line2);
        if meet.weight.abs() < config.tolerance {
            return;
        }

        let point = meet.euclidean();
        if edge1.contains_point(&point, config.tolerance)
            && edge2.contains_point(&point, config.tolerance)
        {
            if let Some(normal) = face2.normal() {
                let _ = contacts.insert(Contact {
                    first: face1.polytope(),
                    second: face2.polytope(),
                    position: point,
                    normal,
                });
            }
        }
    }
}
