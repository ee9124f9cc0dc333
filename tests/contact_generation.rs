use approx::assert_relative_eq;
use touche::math::{Matrix, Point, Real, Vector};
use touche::query::{generate_contacts, generate_contacts_with, ContactConfig, IntervalSeparation};
use touche::shape::{Polytope, Pose};

fn scaled_cube(origin: Point<Real>, sx: Real, sy: Real, sz: Real) -> Polytope {
    Polytope::cube(Pose::new(
        origin,
        Matrix::from_diagonal(&Vector::new(sx, sy, sz)),
    ))
}

fn sorted_positions(contacts: &touche::query::ContactSet) -> Vec<Point<Real>> {
    contacts.iter().map(|c| c.position).collect()
}

fn assert_positions(contacts: &touche::query::ContactSet, expected: &[Point<Real>]) {
    let positions = sorted_positions(contacts);
    assert_eq!(positions.len(), expected.len(), "{:?}", positions);
    let mut expected = expected.to_vec();
    expected.sort_by(|a, b| (a.x, a.y, a.z).partial_cmp(&(b.x, b.y, b.z)).unwrap());
    for (got, want) in positions.iter().zip(expected.iter()) {
        assert_relative_eq!(got, want, epsilon = 1.0e-4);
    }
}

#[test]
fn box_resting_on_ground_yields_corner_contacts() {
    let ground = scaled_cube(Point::origin(), 4.0, 1.0, 4.0);
    let cube = scaled_cube(Point::new(0.0, 1.0, 0.0), 1.0, 1.0, 1.0);

    let contacts = generate_contacts(&cube, &ground, &Vector::y());

    assert_positions(
        &contacts,
        &[
            Point::new(-0.5, 0.5, -0.5),
            Point::new(-0.5, 0.5, 0.5),
            Point::new(0.5, 0.5, -0.5),
            Point::new(0.5, 0.5, 0.5),
        ],
    );

    for contact in &contacts {
        // The resting contacts come from the cube's corners against the
        // ground's top face: the normal points away from the ground, up.
        assert_relative_eq!(
            contact.normal.into_inner(),
            Vector::y(),
            epsilon = 1.0e-4
        );
        assert!(core::ptr::eq(contact.first, &cube));
        assert!(core::ptr::eq(contact.second, &ground));
    }
}

#[test]
fn stacked_equal_boxes_share_the_full_face() {
    let lower = scaled_cube(Point::origin(), 1.0, 1.0, 1.0);
    let upper = scaled_cube(Point::new(0.0, 1.0, 0.0), 1.0, 1.0, 1.0);

    let contacts = generate_contacts(&lower, &upper, &Vector::y());

    // The shared corners are emitted from both bodies and deduplicated.
    assert_positions(
        &contacts,
        &[
            Point::new(-0.5, 0.5, -0.5),
            Point::new(-0.5, 0.5, 0.5),
            Point::new(0.5, 0.5, -0.5),
            Point::new(0.5, 0.5, 0.5),
        ],
    );
}

#[test]
fn lifted_box_yields_no_contacts() {
    let ground = scaled_cube(Point::origin(), 4.0, 1.0, 4.0);
    let cube = scaled_cube(Point::new(0.0, 1.0 + 1.0e-4, 0.0), 1.0, 1.0, 1.0);

    assert!(generate_contacts(&cube, &ground, &Vector::y()).is_empty());
}

#[test]
fn crossed_beams_meet_along_their_edges() {
    // Two beams crossing at right angles, touching along the overlap square:
    // no vertex of either body lies on the other, so all four contacts come
    // from edge-edge intersections.
    let lower = scaled_cube(Point::origin(), 4.0, 1.0, 1.0);
    let upper = scaled_cube(Point::new(0.0, 1.0, 0.0), 1.0, 1.0, 4.0);

    let contacts = generate_contacts(&lower, &upper, &Vector::y());

    assert_positions(
        &contacts,
        &[
            Point::new(-0.5, 0.5, -0.5),
            Point::new(-0.5, 0.5, 0.5),
            Point::new(0.5, 0.5, -0.5),
            Point::new(0.5, 0.5, 0.5),
        ],
    );
}

#[test]
fn parallel_beams_do_not_meet_edgewise() {
    // Side by side with a gap: nothing touches.
    let left = scaled_cube(Point::origin(), 1.0, 1.0, 4.0);
    let right = scaled_cube(Point::new(1.5, 0.0, 0.0), 1.0, 1.0, 4.0);

    assert!(generate_contacts(&left, &right, &Vector::x()).is_empty());
}

#[test]
fn generation_is_deterministic_and_idempotent() {
    let lower = scaled_cube(Point::origin(), 4.0, 1.0, 1.0);
    let upper = scaled_cube(Point::new(0.0, 1.0, 0.0), 1.0, 1.0, 4.0);

    let a = generate_contacts(&lower, &upper, &Vector::y());
    // The warm-start support cache has moved; the output must not.
    let b = generate_contacts(&lower, &upper, &Vector::y());

    let a: Vec<_> = a.iter().map(|c| (c.position, c.normal.into_inner())).collect();
    let b: Vec<_> = b.iter().map(|c| (c.position, c.normal.into_inner())).collect();
    assert_eq!(a, b);
}

#[test]
fn zero_direction_falls_back_to_the_up_axis() {
    let ground = scaled_cube(Point::origin(), 4.0, 1.0, 4.0);
    let cube = scaled_cube(Point::new(0.0, 1.0, 0.0), 1.0, 1.0, 1.0);

    let guarded = generate_contacts(&cube, &ground, &Vector::zeros());
    let explicit = generate_contacts(&cube, &ground, &Vector::y());

    assert_eq!(sorted_positions(&guarded), sorted_positions(&explicit));
    assert_eq!(guarded.len(), 4);
}

#[test]
fn tolerance_is_configurable() {
    let ground = scaled_cube(Point::origin(), 4.0, 1.0, 4.0);
    // Lifted beyond the default tolerance but inside a looser one.
    let cube = scaled_cube(Point::new(0.0, 1.0 + 1.0e-4, 0.0), 1.0, 1.0, 1.0);

    assert!(generate_contacts(&cube, &ground, &Vector::y()).is_empty());

    let config = ContactConfig { tolerance: 1.0e-3 };
    let sat = IntervalSeparation::new(config.tolerance);
    let contacts = generate_contacts_with(&cube, &ground, &Vector::y(), &config, &sat);
    assert_eq!(contacts.len(), 4);
}

#[test]
fn triangle_resting_on_ground() {
    let ground = scaled_cube(Point::origin(), 4.0, 1.0, 4.0);
    // A thin triangle lying flat on the ground's top face.
    let triangle = Polytope::triangle(
        Point::new(0.0, 0.5, 0.0),
        Point::new(1.0, 0.5, 0.0),
        Point::new(0.0, 0.5, 1.0),
    );

    let contacts = generate_contacts(&triangle, &ground, &Vector::y());

    // At least the three triangle corners rest on the face.
    assert!(contacts.len() >= 3, "{:?}", sorted_positions(&contacts));
    for corner in [
        Point::new(0.0, 0.5, 0.0),
        Point::new(1.0, 0.5, 0.0),
        Point::new(0.0, 0.5, 1.0),
    ] {
        assert!(sorted_positions(&contacts)
            .iter()
            .any(|p| (p - corner).norm() < 1.0e-3));
    }
}
