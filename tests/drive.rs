use std::collections::VecDeque;

use polyxform::{
    drive, Choice, Point, Polygon, Presenter, ReflectionMode, Transform, TransformError,
};

#[derive(Default)]
struct Scripted {
    polygon: Vec<Point>,
    origin: Point,
    choices: VecDeque<Choice>,
    prompts: usize,
    rendered: Vec<(Polygon, Polygon)>,
    reported: Vec<TransformError>,
}

impl Scripted {
    fn new(polygon: &[(f64, f64)], origin: Point, choices: Vec<Choice>) -> Self {
        Self {
            polygon: polygon.iter().copied().map(Point::from).collect(),
            origin,
            choices: choices.into(),
            ..Default::default()
        }
    }
}

impl Presenter for Scripted {
    type Error = TransformError;

    fn collect_polygon(&mut self) -> Result<Vec<Point>, TransformError> {
        Ok(self.polygon.clone())
    }

    fn collect_origin(&mut self) -> Result<Point, TransformError> {
        Ok(self.origin)
    }

    fn select_transform(&mut self, _current: &Polygon) -> Result<Choice, TransformError> {
        self.prompts += 1;
        Ok(self.choices.pop_front().unwrap_or(Choice::Quit))
    }

    fn render(&mut self, before: &Polygon, after: &Polygon) -> Result<(), TransformError> {
        self.rendered.push((before.clone(), after.clone()));
        Ok(())
    }

    fn report(&mut self, error: &TransformError) -> Result<(), TransformError> {
        self.reported.push(error.clone());
        Ok(())
    }
}

#[test]
fn test_drive_applies_in_sequence() {
    let mut p = Scripted::new(
        &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)],
        Point::ORIGIN,
        vec![
            Choice::Apply(Transform::Reflection { mode: ReflectionMode::AxisX, slope: None }),
            Choice::Apply(Transform::Scale { kx: 2.0, ky: 3.0 }),
            Choice::Quit,
        ],
    );
    let session = drive(&mut p).unwrap();

    assert_eq!(p.rendered.len(), 2);
    assert_eq!(
        p.rendered[0].1,
        Polygon::new([(0.0, 0.0), (2.0, 0.0), (2.0, -2.0)]).unwrap()
    );
    assert_eq!(p.rendered[1].0, p.rendered[0].1);
    assert_eq!(
        session.current(),
        &Polygon::new([(0.0, 0.0), (4.0, 0.0), (4.0, -6.0)]).unwrap()
    );
    assert!(p.reported.is_empty());
}

#[test]
fn test_drive_reports_and_reprompts() {
    let mut p = Scripted::new(
        &[(1.0, 0.0), (0.0, 1.0)],
        Point::ORIGIN,
        vec![
            Choice::Apply(Transform::Scale { kx: 0.0, ky: 1.0 }),
            Choice::Apply(Transform::Reflection { mode: ReflectionMode::LineSlope, slope: None }),
            Choice::Apply(Transform::Reflection { mode: ReflectionMode::LineSlope, slope: Some(1.0) }),
        ],
    );
    let session = drive(&mut p).unwrap();

    assert_eq!(p.reported.len(), 2);
    assert!(p
        .reported
        .iter()
        .all(|e| matches!(e, TransformError::InvalidParameter(_))));
    assert_eq!(p.rendered.len(), 1);
    assert_eq!(session.applied_count(), 1);
    // three choices plus the implicit quit
    assert_eq!(p.prompts, 4);
    let swapped = Polygon::new([(0.0, 1.0), (1.0, 0.0)]).unwrap();
    assert!(session.current().almost_equals(&swapped, Some(1e-12)));
}

#[test]
fn test_drive_reset_renders_original() {
    let square = [(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)];
    let mut p = Scripted::new(
        &square,
        Point::new(3.0, 3.0),
        vec![
            Choice::Apply(Transform::Rotation { angle_degrees: 90.0 }),
            Choice::Apply(Transform::Rotation { angle_degrees: 45.0 }),
            Choice::Reset,
        ],
    );
    let session = drive(&mut p).unwrap();

    let original = Polygon::new(square).unwrap();
    assert_eq!(p.rendered.len(), 3);
    assert_eq!(p.rendered[2].0, p.rendered[1].1);
    assert_eq!(p.rendered[2].1, original);
    assert_eq!(session.current(), &original);
}

#[test]
fn test_drive_rejects_short_polygon() {
    let mut p = Scripted::new(&[(1.0, 1.0)], Point::ORIGIN, vec![]);
    assert!(matches!(drive(&mut p), Err(TransformError::InvalidParameter(_))));
    assert_eq!(p.prompts, 0);
}
