//! Presentation contract.
//!
//! A text menu, a TUI or a GUI form all do the same four things: gather a
//! polygon, gather an origin, pick the next transform and show the result.
//! [`drive`] runs the session loop against any [`Presenter`].

use log::{debug, warn};

use crate::error::TransformError;
use crate::geometry::{Point, Polygon};
use crate::kernel::Transform;
use crate::session::Session;

/// What the user wants to do next.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Choice {
    Apply(Transform),
    Reset,
    Quit,
}

/// Input and output side of an interactive session.
pub trait Presenter {
    /// Failure of the presenter itself, e.g. a closed input stream.
    /// Must be able to carry a session creation error.
    type Error: From<TransformError>;

    fn collect_polygon(&mut self) -> Result<Vec<Point>, Self::Error>;

    /// Point the transforms are centered on. Presenters without a way to
    /// ask should return [`Point::ORIGIN`].
    fn collect_origin(&mut self) -> Result<Point, Self::Error>;

    fn select_transform(&mut self, current: &Polygon) -> Result<Choice, Self::Error>;

    /// Show a shape before and after a step.
    fn render(&mut self, before: &Polygon, after: &Polygon) -> Result<(), Self::Error>;

    /// Tell the user a choice was rejected. The same prompt follows.
    fn report(&mut self, error: &TransformError) -> Result<(), Self::Error>;
}

/// Run a session until the presenter chooses [`Choice::Quit`].
///
/// Rejected transforms are reported and the session is left unchanged, so
/// the presenter can simply ask again. Returns the finished session.
pub fn drive<P: Presenter>(presenter: &mut P) -> Result<Session, P::Error> {
    let points = presenter.collect_polygon()?;
    let origin = presenter.collect_origin()?;
    let mut session = Session::create(points, origin)?;

    loop {
        match presenter.select_transform(session.current())? {
            Choice::Apply(transform) => match session.apply(&transform) {
                Ok((before, after)) => presenter.render(&before, &after)?,
                Err(e) => {
                    warn!("rejected {}: {}", transform, e);
                    presenter.report(&e)?;
                }
            },
            Choice::Reset => {
                let before = session.current().clone();
                let after = session.reset();
                presenter.render(&before, after)?;
            }
            Choice::Quit => {
                debug!("quit after {} transforms", session.applied_count());
                return Ok(session);
            }
        }
    }
}
