//! Visitation sinks receive every cell a search expands, in expansion order. They are the
//! only place a search yields to its caller: recording the trace for animation, pacing the
//! animation and observing cancellation all happen here.

use crate::error::Cancelled;
use crate::position::Position;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Receives each expanded cell exactly once, at the moment it is closed.
///
/// Returning `Err(Cancelled)` aborts the running search; the engine will not call the sink
/// again and reports [SearchError::Cancelled](crate::error::SearchError::Cancelled).
pub trait VisitationSink {
    fn on_visit(&mut self, position: Position) -> Result<(), Cancelled>;
}

impl<F> VisitationSink for F
where
    F: FnMut(Position) -> Result<(), Cancelled>,
{
    fn on_visit(&mut self, position: Position) -> Result<(), Cancelled> {
        self(position)
    }
}

/// Shared cancellation flag. Clones observe the same flag, so one clone can be handed to
/// a running search while another stays with whoever may abort it.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once [cancel](Self::cancel) has been called on any clone.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Records the visit order of a search.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    order: Vec<Position>,
}

impl TraceRecorder {
    pub fn new() -> TraceRecorder {
        TraceRecorder::default()
    }

    pub fn order(&self) -> &[Position] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<Position> {
        self.order
    }
}

impl VisitationSink for TraceRecorder {
    fn on_visit(&mut self, position: Position) -> Result<(), Cancelled> {
        self.order.push(position);
        Ok(())
    }
}

/// Wraps a sink and waits a fixed delay after each visit, so that an animation can follow
/// the search. The wait is spent in short slices and ends early if the token is cancelled.
#[derive(Debug)]
pub struct Paced<S> {
    inner: S,
    delay: Option<Duration>,
    cancel: CancellationToken,
}

const PACING_SLICE: Duration = Duration::from_millis(10);

impl<S: VisitationSink> Paced<S> {
    /// A delay of [None] forwards visits without waiting.
    pub fn new(inner: S, delay: Option<Duration>, cancel: CancellationToken) -> Paced<S> {
        Paced {
            inner,
            delay,
            cancel,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: VisitationSink> VisitationSink for Paced<S> {
    fn on_visit(&mut self, position: Position) -> Result<(), Cancelled> {
        self.inner.on_visit(position)?;
        if let Some(delay) = self.delay {
            let mut remaining = delay;
            while !remaining.is_zero() {
                self.cancel.check()?;
                let slice = remaining.min(PACING_SLICE);
                std::thread::sleep(slice);
                remaining -= slice;
            }
        }
        Ok(())
    }
}

/// Engine-side wrapper around a sink. Checks the token before and after every sink call
/// and counts expansions. Only built by [GridSolver::search](crate::solver::GridSolver::search).
pub struct Tracer<'a, S: VisitationSink + ?Sized> {
    sink: &'a mut S,
    cancel: &'a CancellationToken,
    expanded: usize,
}

impl<'a, S: VisitationSink + ?Sized> Tracer<'a, S> {
    pub(crate) fn new(sink: &'a mut S, cancel: &'a CancellationToken) -> Tracer<'a, S> {
        Tracer {
            sink,
            cancel,
            expanded: 0,
        }
    }

    /// Reports `position` as expanded.
    pub fn visit(&mut self, position: Position) -> Result<(), Cancelled> {
        if let Err(e) = self
            .cancel
            .check()
            .and_then(|_| self.sink.on_visit(position))
            .and_then(|_| self.cancel.check())
        {
            debug!("Cancelled after {} expansions", self.expanded);
            return Err(e);
        }
        self.expanded += 1;
        Ok(())
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_state() {
        let token = CancellationToken::new();
        let other = token.clone();
        assert!(token.check().is_ok());
        other.cancel();
        assert!(token.is_cancelled());
        assert_eq!(token.check(), Err(Cancelled));
    }

    #[test]
    fn tracer_skips_sink_once_cancelled() {
        let token = CancellationToken::new();
        let mut recorder = TraceRecorder::new();
        let mut tracer = Tracer::new(&mut recorder, &token);
        tracer.visit(Position::new(0, 0)).unwrap();
        token.cancel();
        assert_eq!(tracer.visit(Position::new(0, 1)), Err(Cancelled));
        assert_eq!(tracer.expanded(), 1);
        assert_eq!(recorder.order(), &[Position::new(0, 0)]);
    }

    #[test]
    fn cancellation_during_sink_call_is_reported() {
        let token = CancellationToken::new();
        let inner = token.clone();
        let mut sink = move |_: Position| -> Result<(), Cancelled> {
            inner.cancel();
            Ok(())
        };
        let mut tracer = Tracer::new(&mut sink, &token);
        assert_eq!(tracer.visit(Position::new(0, 0)), Err(Cancelled));
    }

    #[test]
    fn paced_sink_stops_waiting_when_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let mut paced = Paced::new(
            TraceRecorder::new(),
            Some(Duration::from_secs(60)),
            token.clone(),
        );
        assert_eq!(paced.on_visit(Position::new(1, 1)), Err(Cancelled));
        assert_eq!(paced.inner().len(), 1);
    }
}
