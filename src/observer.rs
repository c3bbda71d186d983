use log::{debug, info};

use crate::solver::right_hand::{Action, NavigatorState};

/// Receives a synchronous notification after every applied action. Closures taking
/// `(Action, &NavigatorState)` implement this directly.
pub trait StepObserver {
    fn on_step(&mut self, action: Action, state: &NavigatorState);

    /// Called once when the exit has been reached.
    fn on_finish(&mut self, _state: &NavigatorState) {}
}

impl<F> StepObserver for F
where
    F: FnMut(Action, &NavigatorState),
{
    fn on_step(&mut self, action: Action, state: &NavigatorState) {
        self(action, state)
    }
}

/// Forwards every step to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl StepObserver for LogObserver {
    fn on_step(&mut self, action: Action, state: &NavigatorState) {
        debug!(
            "{} Now at {} facing {}",
            action.describe(),
            state.position(),
            state.orientation()
        );
    }
    fn on_finish(&mut self, state: &NavigatorState) {
        info!(
            "Maze successfully solved in {} steps",
            state.recorder().len()
        );
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _: Action, _: &NavigatorState) {}
}
