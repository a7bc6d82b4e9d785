/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::IterationSummary;

/// Receives the summary of every completed iteration.
///
/// Observers cannot stop a solve; that is up to the termination criteria.
pub trait Observer {
    fn observe(&mut self, summary: &IterationSummary);
}

impl<F> Observer for F
where F: FnMut(&IterationSummary),
{
    fn observe(&mut self, summary: &IterationSummary) { self(summary) }
}

impl Observer for () {
    fn observe(&mut self, _: &IterationSummary) {}
}

impl<A: Observer, B: Observer> Observer for (A, B) {
    fn observe(&mut self, summary: &IterationSummary) {
        self.0.observe(summary);
        self.1.observe(summary);
    }
}

impl Observer for Vec<Box<dyn Observer>> {
    fn observe(&mut self, summary: &IterationSummary) {
        for observer in self {
            observer.observe(summary);
        }
    }
}

/// Records the full history.
impl Observer for Vec<IterationSummary> {
    fn observe(&mut self, summary: &IterationSummary) { self.push(summary.clone()) }
}

/// Writes each summary as a line at `info` level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&mut self, summary: &IterationSummary) { info!("{}", summary) }
}
