use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::*;

use crate::error::{CyclicCounterError, CyclicCounterResult};

/// Bound assigned to counters created via [CyclicCounter::new].
pub const DEFAULT_MAX_VALUE: isize = isize::MAX;

// -----------------
// CyclicCounterSnapshot
// -----------------
/// The value and bound of a [CyclicCounter] read under the same lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicCounterSnapshot {
    pub value: isize,
    pub max_value: isize,
}

#[derive(Debug)]
struct CounterState {
    value: isize,
    max_value: isize,
}

// -----------------
// CyclicCounter
// -----------------
/// Counter which steps up by one until it reaches its max value.
/// The increment following that resets it to zero.
///
/// The value and its bound are guarded together by one [RwLock], so readers
/// never see a value that exceeds the bound, even while the bound is being
/// lowered.
#[derive(Debug)]
pub struct CyclicCounter {
    state: RwLock<CounterState>,
}

impl CyclicCounter {
    /// Creates a counter starting at zero and bounded by [DEFAULT_MAX_VALUE].
    pub fn new() -> Self {
        Self::with_state(DEFAULT_MAX_VALUE)
    }

    /// Creates a counter starting at zero and bounded by `max_value`.
    /// - *max_value* inclusive upper bound, must not be negative
    /// - *returns* [CyclicCounterError::InvalidBound] if it is negative
    pub fn with_max_value(max_value: isize) -> CyclicCounterResult<Self> {
        ensure_valid_bound(max_value)?;
        Ok(Self::with_state(max_value))
    }

    fn with_state(max_value: isize) -> Self {
        Self {
            state: RwLock::new(CounterState {
                value: 0,
                max_value,
            }),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<CounterState> {
        self.state
            .read()
            .expect("RwLock of CyclicCounter.state is poisoned")
    }

    fn write_state(&self) -> RwLockWriteGuard<CounterState> {
        self.state
            .write()
            .expect("RwLock of CyclicCounter.state is poisoned")
    }

    pub fn value(&self) -> isize {
        self.read_state().value
    }

    pub fn max_value(&self) -> isize {
        self.read_state().max_value
    }

    pub fn snapshot(&self) -> CyclicCounterSnapshot {
        let state = self.read_state();
        CyclicCounterSnapshot {
            value: state.value,
            max_value: state.max_value,
        }
    }

    /// Steps the counter up by one, or back to zero once the max value
    /// was reached.
    pub fn increment(&self) {
        let wrapped_at = {
            let mut state = self.write_state();
            if state.value < state.max_value {
                state.value += 1;
                None
            } else {
                state.value = 0;
                Some(state.max_value)
            }
        };
        // Logged after the guard is released to keep the write lock short
        if let Some(max_value) = wrapped_at {
            trace!("Counter reached max value {}, wrapping", max_value);
        }
    }

    /// Changes the bound of the counter.
    /// If the current value exceeds the new bound it is reset to zero as part
    /// of the same update.
    /// - *max_value* new inclusive upper bound, must not be negative
    /// - *returns* [CyclicCounterError::InvalidBound] if it is negative, in
    ///   which case the counter is left untouched
    pub fn set_max_value(&self, max_value: isize) -> CyclicCounterResult<()> {
        ensure_valid_bound(max_value)?;

        let reset_value = {
            let mut state = self.write_state();
            state.max_value = max_value;
            if state.value > max_value {
                Some(std::mem::replace(&mut state.value, 0))
            } else {
                None
            }
        };
        if let Some(value) = reset_value {
            debug!(
                "Value {} exceeds new max value {}, resetting to zero",
                value, max_value
            );
        }
        Ok(())
    }
}

impl Default for CyclicCounter {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_valid_bound(max_value: isize) -> CyclicCounterResult<()> {
    if max_value < 0 {
        debug!("Rejecting negative max value {}", max_value);
        return Err(CyclicCounterError::InvalidBound(max_value));
    }
    Ok(())
}
