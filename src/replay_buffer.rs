use log::trace;
use ndarray::Array1;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{QHiveError, Result};

/// One environment transition. Never mutated once stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub state: Array1<f64>,
    pub action: usize,
    pub reward: f64,
    pub next_state: Array1<f64>,
    pub done: bool,
}

impl Experience {
    pub fn new(state: Array1<f64>, action: usize, reward: f64, next_state: Array1<f64>, done: bool) -> Self {
        Experience {
            state,
            action,
            reward,
            next_state,
            done,
        }
    }
}

/// Bounded FIFO store of experiences that any number of agents may write to
/// and sample from concurrently.
///
/// The buffer lives behind a single mutex. Evicting the oldest entry and
/// appending the new one happen under one lock acquisition, so `len()` never
/// exceeds `capacity()`, not even transiently. Samples hand out shared
/// [`Arc`] handles, so sampling never copies state vectors.
///
/// # Example
///
/// ```
/// use qhive::replay_buffer::ReplayBuffer;
/// use ndarray::array;
/// use rand::{rngs::StdRng, SeedableRng};
/// use std::sync::Arc;
///
/// let buffer = Arc::new(ReplayBuffer::new(3));
/// for i in 0..4 {
///     buffer.add(array![i as f64], 0, 1.0, array![i as f64 + 1.0], false);
/// }
/// assert_eq!(buffer.len(), 3);
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let batch = buffer.sample(8, &mut rng).unwrap();
/// assert_eq!(batch.len(), 8);
/// ```
#[derive(Debug)]
pub struct ReplayBuffer {
    buffer: Mutex<VecDeque<Arc<Experience>>>,
    capacity: usize,
}

impl ReplayBuffer {
    /// Create a buffer holding at most `capacity` experiences. A zero-capacity
    /// buffer silently drops everything; use
    /// [`crate::builders::ReplayBufferBuilder`] to reject it instead.
    pub fn new(capacity: usize) -> Self {
        ReplayBuffer {
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    // Every critical section leaves the deque consistent, so a panic in
    // another holder does not invalidate the contents.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Arc<Experience>>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `experience`, evicting the oldest entry first when full.
    pub fn add_experience(&self, experience: Experience) {
        if self.capacity == 0 {
            return;
        }
        let experience = Arc::new(experience);
        let mut buffer = self.lock();
        while buffer.len() >= self.capacity {
            buffer.pop_front();
            trace!("replay buffer full at {}, evicted oldest experience", self.capacity);
        }
        buffer.push_back(experience);
    }

    /// Convenience wrapper around [`ReplayBuffer::add_experience`].
    pub fn add(&self, state: Array1<f64>, action: usize, reward: f64, next_state: Array1<f64>, done: bool) {
        self.add_experience(Experience::new(state, action, reward, next_state, done));
    }

    /// Draw `batch_size` experiences independently and uniformly, with
    /// replacement, from the contents at the time of the call.
    ///
    /// Fails with [`QHiveError::EmptyBuffer`] when the buffer is empty and
    /// `batch_size > 0`.
    pub fn sample<R: Rng + ?Sized>(&self, batch_size: usize, rng: &mut R) -> Result<Vec<Arc<Experience>>> {
        if batch_size == 0 {
            return Ok(Vec::new());
        }
        let buffer = self.lock();
        if buffer.is_empty() {
            return Err(QHiveError::EmptyBuffer(format!(
                "cannot sample {} experiences from an empty replay buffer",
                batch_size
            )));
        }
        Ok((0..batch_size)
            .map(|_| Arc::clone(&buffer[rng.gen_range(0..buffer.len())]))
            .collect())
    }

    /// Ordered copy of the current handles, oldest first.
    pub fn snapshot(&self) -> Vec<Arc<Experience>> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
