// A simple priority-based job scheduler for cooperative multitasking
// NOTE: No dynamic allocation and uses fixed-size queues
//
// Priorities encode the per-tick order: read the keypad, then advance
// the automaton, then draw. Draining high-first keeps that order even
// when several jobs are queued by one wake.
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    PollInput,
    Step,
    Render,
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Job::PollInput => write!(f, "PollInput"),
            Job::Step => write!(f, "Step"),
            Job::Render => write!(f, "Render"),
        }
    }
}

/// Job priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High = 0,
    Normal = 1,
    Low = 2,
}

impl Job {
    pub const fn priority(&self) -> Priority {
        match self {
            Job::PollInput => Priority::High,
            Job::Step => Priority::Normal,
            Job::Render => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    /// Queue for this priority level is full, contains the rejected job
    Full(Job),
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(job) => write!(f, "queue full, rejected {}", job),
        }
    }
}

// ring buffer for jobs
pub struct JobQueue<const N: usize> {
    buf: [Option<Job>; N],
    head: usize, // next to read
    tail: usize, // next to write
    len: usize,
}

impl<const N: usize> JobQueue<N> {
    pub const fn new() -> Self {
        Self {
            buf: [None; N],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, job: Job) -> Result<(), Job> {
        if self.len >= N {
            return Err(job);
        }
        self.buf[self.tail] = Some(job);
        self.tail = (self.tail + 1) % N;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Job> {
        if self.len == 0 {
            return None;
        }
        let job = self.buf[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        job
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, job: &Job) -> bool {
        let mut i = self.head;
        for _ in 0..self.len {
            if self.buf[i].as_ref() == Some(job) {
                return true;
            }
            i = (i + 1) % N;
        }
        false
    }
}

impl<const N: usize> Default for JobQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

// One slot per tier is enough while every job is pushed with push_unique.
pub struct Scheduler {
    high: JobQueue<2>,
    normal: JobQueue<2>,
    low: JobQueue<2>,
}

impl Scheduler {
    pub const fn new() -> Self {
        Self {
            high: JobQueue::new(),
            normal: JobQueue::new(),
            low: JobQueue::new(),
        }
    }

    // push a job and returns error with the job if queue is full
    pub fn push(&mut self, job: Job) -> Result<(), PushError> {
        let result = match job.priority() {
            Priority::High => self.high.push(job),
            Priority::Normal => self.normal.push(job),
            Priority::Low => self.low.push(job),
        };
        result.map_err(PushError::Full)
    }

    // Schedule a job only if it's not already queued (dedup that queue).
    pub fn push_unique(&mut self, job: Job) -> Result<(), PushError> {
        let queued = match job.priority() {
            Priority::High => self.high.contains(&job),
            Priority::Normal => self.normal.contains(&job),
            Priority::Low => self.low.contains(&job),
        };
        if queued {
            return Ok(());
        }
        self.push(job)
    }

    // the next job to execute
    pub fn pop(&mut self) -> Option<Job> {
        self.high
            .pop()
            .or_else(|| self.normal.pop())
            .or_else(|| self.low.pop())
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.normal.is_empty() && self.low.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.high.len() + self.normal.len() + self.low.len()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_tick_order_regardless_of_push_order() {
        let mut sched = Scheduler::new();
        sched.push(Job::Render).unwrap();
        sched.push(Job::Step).unwrap();
        sched.push(Job::PollInput).unwrap();
        assert_eq!(sched.pending(), 3);

        assert_eq!(sched.pop(), Some(Job::PollInput));
        assert_eq!(sched.pop(), Some(Job::Step));
        assert_eq!(sched.pop(), Some(Job::Render));
        assert_eq!(sched.pop(), None);
        assert!(sched.is_empty());
    }

    #[test]
    fn push_unique_dedups() {
        let mut sched = Scheduler::new();
        for _ in 0..5 {
            sched.push_unique(Job::Render).unwrap();
        }
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn full_tier_rejects_with_job() {
        let mut sched = Scheduler::new();
        sched.push(Job::Step).unwrap();
        sched.push(Job::Step).unwrap();
        assert_eq!(sched.push(Job::Step), Err(PushError::Full(Job::Step)));
        // other tiers unaffected
        assert!(sched.push(Job::PollInput).is_ok());
    }

    #[test]
    fn ring_buffer_wraps() {
        let mut q: JobQueue<2> = JobQueue::new();
        for _ in 0..3 {
            q.push(Job::Step).unwrap();
            q.push(Job::Render).unwrap();
            assert!(q.contains(&Job::Render));
            assert_eq!(q.pop(), Some(Job::Step));
            assert_eq!(q.pop(), Some(Job::Render));
            assert!(!q.contains(&Job::Render));
        }
        assert!(q.is_empty());
    }
}
