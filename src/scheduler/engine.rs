//! Policy engines.
//!
//! # Algorithm
//!
//! Every engine shares one loop shape over an arrival-ordered copy of the
//! workload:
//!
//! 1. Admit every process whose arrival time ≤ the clock.
//! 2. If nothing is ready but processes remain, jump the clock to the
//!    next arrival and retry.
//! 3. Select the next entry per the policy's discipline.
//! 4. Run it for the policy's duration and advance the clock.
//! 5. Emit a completion record when remaining time hits zero,
//!    otherwise re-insert the shortened entry.
//!
//! | Policy | Run per dispatch | Discipline |
//! |--------|------------------|------------|
//! | FCFS | full burst | arrival pre-sort |
//! | SJF | full burst | shortest burst |
//! | LJF | full burst | longest burst |
//! | SRTF | `min(slice, remaining)` | shortest remaining |
//! | RR | `min(quantum, remaining)` | strict FIFO |
//!
//! For preemptive policies, processes arriving during a slice are admitted
//! before the preempted entry is re-inserted.

use serde::{Deserialize, Serialize};

use super::{Policy, PolicyMetrics};
use crate::dispatching::rules::{ArrivalOrder, LongestBurst, ShortestBurst, ShortestRemaining};
use crate::dispatching::{order_by, FifoQueue, ReadyEntry, ReadyQueue, RuleQueue, TieBreaker};
use crate::error::SimError;
use crate::models::{CompletionRecord, ExecutionSegment, Process, Timeline, Workload};
use crate::validation::{check_positive, ValidationResult};

/// Remaining time at or below this counts as finished.
const REMAINING_EPSILON: f64 = 1e-9;

/// Simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round-Robin time quantum.
    pub quantum: f64,
    /// SRTF preemption granularity.
    pub srtf_slice: f64,
    /// Ordering among equal-priority ready entries.
    pub tie_breaker: TieBreaker,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: 2.0,
            srtf_slice: 1.0,
            tie_breaker: TieBreaker::default(),
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration (quantum 2, SRTF slice 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the SRTF slice.
    pub fn with_srtf_slice(mut self, slice: f64) -> Self {
        self.srtf_slice = slice;
        self
    }

    /// Sets the tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Checks that both time slices are positive and finite.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        check_positive("quantum", self.quantum, &mut errors);
        check_positive("srtf_slice", self.srtf_slice, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Result of running one policy over a workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRun {
    /// Policy that produced this run.
    pub policy: Policy,
    /// Segments in the order they ran.
    pub timeline: Timeline,
    /// One record per process, in completion order.
    pub completions: Vec<CompletionRecord>,
}

impl PolicyRun {
    /// Aggregated metrics, including response times from the timeline.
    pub fn metrics(&self) -> PolicyMetrics {
        PolicyMetrics::calculate(&self.completions).with_response_times(&self.timeline)
    }
}

/// Clock and admission cursor for one engine invocation.
struct RunState<'a> {
    now: f64,
    cursor: usize,
    pending: &'a [Process],
}

impl<'a> RunState<'a> {
    fn new(pending: &'a [Process]) -> Self {
        Self {
            now: pending.first().map_or(0.0, |p| p.arrival),
            cursor: 0,
            pending,
        }
    }

    /// Moves every arrived process into the ready structure.
    fn admit<Q: ReadyQueue>(&mut self, queue: &mut Q) {
        while let Some(p) = self.pending.get(self.cursor) {
            if p.arrival > self.now {
                break;
            }
            queue.push(ReadyEntry::new(p));
            self.cursor += 1;
        }
    }

    /// Jumps the clock to the next arrival. Returns `false` when none remain.
    fn skip_to_next_arrival(&mut self) -> bool {
        match self.pending.get(self.cursor) {
            Some(p) => {
                log::debug!("CPU idle from {} to {}", self.now, p.arrival);
                self.now = p.arrival;
                true
            }
            None => false,
        }
    }
}

/// Runs the five dispatch policies over a workload.
///
/// Each run gets its own arrival-ordered copy of the workload and its own
/// ready structure; no state is shared between runs.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Workload;
/// use u_cpusched::scheduler::{Policy, Simulator};
///
/// let workload = Workload::from_triples(&[(1, 0.0, 8.0), (2, 1.0, 4.0)]).unwrap();
/// let run = Simulator::default().run(Policy::Srtf, &workload);
/// let spans = run.timeline.spans();
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[1].process_id.get(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator, validating the configuration.
    ///
    /// # Errors
    /// [`SimError::InvalidConfig`] if a time slice is not positive and finite.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate().map_err(SimError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one policy.
    pub fn run(&self, policy: Policy, workload: &Workload) -> PolicyRun {
        let processes = workload.arrival_sorted();
        let tie = self.config.tie_breaker;

        let run = match policy {
            Policy::Fcfs => self.run_fcfs(&processes),
            Policy::Sjf => {
                Self::run_to_completion(policy, &processes, RuleQueue::new(ShortestBurst, tie))
            }
            Policy::Ljf => {
                Self::run_to_completion(policy, &processes, RuleQueue::new(LongestBurst, tie))
            }
            Policy::Srtf => Self::run_sliced(
                policy,
                &processes,
                RuleQueue::new(ShortestRemaining, tie),
                self.config.srtf_slice,
            ),
            Policy::RoundRobin => {
                Self::run_sliced(policy, &processes, FifoQueue::new(), self.config.quantum)
            }
        };

        log::debug!(
            "{}: {} segments, {} completions, makespan {}",
            policy,
            run.timeline.len(),
            run.completions.len(),
            run.timeline.makespan()
        );
        run
    }

    /// Runs all policies in reporting order.
    pub fn run_all(&self, workload: &Workload) -> Vec<PolicyRun> {
        Policy::ALL
            .iter()
            .map(|&policy| self.run(policy, workload))
            .collect()
    }

    /// FCFS: strict arrival order, no ready-queue contention.
    fn run_fcfs(&self, processes: &[Process]) -> PolicyRun {
        let mut entries: Vec<ReadyEntry> = processes.iter().map(ReadyEntry::new).collect();
        order_by(&ArrivalOrder, self.config.tie_breaker, &mut entries);

        let mut timeline = Timeline::new();
        let mut completions = Vec::with_capacity(entries.len());
        let mut now = entries.first().map_or(0.0, |e| e.arrival);

        for entry in &entries {
            if now < entry.arrival {
                log::debug!("CPU idle from {} to {}", now, entry.arrival);
                now = entry.arrival;
            }
            let process = entry.process();
            log::trace!("FCFS dispatch {} at {}", process.id, now);
            timeline.push(ExecutionSegment::new(&process, now, process.burst));
            now += process.burst;
            completions.push(CompletionRecord::new(&process, now));
        }

        PolicyRun {
            policy: Policy::Fcfs,
            timeline,
            completions,
        }
    }

    /// SJF / LJF: each dispatch runs the whole burst.
    fn run_to_completion<Q: ReadyQueue>(
        policy: Policy,
        processes: &[Process],
        mut queue: Q,
    ) -> PolicyRun {
        let mut state = RunState::new(processes);
        let mut timeline = Timeline::new();
        let mut completions = Vec::with_capacity(processes.len());

        loop {
            state.admit(&mut queue);
            let Some(entry) = queue.pop() else {
                if state.skip_to_next_arrival() {
                    continue;
                }
                break;
            };

            let process = entry.process();
            log::trace!("{} dispatch {} at {}", policy, process.id, state.now);
            timeline.push(ExecutionSegment::new(&process, state.now, entry.remaining));
            state.now += entry.remaining;
            completions.push(CompletionRecord::new(&process, state.now));
        }

        PolicyRun {
            policy,
            timeline,
            completions,
        }
    }

    /// SRTF / RR: each dispatch runs at most one slice.
    fn run_sliced<Q: ReadyQueue>(
        policy: Policy,
        processes: &[Process],
        mut queue: Q,
        slice: f64,
    ) -> PolicyRun {
        let mut state = RunState::new(processes);
        let mut timeline = Timeline::new();
        let mut completions = Vec::with_capacity(processes.len());

        loop {
            state.admit(&mut queue);
            let Some(entry) = queue.pop() else {
                if state.skip_to_next_arrival() {
                    continue;
                }
                break;
            };

            // A remainder within epsilon of the slice finishes in this dispatch.
            let ran = if entry.remaining - slice <= REMAINING_EPSILON {
                entry.remaining
            } else {
                slice
            };

            let process = entry.process();
            log::trace!(
                "{} dispatch {} at {} for {}",
                policy,
                process.id,
                state.now,
                ran
            );
            timeline.push(ExecutionSegment::new(&process, state.now, ran));
            state.now += ran;

            state.admit(&mut queue);

            let rest = entry.after_running(ran);
            if rest.remaining <= REMAINING_EPSILON {
                completions.push(CompletionRecord::new(&process, state.now));
            } else {
                queue.push(rest);
            }
        }

        PolicyRun {
            policy,
            timeline,
            completions,
        }
    }
}
