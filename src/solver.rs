//! Greedy best-first search over board fingerprints.
//!
//! The frontier is ordered by heuristic value alone and a board is never
//! queued twice: once its fingerprint is in the closed map, later and
//! possibly shorter routes to it are ignored. The search stops as soon as
//! the cheapest frontier entry is the goal. Paths are therefore not
//! guaranteed to be the shortest ones; this is the intended policy and it
//! keeps memory bounded by the boards actually discovered.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::path::PathBuf;
use std::sync::atomic::{self, AtomicBool};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};
use rand::Rng;

use crate::codec::{self, Code};
use crate::config::SolveConfig;
use crate::error::{PuzzleError, Result};
use crate::generator::{is_solvable, Generator};
use crate::heuristic::heuristic;
use crate::path::{reverse_solution, ClosedMap};
use crate::presentation::{write_snapshot, Presenter};
use crate::puzzle::{Board, Move};

const PROGRESS_EVERY: u64 = 10_000;

/// A discovered board waiting to be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    heuristic: u32,
    seq: u64,
    code: Code,
}

/// Customized Ord for min-heap: lowest heuristic first, then oldest.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .heuristic
            .cmp(&self.heuristic)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Expanding,
    Done,
}

/// Outcome of a single [`Solver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Expanded,
    Found(Code),
}

/// Counters for one search. After cleanup every pushed entry has been
/// either expanded or drained.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub pushed: u64,
    pub expanded: u64,
    pub drained: u64,
    pub duplicates: u64,
    pub off_grid: u64,
    pub peak_frontier: usize,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub steps: usize,
    /// Start board first, goal board last.
    pub path: Vec<Board>,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

impl Solution {
    pub fn start(&self) -> &Board {
        &self.path[0]
    }

    pub fn goal(&self) -> &Board {
        &self.path[self.path.len() - 1]
    }

    /// Blank moves that replay the path.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| Move::between(pair[0].blank(), pair[1].blank()))
            .collect()
    }
}

pub struct Solver {
    size: usize,
    open: BinaryHeap<Entry>,
    closed: ClosedMap,
    phase: Phase,
    stats: SearchStats,
    next_seq: u64,
    cancel: Option<Arc<AtomicBool>>,
    expansion_limit: Option<u64>,
    snapshot: Option<(PathBuf, u64)>,
}

impl Solver {
    pub fn new(size: usize) -> Result<Self> {
        if !codec::supports(size) {
            return Err(PuzzleError::UnsupportedSize(size));
        }

        Ok(Self {
            size,
            open: BinaryHeap::new(),
            closed: ClosedMap::new(),
            phase: Phase::Initializing,
            stats: SearchStats::default(),
            next_seq: 0,
            cancel: None,
            expansion_limit: None,
            snapshot: None,
        })
    }

    pub fn from_config(config: &SolveConfig) -> Result<Self> {
        config.validate()?;
        let mut solver = Self::new(config.size)?;
        solver.expansion_limit = config.expansion_limit;
        if let Some(path) = &config.snapshot_path {
            solver.snapshot = Some((path.clone(), config.snapshot_interval));
        }
        Ok(solver)
    }

    /// The flag is polled between expansions; setting it stops the search.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn with_expansion_limit(mut self, limit: u64) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn with_snapshot(mut self, path: PathBuf, interval: u64) -> Self {
        self.snapshot = Some((path, interval.max(1)));
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed(&self) -> &ClosedMap {
        &self.closed
    }

    /// Clears any previous search and seeds the frontier with `start`.
    pub fn begin(&mut self, start: &Board) -> Result<()> {
        self.phase = Phase::Initializing;
        if start.size() != self.size {
            return Err(PuzzleError::InvalidBoard(format!(
                "expected side {}, got side {}",
                self.size,
                start.size()
            )));
        }
        if !is_solvable(start) {
            return Err(PuzzleError::Unsolvable);
        }

        self.cleanup();
        self.stats = SearchStats::default();
        self.next_seq = 0;
        self.push(start, None);
        self.phase = Phase::Expanding;
        Ok(())
    }

    /// One round of the expansion loop: stop if the best entry is the goal,
    /// otherwise expand it.
    pub fn step(&mut self) -> Result<Step> {
        let top = *self.open.peek().ok_or(PuzzleError::FrontierExhausted)?;
        if top.heuristic == 0 {
            self.phase = Phase::Done;
            return Ok(Step::Found(top.code));
        }

        self.open.pop();
        self.stats.expanded += 1;

        let board = codec::decode(top.code, self.size);
        trace!("expanding {:#x} (h = {})", top.code, top.heuristic);
        self.write_snapshot(&board);

        let mut produced = 0;
        for (_, next) in board.neighbors() {
            produced += 1;
            if self.closed.contains_key(&codec::encode(&next)) {
                self.stats.duplicates += 1;
            } else {
                self.push(&next, Some(top.code));
            }
        }
        self.stats.off_grid += (Move::ALL.len() - produced) as u64;

        Ok(Step::Expanded)
    }

    /// Runs a whole search from `start`. The frontier and closed map are
    /// empty again when this returns, whatever the outcome.
    pub fn search(&mut self, start: &Board) -> Result<Solution> {
        let started = Instant::now();
        self.begin(start)?;
        debug!("searching from h = {}:\n{}", heuristic(start), start);

        let outcome = self.run();
        let elapsed = started.elapsed();
        let result = outcome.and_then(|goal| reverse_solution(goal, &self.closed, self.size));
        self.cleanup();

        let (steps, path) = result?;
        info!(
            "solved in {} steps ({} expanded, {} discovered) in {:.5}s",
            steps,
            self.stats.expanded,
            self.stats.pushed,
            elapsed.as_secs_f64()
        );

        Ok(Solution { steps, path, elapsed, stats: self.stats })
    }

    /// Drops every frontier entry and forgets the closed map.
    pub fn cleanup(&mut self) {
        self.stats.drained += self.open.len() as u64;
        self.open.clear();
        self.closed.clear();
    }

    fn run(&mut self) -> Result<Code> {
        loop {
            if self.cancelled() {
                warn!("search cancelled after {} expansions", self.stats.expanded);
                return Err(PuzzleError::Cancelled(self.stats.expanded));
            }
            if let Some(limit) = self.expansion_limit {
                let goal_on_top = self.open.peek().is_some_and(|e| e.heuristic == 0);
                if self.stats.expanded >= limit && !goal_on_top {
                    return Err(PuzzleError::ExpansionLimit(limit));
                }
            }

            match self.step()? {
                Step::Found(code) => return Ok(code),
                Step::Expanded => {
                    if self.stats.expanded % PROGRESS_EVERY == 0 {
                        debug!(
                            "{} expanded, frontier {}, closed {}",
                            self.stats.expanded,
                            self.open.len(),
                            self.closed.len()
                        );
                    }
                }
            }
        }
    }

    fn push(&mut self, board: &Board, parent: Option<Code>) {
        let code = codec::encode(board);
        self.open.push(Entry {
            heuristic: heuristic(board),
            seq: self.next_seq,
            code,
        });
        self.closed.insert(code, parent);

        self.next_seq += 1;
        self.stats.pushed += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.open.len());
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(atomic::Ordering::Relaxed))
    }

    fn write_snapshot(&self, board: &Board) {
        if let Some((path, interval)) = &self.snapshot {
            if self.stats.expanded % interval == 0 {
                if let Err(e) = write_snapshot(board, path) {
                    warn!("could not write snapshot to {}: {}", path.display(), e);
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolveReport {
    pub steps: usize,
    pub elapsed_secs: f64,
    pub solution: Solution,
}

/// Generates a solvable board of `config.size`, solves it, and hands the
/// path to `presenter` when `config.animate` is set.
pub fn solve<R, P>(config: &SolveConfig, generator: &mut Generator<R>, presenter: &mut P) -> Result<SolveReport>
where
    R: Rng,
    P: Presenter + ?Sized,
{
    let mut solver = Solver::from_config(config)?;
    let start = generator.create_board(config.size)?;
    info!("start board:\n{}", start);

    let solution = solver.search(&start)?;
    if config.animate {
        presenter.present(&solution.path)?;
    }

    Ok(SolveReport {
        steps: solution.steps,
        elapsed_secs: solution.elapsed.as_secs_f64(),
        solution,
    })
}
