//! Showing a finished solution. The search never depends on anything here.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::puzzle::Board;

/// Receives the start-to-goal boards of a solved puzzle.
pub trait Presenter {
    fn present(&mut self, path: &[Board]) -> io::Result<()>;
}

/// Discards the path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPlayback;

impl Presenter for NoPlayback {
    fn present(&mut self, _path: &[Board]) -> io::Result<()> {
        Ok(())
    }
}

/// Plays a solution back frame by frame, one board per frame.
pub struct TerminalPlayback<W: Write> {
    out: W,
    interval: Duration,
    clear: bool,
}

impl TerminalPlayback<Stdout> {
    pub fn stdout(interval: Duration) -> Self {
        Self::new(io::stdout(), interval)
    }
}

impl<W: Write> TerminalPlayback<W> {
    pub fn new(out: W, interval: Duration) -> Self {
        Self { out, interval, clear: true }
    }

    /// Print frames one after another instead of redrawing in place.
    pub fn without_clearing(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPlayback<W> {
    fn present(&mut self, path: &[Board]) -> io::Result<()> {
        for (i, board) in path.iter().enumerate() {
            if self.clear {
                queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            write!(self.out, "{}", board)?;
            if !self.clear && i + 1 < path.len() {
                writeln!(self.out)?;
            }
            self.out.flush()?;

            if i + 1 < path.len() && !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
        Ok(())
    }
}

/// Writes `board` as comma-separated rows, one board row per line.
pub fn write_snapshot(board: &Board, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for row in board.rows() {
        let line: Vec<String> = row.iter().map(|t| t.to_string()).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    out.flush()
}
