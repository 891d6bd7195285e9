mod common;

use std::io;

use npuzzle::codec;
use npuzzle::presentation::{NoPlayback, Presenter};
use npuzzle::{solve, Board, Generator, SolveConfig, Solver};

#[derive(Default)]
struct Recorder {
    shown: Vec<Vec<Board>>,
}

impl Presenter for Recorder {
    fn present(&mut self, path: &[Board]) -> io::Result<()> {
        self.shown.push(path.to_vec());
        Ok(())
    }
}

fn assert_released(solver: &Solver) {
    let stats = solver.stats();
    assert_eq!(solver.frontier_len(), 0);
    assert!(solver.closed().is_empty());
    assert_eq!(stats.pushed, stats.expanded + stats.drained);
}

#[test_log::test]
fn known_2x2_board() {
    let start = Board::from_tiles(vec![1, 0, 3, 2]).unwrap();
    let solution = Solver::new(2).unwrap().search(&start).unwrap();

    let bfs = common::bfs_distances(2);
    assert_eq!(solution.steps as u32, bfs[&codec::encode(&start)]);
    assert_eq!(solution.steps, 1);
}

#[test_log::test]
fn every_2x2_board_is_solved_optimally() {
    let mut solver = Solver::new(2).unwrap();

    for (code, dist) in common::bfs_distances(2) {
        let start = codec::decode(code, 2);
        let solution = solver.search(&start).unwrap();

        assert_eq!(solution.steps as u32, dist);
        assert_eq!(solution.start(), &start);
        assert!(solution.goal().is_goal());
        assert_eq!(solution.path.len(), solution.steps + 1);
        common::assert_single_slides(&solution.path);
        assert_released(&solver);
    }
}

#[test_log::test]
fn generated_3x3_paths_are_sound() {
    let bfs = common::bfs_distances(3);
    let mut generator = Generator::from_seed(Some(3));
    let mut solver = Solver::new(3).unwrap();

    for _ in 0..25 {
        let start = generator.create_board(3).unwrap();
        let solution = solver.search(&start).unwrap();
        let shortest = bfs[&codec::encode(&start)] as usize;

        assert_eq!(solution.start(), &start);
        assert!(solution.goal().is_goal());
        assert_eq!(solution.path.len(), solution.steps + 1);
        assert!(solution.steps >= shortest);
        // every route between two boards has the same parity
        assert_eq!(solution.steps % 2, shortest % 2);
        common::assert_single_slides(&solution.path);
        assert_released(&solver);
    }
}

#[test_log::test]
fn moves_replay_the_path() {
    let mut generator = Generator::from_seed(Some(11));
    let start = generator.create_board(3).unwrap();
    let solution = Solver::new(3).unwrap().search(&start).unwrap();

    let moves = solution.moves();
    assert_eq!(moves.len(), solution.steps);

    let end = moves
        .iter()
        .fold(start, |board, &dir| board.try_move(dir).unwrap());
    assert!(end.is_goal());
}

#[test_log::test]
fn generated_4x4_boards_are_solved() {
    let mut generator = Generator::from_seed(Some(15));
    let mut solver = Solver::new(4).unwrap();

    for _ in 0..5 {
        let start = generator.create_board(4).unwrap();
        let solution = solver.search(&start).unwrap();

        assert_eq!(solution.start(), &start);
        assert_eq!(solution.goal(), &Board::goal(4));
        assert_eq!(solution.path.len(), solution.steps + 1);
        common::assert_single_slides(&solution.path);
        assert_released(&solver);
    }
}

#[test_log::test]
fn solve_hands_the_path_to_the_presenter() {
    let config = SolveConfig {
        size: 3,
        animate: true,
        playback_interval_ms: 0,
        ..Default::default()
    };
    let mut generator = Generator::from_seed(Some(5));
    let mut recorder = Recorder::default();

    let report = solve(&config, &mut generator, &mut recorder).unwrap();

    assert_eq!(recorder.shown.len(), 1);
    assert_eq!(recorder.shown[0], report.solution.path);
    assert_eq!(report.steps, report.solution.steps);
    assert!(report.elapsed_secs >= 0.0);
    assert!(npuzzle::generator::is_solvable(report.solution.start()));
}

#[test_log::test]
fn solve_without_animation_presents_nothing() {
    let config = SolveConfig { size: 2, ..Default::default() };
    let mut generator = Generator::from_seed(Some(5));
    let mut recorder = Recorder::default();

    solve(&config, &mut generator, &mut recorder).unwrap();
    assert!(recorder.shown.is_empty());
}

#[test]
fn solve_rejects_unsupported_sizes() {
    let config = SolveConfig { size: 5, ..Default::default() };
    let mut generator = Generator::from_seed(Some(1));
    let result = solve(&config, &mut generator, &mut NoPlayback);
    assert!(matches!(result, Err(npuzzle::PuzzleError::UnsupportedSize(5))));
}

#[test]
fn same_seed_same_solution() {
    let config = SolveConfig { size: 4, seed: Some(77), ..Default::default() };
    let first = solve(&config, &mut Generator::from_seed(config.seed), &mut NoPlayback).unwrap();
    let second = solve(&config, &mut Generator::from_seed(config.seed), &mut NoPlayback).unwrap();

    assert_eq!(first.solution.path, second.solution.path);
    assert_eq!(first.solution.stats, second.solution.stats);
}
