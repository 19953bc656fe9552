use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazesearch::{Maze, PathFinder, Policy};

fn load_base_maze_scaled(factor: usize) -> Maze {
    let mut maze = Maze::parse(include_str!("../../data/maze2.txt")).unwrap();
    maze.scale_up(factor);
    maze
}

fn bench_maze_scaled(c: &mut Criterion, factor: usize) {
    let maze = load_base_maze_scaled(factor);

    for policy in [Policy::Stack, Policy::Queue] {
        c.bench_function(&format!("maze_scaled_{}_{}", factor, policy), |b| {
            b.iter(|| {
                let res = PathFinder::new(&maze, black_box(policy)).finish(&maze);
                assert!(res.is_ok());
            })
        });
    }
}

pub fn maze_small(c: &mut Criterion) {
    bench_maze_scaled(c, 1);
}

pub fn maze_medium(c: &mut Criterion) {
    bench_maze_scaled(c, 2);
}

pub fn maze_large(c: &mut Criterion) {
    bench_maze_scaled(c, 4);
}

criterion_group!(benches, maze_small, maze_medium, maze_large);
criterion_main!(benches);
