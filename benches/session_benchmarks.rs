use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sokobox::core::{Direction, FakeClock, NullReporter, Session, UserAction};
use sokobox::level::Level;
use std::hint::black_box;
use std::time::Duration;

const PUZZLES: &[(&str, &str)] = &[
    ("corridor", "######\n#@$-.#\n######"),
    ("warehouse", r#"    #####
    #---#
    #$--#
  ###--$##
  #--$-$-#
###-#-##-#   ######
#---#-##-#####--..#
#-$--$----------..#
#####-###-#@##--..#
    #-----#########
    #######"#),
];

const WALK: [Direction; 8] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Left,
    Direction::Right,
    Direction::Right,
];

pub fn bench_move_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_and_undo");

    for &(puzzle_name, puzzle) in PUZZLES {
        let level = Level::parse(puzzle_name, puzzle).expect("benchmark level parses");
        group.bench_with_input(BenchmarkId::new("walk_then_rewind", puzzle_name), &level, |b, level| {
            b.iter_with_setup(
                || Session::with_clock(level, "bench", NullReporter, FakeClock::new(Duration::ZERO)),
                |mut session| {
                    for &direction in WALK.iter().cycle().take(64) {
                        black_box(session.step(UserAction::Move(direction)));
                    }
                    while session.history_len() > 0 {
                        black_box(session.undo());
                    }
                    session
                },
            );
        });
    }

    group.finish();
}

pub fn bench_snapshot(c: &mut Criterion) {
    let (name, puzzle) = PUZZLES[1];
    let level = Level::parse(name, puzzle).expect("benchmark level parses");
    let session = Session::with_clock(&level, "bench", NullReporter, FakeClock::new(Duration::ZERO));

    c.bench_function("snapshot_30x30", |b| b.iter(|| black_box(session.snapshot())));
}

criterion_group!(benches, bench_move_and_undo, bench_snapshot);
criterion_main!(benches);
