use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use helicopter_madness::prelude::*;
use helicopter_madness::scenes::action::{ObstaclePool, NUMBER_OF_OBSTACLES, SCORE_SCALE};
use helicopter_madness::scenes::components::Component;
use helicopter_madness::scenes::MenuScene;

fn stage() -> Stage {
    Stage::new(1024.0, 600.0)
}

fn tick(millis: u64, click: bool, space: bool) -> Tick {
    let mut input = InputSnapshot::default().with_pointer(512.0, 300.0);
    if click {
        input = input.with_button(MouseButton::Left);
    }
    if space {
        input = input.with_key(KeyCode::Space);
    }
    Tick::new(input, Duration::from_millis(millis))
}

fn key_tick(key: KeyCode) -> Tick {
    Tick::new(InputSnapshot::default().with_key(key), Duration::ZERO)
}

fn idle_tick() -> Tick {
    Tick::new(InputSnapshot::default(), Duration::ZERO)
}

fn ticks() -> impl Strategy<Value = Vec<(u64, bool, bool)>> {
    prop::collection::vec((0u64..1_500, any::<bool>(), any::<bool>()), 1..120)
}

proptest! {
    /// Property: the score only grows, except when a reset sends the
    /// scene back to PreStart
    #[test]
    fn score_never_decreases_without_reset(seed in any::<u64>(), script in ticks()) {
        let mut context = GameContext::with_seed(stage(), seed);
        let mut scene = ActionScene::new(&mut context);
        scene.show();

        let mut previous = scene.duration_score();
        for (millis, click, space) in script {
            let before = scene.state();
            scene.update(&mut context, &tick(millis, click, space));
            let now = scene.duration_score();

            if scene.state() == ActionSceneState::PreStart {
                prop_assert_eq!(now, 0);
            } else {
                prop_assert!(now >= previous, "score dropped from {} to {}", previous, now);
            }
            if before != ActionSceneState::InPlay && scene.state() != ActionSceneState::PreStart {
                prop_assert_eq!(now, previous, "score moved while {:?}", before);
            }
            prop_assert_eq!(scene.score(), now / SCORE_SCALE);
            previous = now;
        }
    }

    /// Property: every observed state change is a legal one
    #[test]
    fn only_legal_transitions_occur(seed in any::<u64>(), script in ticks()) {
        use ActionSceneState::*;

        let mut context = GameContext::with_seed(stage(), seed);
        let mut scene = ActionScene::new(&mut context);
        scene.show();

        for (millis, click, space) in script {
            let before = scene.state();
            scene.update(&mut context, &tick(millis, click, space));
            let after = scene.state();

            let legal = match (before, after) {
                (a, b) if a == b => true,
                (PreStart, InPlay) => true,
                (InPlay, Paused) | (InPlay, GameOver) => true,
                (Paused, InPlay) | (Paused, GameOver) => true,
                (GameOver, PreStart) => true,
                _ => false,
            };
            prop_assert!(legal, "illegal transition {:?} -> {:?}", before, after);
        }
    }

    /// Property: the obstacle pool never grows or shrinks
    #[test]
    fn obstacle_count_is_constant(seed in any::<u64>(), script in ticks()) {
        let mut context = GameContext::with_seed(stage(), seed);
        let mut scene = ActionScene::new(&mut context);
        scene.show();

        for (millis, click, space) in script {
            scene.update(&mut context, &tick(millis, click, space));
            prop_assert_eq!(scene.obstacles().len(), NUMBER_OF_OBSTACLES + 1);
        }
    }

    /// Property: recycled obstacles keep their spacing within
    /// [min, max * speed ratio] of the slot before them
    #[test]
    fn recycled_spacing_stays_in_range(seed in any::<u64>(), ratio in 1.0f32..2.0) {
        let stage = stage();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pool = ObstaclePool::new(&stage, &mut rng);
        pool.hide_all();

        let moved = pool.recycle(ratio, false, &stage, &mut rng);
        prop_assert_eq!(moved, pool.len());

        let min = pool.min_spacing();
        let max = pool.max_spacing() * ratio;
        let xs: Vec<f32> = pool.iter().map(|o| o.position().x).collect();
        for pair in xs.windows(2) {
            let gap = pair[1] - pair[0];
            prop_assert!(
                gap >= min - 0.001 && gap <= max + 0.001,
                "gap {} outside [{}, {}]",
                gap,
                min,
                max
            );
        }
        prop_assert!(pool.iter().all(|o| o.is_visible() && o.is_enabled()));
    }

    /// Property: the high-score table stays sorted and bounded
    #[test]
    fn high_score_table_stays_sorted(
        scores in prop::collection::vec(1u32..100_000, 1..30),
        capacity in 1usize..8,
    ) {
        let mut context = GameContext::with_seed(stage(), 0);
        let mut table = HighScoreScene::new(Box::new(MemoryScoreStore::new()), capacity);
        table.show();

        for score in scores {
            if score <= table.lowest_score() {
                continue;
            }
            table.add_score_entry(score);
            table.update(&mut context, &key_tick(KeyCode::Enter));
            table.update(&mut context, &idle_tick());
            prop_assert_eq!(table.state(), HighScoreState::ResumePlay);
            table.show();
        }

        let entries = table.entries();
        prop_assert!(entries.len() <= capacity);
        prop_assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// Property: arrow keys wrap around the menu in both directions
    #[test]
    fn menu_selection_wraps(moves in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut context = GameContext::with_seed(stage(), 0);
        let mut menu = MenuScene::new();
        menu.show();

        let count = MenuItem::ALL.len() as i64;
        let mut expected = 0i64;
        for down in moves {
            let key = if down { KeyCode::ArrowDown } else { KeyCode::ArrowUp };
            menu.update(&mut context, &key_tick(key));
            menu.update(&mut context, &idle_tick());
            expected = (expected + if down { 1 } else { -1 }).rem_euclid(count);
        }

        prop_assert_eq!(menu.highlighted(), MenuItem::ALL[expected as usize]);
    }
}
