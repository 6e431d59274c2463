#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    const WAREHOUSE: &str = r#"
#######
#-----#
#-$-$-#
#--@--#
#-$.$-#
#-...-#
#######
"#;

    #[test]
    fn undoing_every_move_restores_the_loaded_board() {
        let mut game = GameTestState::new(WAREHOUSE);
        let moves = [Up, Left, Left, Down, Right, Down, Down, Up, Right, Right, Up, Right, Down, Left];
        let executed = moves
            .iter()
            .filter(|&&dir| {
                let change = game.try_move(dir).change;
                matches!(change, GameChangeType::PlayerMove | GameChangeType::PlayerAndBoxMove)
            })
            .count();
        assert!(game.session.stats().pushes > 0, "sequence should push at least once");
        assert_eq!(game.session.history_len(), executed);

        for _ in 0..executed {
            assert_eq!(game.undo().change, GameChangeType::Undone);
        }

        game.assert_unchanged_since_load();
        assert_eq!(game.session.stats(), RunStats::default());
        assert_eq!(game.session.history_len(), 0);
    }

    #[test]
    fn second_undo_on_single_entry_history_is_a_no_op() {
        let mut game = GameTestState::new(r#"
#@$-.#
"#);
        game.assert_move(Right);

        assert_eq!(game.undo().change, GameChangeType::Undone);
        assert_eq!(game.undo().change, GameChangeType::Ignored);

        assert_eq!(game.session.stats(), RunStats::default());
        game.assert_unchanged_since_load();
    }

    #[test]
    fn undo_on_fresh_level_is_a_no_op() {
        let mut game = GameTestState::new(WAREHOUSE);

        assert_eq!(game.undo().change, GameChangeType::Ignored);
        game.assert_unchanged_since_load();
    }

    #[test]
    fn undo_restores_facing_from_before_the_move() {
        let mut game = GameTestState::new(r#"
#-.#
#@-#
"#);
        assert_eq!(game.try_move(Left).change, GameChangeType::Blocked);
        game.assert_move(Up);
        assert_eq!(game.session.player().facing, Up);

        game.undo();

        assert_eq!(game.session.player().facing, Left);
        assert_eq!(game.session.player().position, Vec2 { i: 1, j: 1 });
    }

    #[test]
    fn undo_skips_blocked_moves() {
        let mut game = GameTestState::new(r#"
#@-.#
"#);
        game.assert_move(Right);
        game.try_move(Up);
        game.try_move(Down);

        game.undo();

        assert_eq!(game.session.player().position, Vec2 { i: 0, j: 1 });
        assert_eq!(game.session.player().facing, Up);
        assert_eq!(game.session.stats().moves, 0);
    }

    #[test]
    fn undo_puts_crate_back_on_its_goal() {
        let mut game = GameTestState::new(r#"
#@%-.#
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
#-+$.#
"#);

        game.undo();

        game.assert_matches(r#"
#@%-.#
"#);
        let grid = game.session.snapshot().grid;
        assert_eq!(grid[0][2], Cell::CrateOnGoal);
        assert_eq!(grid[0][3], Cell::Floor);
        assert_eq!(game.session.stats(), RunStats::default());
    }

    #[test]
    fn undo_takes_crate_off_a_goal() {
        let mut game = GameTestState::new(r#"
#@$..#
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
#-@%.#
"#);

        game.undo();

        game.assert_unchanged_since_load();
        assert!(!game.session.snapshot().player.is_pushing);
    }

    #[test]
    fn undo_only_decrements_pushes_for_pushes() {
        let mut game = GameTestState::new(r#"
#@$--.#
"#);
        game.assert_moves(&[Right, Left, Right, Right]);
        assert_eq!(game.session.stats(), RunStats { moves: 4, pushes: 2 });

        game.undo();
        assert_eq!(game.session.stats(), RunStats { moves: 3, pushes: 1 });
        game.undo();
        assert_eq!(game.session.stats(), RunStats { moves: 2, pushes: 1 });
    }
}
