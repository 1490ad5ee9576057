use perceptron_forager::direction::{Motion, resolve_direction, resolve_motion};
use perceptron_forager::{Action, Facing};

#[test]
fn test_four_right_turns_return_home() {
    for facing in Facing::ALL {
        let mut current = facing;
        for _ in 0..4 {
            current = resolve_direction(current, Action::Right);
        }
        assert_eq!(current, facing);
    }
}

#[test]
fn test_left_then_right_is_identity() {
    for facing in Facing::ALL {
        let left = resolve_direction(facing, Action::Left);
        assert_eq!(resolve_direction(left, Action::Right), facing);
    }
}

#[test]
fn test_turns_from_north() {
    assert_eq!(resolve_direction(Facing::North, Action::Forward), Facing::North);
    assert_eq!(resolve_direction(Facing::North, Action::Right), Facing::East);
    assert_eq!(resolve_direction(Facing::North, Action::Left), Facing::West);
    assert_eq!(resolve_direction(Facing::North, Action::Backward), Facing::South);
}

#[test]
fn test_right_turns_are_clockwise() {
    assert_eq!(Facing::North.turned_right(), Facing::East);
    assert_eq!(Facing::East.turned_right(), Facing::South);
    assert_eq!(Facing::South.turned_right(), Facing::West);
    assert_eq!(Facing::West.turned_right(), Facing::North);
}

#[test]
fn test_left_is_right_then_reverse() {
    for facing in Facing::ALL {
        assert_eq!(facing.turned_left(), facing.turned_right().reversed());
    }
}

#[test]
fn test_backward_steps_without_turning() {
    let motion = resolve_motion(Facing::East, Action::Backward);
    assert_eq!(
        motion,
        Motion {
            facing: Facing::East,
            step: (-1, 0),
        }
    );
}

#[test]
fn test_turning_actions_step_in_new_facing() {
    let motion = resolve_motion(Facing::North, Action::Left);
    assert_eq!(motion.facing, Facing::West);
    assert_eq!(motion.step, (-1, 0));

    let motion = resolve_motion(Facing::South, Action::Forward);
    assert_eq!(motion.facing, Facing::South);
    assert_eq!(motion.step, (0, 1));
}

#[test]
fn test_nothing_stays_put() {
    for facing in Facing::ALL {
        let motion = resolve_motion(facing, Action::Nothing);
        assert_eq!(motion.facing, facing);
        assert_eq!(motion.step, (0, 0));
    }
}

#[test]
fn test_action_indices_round_trip() {
    for action in Action::ALL {
        assert_eq!(Action::from_index(action.index()), Some(action));
    }
    assert_eq!(Action::from_index(5), None);
}
