use sim::{Session, SimConfig, Vec2};

/// Every position stays inside the arena for the whole episode, even when the
/// commanded destination lies far outside it.
#[test]
fn positions_stay_inside_the_arena() {
    let config = SimConfig {
        num_targets: 25,
        width: 30.0,
        height: 20.0,
        target_speed: 3.0,
        total_sim_time: 200,
        update_rate: 5,
        ..SimConfig::default()
    };
    let mut session = Session::new(config, 11).unwrap();
    let arena = session.arena();

    // Alternate between far-out corners to drag the agent across every edge.
    let corners = [
        Vec2::new(-100.0, -100.0),
        Vec2::new(1000.0, -100.0),
        Vec2::new(1000.0, 1000.0),
        Vec2::new(-100.0, 1000.0),
    ];
    let mut i = 0;
    loop {
        let outcome = session.step(corners[i % corners.len()]).unwrap();
        i += 1;
        assert!(arena.contains(session.agent_pos()), "agent escaped at step {i}");
        for (k, target) in session.targets().iter().enumerate() {
            assert!(arena.contains(target.pos), "target {k} escaped at step {i}");
        }
        if outcome.done {
            break;
        }
    }
    assert_eq!(i, 40, "200 / 5 = 40 macro-steps to exhaustion");
}

/// Fast targets get clamped at the boundary rather than leaving the arena,
/// and the step budget eventually forces them off an unreachable heading.
#[test]
fn clamped_targets_keep_moving_after_forced_replan() {
    let config = SimConfig {
        num_targets: 5,
        width: 10.0,
        height: 10.0,
        target_speed: 4.0,
        target_max_step: 3,
        total_sim_time: 300,
        update_rate: 10,
        ..SimConfig::default()
    };
    let mut session = Session::new(config, 2).unwrap();
    let arena = session.arena();
    for _ in 0..30 {
        session.step(Vec2::new(5.0, 5.0)).unwrap();
        for target in session.targets() {
            assert!(arena.contains(target.pos));
            assert!(target.steps_left <= 3);
        }
    }
}
