use sim::{Session, SimConfig, SimError, Vec2};

#[test]
fn new_session_spawns_the_configured_population() {
    let config = SimConfig::default();
    let session = Session::new(config.clone(), 1).unwrap();
    assert_eq!(session.targets().len(), config.num_targets);
    assert_eq!(session.curr_episode(), 0);
    assert!((session.episode_budget() - 150.0).abs() < 1e-6);
}

#[test]
fn invalid_config_is_rejected_before_spawning() {
    let config = SimConfig {
        sensor_range: 0.0,
        ..SimConfig::default()
    };
    assert_eq!(
        Session::new(config, 1).err(),
        Some(SimError::InvalidConfig("sensor_range must be positive"))
    );
}

#[test]
fn overcrowded_arena_fails_to_spawn() {
    // 200 bodies in a 2x2 arena cannot all sit more than one unit apart.
    let config = SimConfig {
        num_targets: 200,
        width: 2.0,
        height: 2.0,
        ..SimConfig::default()
    };
    assert_eq!(Session::new(config, 1).err(), Some(SimError::SpawnFailed(201)));
}

#[test]
fn view_exposes_read_only_render_inputs() {
    let session = Session::new(SimConfig::default(), 5).unwrap();
    let view = session.view();
    assert_eq!(view.agent_pos, session.agent_pos());
    assert_eq!(view.targets.len(), session.targets().len());
    assert!((view.sensor_range - 15.0).abs() < 1e-6);
    assert!((view.arena.width - 150.0).abs() < 1e-6);
}

#[test]
fn step_returns_an_empty_info_map() {
    let mut session = Session::new(SimConfig::default(), 9).unwrap();
    let outcome = session.step(Vec2::new(10.0, 10.0)).unwrap();
    assert!(outcome.info.is_empty());
}
