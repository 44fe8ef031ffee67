//! Unit tests for gc-core primitives.

#[cfg(test)]
mod coord {
    use crate::{Coord, Direction};

    #[test]
    fn step_follows_direction_deltas() {
        let c = Coord::new(2, 2);
        assert_eq!(c.step(Direction::Up), Coord::new(1, 2));
        assert_eq!(c.step(Direction::Right), Coord::new(2, 3));
        assert_eq!(c.step(Direction::Down), Coord::new(3, 2));
        assert_eq!(c.step(Direction::Left), Coord::new(2, 1));
    }

    #[test]
    fn neighbors_in_up_right_down_left_order() {
        let n = Coord::new(0, 0).neighbors();
        assert_eq!(n, [Coord::new(-1, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(0, -1)]);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Coord::new(0, 4) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(4, 4)), 8);
        assert_eq!(Coord::new(3, 1).manhattan(Coord::new(1, 3)), 4);
        assert_eq!(Coord::new(-1, 0).manhattan(Coord::new(0, 0)), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn eater_is_zero() {
        assert_eq!(AgentId::EATER, AgentId(0));
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{MoveTimer, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(4).to_string(), "T4");
    }

    #[test]
    fn move_timer_gates_on_interval() {
        let mut timer = MoveTimer::new(200);
        assert!(timer.ready(0), "first call always fires");
        assert!(!timer.ready(16));
        assert!(!timer.ready(199));
        assert!(timer.ready(200));
        assert!(!timer.ready(250));
        assert!(timer.ready(450));
    }

    #[test]
    fn zero_delay_fires_every_frame() {
        let mut timer = MoveTimer::new(0);
        assert!(timer.ready(5));
        assert!(timer.ready(5));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(3));
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = AgentRng::new(7, AgentId(1));
        let mut b = AgentRng::new(7, AgentId(2));
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = AgentRng::new(1, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(r.choose(&empty).is_none());
        assert_eq!(r.choose(&[9]), Some(&9));
    }

    #[test]
    fn child_seeds_are_reproducible() {
        let mut root_a = SimRng::new(99);
        let mut root_b = SimRng::new(99);
        let a: Vec<u64> = (0..4).map(|i| root_a.child_seed(i)).collect();
        let b: Vec<u64> = (0..4).map(|i| root_b.child_seed(i)).collect();
        assert_eq!(a, b);
        assert_ne!(a[0], a[1]);
    }
}

#[cfg(test)]
mod config {
    use std::path::PathBuf;

    use crate::GameConfig;

    const YAML: &str = "\
height: 5
width: 7
tile_size: 30
amount_of_seekers: 2
max_threat_level: 10
decay_rate: 2.5
default_layout: layouts/default.txt
background_color: [0, 0, 0]
";

    #[test]
    fn parses_with_defaults() {
        let c = GameConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(c.height, 5);
        assert_eq!(c.width, 7);
        assert_eq!(c.tile_size, 30);
        assert_eq!(c.chaser_count, 2);
        assert_eq!(c.max_danger, 10.0);
        assert_eq!(c.decay_rate, 2.5);
        assert_eq!(c.default_layout, PathBuf::from("layouts/default.txt"));
        assert_eq!(c.danger_penalty, 10_000.0);
        assert_eq!(c.chaser.min_state_ticks, 20);
        assert_eq!(c.chaser.max_state_ticks, 70);
        assert_eq!(c.timing.move_delay_ms, 200);
        assert_eq!(c.timing.frame_rate_hz, 60);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let text = YAML.replace("decay_rate: 2.5\n", "");
        assert!(GameConfig::from_yaml_str(&text).is_err());
    }

    #[test]
    fn zero_sized_grid_rejected() {
        let text = YAML.replace("height: 5", "height: 0");
        assert!(GameConfig::from_yaml_str(&text).is_err());
    }

    #[test]
    fn inverted_state_range_rejected() {
        let text = format!("{YAML}chaser:\n  min_state_ticks: 9\n  max_state_ticks: 3\n");
        assert!(GameConfig::from_yaml_str(&text).is_err());
    }

    #[test]
    fn non_positive_danger_is_accepted() {
        let text = YAML
            .replace("max_threat_level: 10", "max_threat_level: 0")
            .replace("decay_rate: 2.5", "decay_rate: -1");
        let c = GameConfig::from_yaml_str(&text).unwrap();
        assert_eq!(c.max_danger, 0.0);
        assert_eq!(c.decay_rate, -1.0);
    }

    #[test]
    fn load_resolves_layout_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.yaml");
        std::fs::write(&path, YAML).unwrap();

        let c = GameConfig::load(&path).unwrap();
        assert_eq!(c.default_layout, dir.path().join("layouts/default.txt"));
    }
}
