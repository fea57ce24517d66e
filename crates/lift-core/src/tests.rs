//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids_tests {
    use crate::{ElevatorId, PassengerId};

    #[test]
    fn index_is_zero_based() {
        assert_eq!(PassengerId::FIRST.index(), 0);
        assert_eq!(PassengerId(42).index(), 41);
        assert_eq!(PassengerId::try_from(41usize).unwrap(), PassengerId(42));
    }

    #[test]
    fn next_increments() {
        assert_eq!(ElevatorId::FIRST.next(), ElevatorId(2));
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn zero_id_has_no_index() {
        let _ = PassengerId(0).index();
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "#7");
        assert_eq!(ElevatorId(2).to_string(), "#2");
    }
}

#[cfg(test)]
mod floor_tests {
    use crate::{Direction, Floor};

    #[test]
    fn step_follows_direction() {
        assert_eq!(Floor(3).step(Direction::Up), Floor(4));
        assert_eq!(Floor(3).step(Direction::Down), Floor(2));
        assert_eq!(Floor(3).step(Direction::Idle), Floor(3));
    }

    #[test]
    fn direction_to() {
        assert_eq!(Floor(1).direction_to(Floor(5)), Direction::Up);
        assert_eq!(Floor(5).direction_to(Floor(1)), Direction::Down);
        assert_eq!(Floor(5).direction_to(Floor(5)), Direction::Idle);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(9)), 7);
        assert_eq!(Floor(9).distance(Floor(2)), 7);
        assert_eq!(Floor(-1).distance(Floor(1)), 2);
    }

    #[test]
    fn reversed() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Idle.reversed(), Direction::Idle);
    }

    #[test]
    fn display() {
        assert_eq!(Floor(10).to_string(), "10F");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod time_tests {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod config_tests {
    use crate::{BuildingConfig, ConfigError, Direction, Floor};

    #[test]
    fn reference_building() {
        let cfg = BuildingConfig::default();
        assert_eq!(cfg.floors(), Floor(1)..=Floor(10));
        assert_eq!(cfg.floor_count(), 10);
        assert_eq!(cfg.elevator_count, 2);
        assert_eq!(cfg.elevator_capacity, 5);
        assert_eq!(cfg.max_passengers, 40);
        assert_eq!((cfg.move_time, cfg.stop_time), (1, 1));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn single_floor_rejected() {
        let cfg = BuildingConfig { floor_max: Floor(1), ..BuildingConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FloorRange { min: Floor(1), max: Floor(1) })
        );
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = BuildingConfig { elevator_capacity: 0, ..BuildingConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn no_elevators_rejected() {
        let cfg = BuildingConfig { elevator_count: 0, ..BuildingConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoElevators));
    }

    #[test]
    fn car_spec_terminals() {
        let spec = BuildingConfig::default().car_spec();
        assert!(spec.is_terminal(Floor(10), Direction::Up));
        assert!(spec.is_terminal(Floor(1), Direction::Down));
        assert!(!spec.is_terminal(Floor(10), Direction::Down));
        assert!(!spec.is_terminal(Floor(1), Direction::Idle));
        assert!(spec.serves(Floor(5)));
        assert!(!spec.serves(Floor(11)));
    }
}

#[cfg(test)]
mod rng_tests {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: i32 = r1.gen_range(-50..=50);
            let b: i32 = r2.gen_range(-50..=50);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: Vec<u32> = (0..16).map(|_| r1.gen_range(0..1_000_000)).collect();
        let b: Vec<u32> = (0..16).map(|_| r2.gen_range(0..1_000_000)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1..=10);
            assert!((1..=10).contains(&v));
        }
    }
}
