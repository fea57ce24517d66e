//! Fluent builder for constructing a [`Dispatcher`].

use lift_core::{BuildingConfig, ElevatorId, Floor};

use crate::{ArrivalModel, Dispatcher, SimError, SimResult, UniformArrivals};

/// Fluent builder for [`Dispatcher<A>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                 |
/// |---------------------|-----------------------------------------|
/// | `.arrivals(m)`      | `UniformArrivals::new(config.seed)`     |
/// | `.start_floors(v)`  | Every car at `config.floor_min`         |
///
/// # Example
///
/// ```rust,ignore
/// let mut building = DispatcherBuilder::new(config)
///     .arrivals(ScriptedArrivals::new([(Tick(1), Floor(1), Floor(5))]))
///     .start_floors(vec![Floor(1)])
///     .build()?;
/// ```
pub struct DispatcherBuilder<A: ArrivalModel = UniformArrivals> {
    config:       BuildingConfig,
    arrivals:     A,
    start_floors: Option<Vec<Floor>>,
}

impl DispatcherBuilder<UniformArrivals> {
    pub fn new(config: BuildingConfig) -> Self {
        let arrivals = UniformArrivals::new(config.seed);
        Self { config, arrivals, start_floors: None }
    }
}

impl<A: ArrivalModel> DispatcherBuilder<A> {
    /// Replace the arrival process.
    pub fn arrivals<B: ArrivalModel>(self, arrivals: B) -> DispatcherBuilder<B> {
        DispatcherBuilder {
            config:       self.config,
            arrivals,
            start_floors: self.start_floors,
        }
    }

    /// Initial floor of each car (must be length `elevator_count`).
    pub fn start_floors(mut self, floors: Vec<Floor>) -> Self {
        self.start_floors = Some(floors);
        self
    }

    /// Validate inputs and return a ready-to-step [`Dispatcher`].
    pub fn build(self) -> SimResult<Dispatcher<A>> {
        self.config.validate()?;
        let count = self.config.elevator_count;

        let start = match self.start_floors {
            Some(floors) => {
                if floors.len() != count {
                    return Err(SimError::ElevatorCountMismatch {
                        expected: count,
                        got:      floors.len(),
                    });
                }
                let mut id = ElevatorId::FIRST;
                for &floor in &floors {
                    if !self.config.floors().contains(&floor) {
                        return Err(SimError::StartFloorOutOfRange { elevator: id, floor });
                    }
                    id = id.next();
                }
                floors
            }
            None => vec![self.config.floor_min; count],
        };

        Ok(Dispatcher::assemble(self.config, self.arrivals, start))
    }
}
