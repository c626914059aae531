//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use cabin_core::{SimConfig, SimRng};
use cabin_field::{FieldSolver, SolverSession};
use cabin_movement::{MovementController, MovementParams};
use cabin_state::{Cabin, CabinConfig};
use cabin_transmission::{TransmissionModel, TransmissionParams};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: length, seed, tick duration, cadences
/// - [`SolverSession<S>`]: the field solver, already acquired
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                     |
/// |---------------------|---------------------------------------------|
/// | `.cabin_config(c)`  | `CabinConfig::default()` (27 rows, 90 %)    |
/// | `.cabin(c)`         | Board a cabin from `cabin_config` and seed  |
/// | `.movement(p)`      | `MovementParams::default()`                 |
/// | `.transmission(p)`  | `TransmissionParams::default()`             |
/// | `.interrupt(flag)`  | A private flag nobody else can set          |
///
/// If `build` fails the session is dropped, which releases the solver.
pub struct SimBuilder<S: FieldSolver> {
    config:       SimConfig,
    session:      SolverSession<S>,
    cabin_config: CabinConfig,
    cabin:        Option<Cabin>,
    movement:     MovementParams,
    transmission: TransmissionParams,
    interrupt:    Option<Arc<AtomicBool>>,
}

impl<S: FieldSolver> SimBuilder<S> {
    pub fn new(config: SimConfig, session: SolverSession<S>) -> Self {
        Self {
            config,
            session,
            cabin_config: CabinConfig::default(),
            cabin:        None,
            movement:     MovementParams::default(),
            transmission: TransmissionParams::default(),
            interrupt:    None,
        }
    }

    /// Geometry and population used to board the cabin.
    pub fn cabin_config(mut self, config: CabinConfig) -> Self {
        self.cabin_config = config;
        self
    }

    /// Use an already-boarded cabin instead of generating one.
    ///
    /// Its clock must tick at `config.tick_duration`.  The run RNG is still
    /// seeded from `config.seed`.
    pub fn cabin(mut self, cabin: Cabin) -> Self {
        self.cabin = Some(cabin);
        self
    }

    pub fn movement(mut self, params: MovementParams) -> Self {
        self.movement = params;
        self
    }

    pub fn transmission(mut self, params: TransmissionParams) -> Self {
        self.transmission = params;
        self
    }

    /// Share a stop flag.  Setting it ends the run before the next tick.
    pub fn interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Validate every parameter set, board the cabin, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        self.movement.validate()?;
        self.transmission.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let cabin = match self.cabin {
            Some(cabin) => {
                if cabin.clock.tick_duration != self.config.tick_duration {
                    return Err(SimError::Config(format!(
                        "cabin clock ticks at {} but the run is configured for {}",
                        cabin.clock.tick_duration, self.config.tick_duration
                    )));
                }
                cabin
            }
            None => Cabin::build(&self.cabin_config, self.config.make_clock(), &mut rng)?,
        };

        Ok(Sim::new(
            self.config,
            cabin,
            MovementController::new(self.movement),
            TransmissionModel::new(self.transmission),
            rng,
            self.session,
            self.interrupt.unwrap_or_default(),
        ))
    }
}
