//! The `Sim` struct and its tick loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cabin_agent::InfectionRoute;
use cabin_core::{SimConfig, SimRng, Tick};
use cabin_field::{FieldRequest, FieldSolver, SolverKind, SolverSession};
use cabin_movement::MovementController;
use cabin_state::Cabin;
use cabin_transmission::TransmissionModel;
use tracing::{info, warn};

use crate::{ProgressReport, RunSummary, SimObserver, SimResult, TickReport};

/// The main simulation runner.
///
/// `Sim<S>` owns the cabin, the run-wide RNG, and the solver session, and
/// drives the tick loop described in the crate docs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: FieldSolver> {
    /// Global configuration (total ticks, seed, cadences, …).
    pub config: SimConfig,

    /// Seats, passengers, clock, field, and contact log.  The cabin's clock
    /// is the simulation clock.
    pub cabin: Cabin,

    pub movement: MovementController,

    pub transmission: TransmissionModel,

    /// The single random source for the whole run.
    rng: SimRng,

    session: SolverSession<S>,

    interrupt: Arc<AtomicBool>,

    field_refreshes:  u64,
    refresh_failures: u64,
}

impl<S: FieldSolver> Sim<S> {
    pub(crate) fn new(
        config:       SimConfig,
        cabin:        Cabin,
        movement:     MovementController,
        transmission: TransmissionModel,
        rng:          SimRng,
        session:      SolverSession<S>,
        interrupt:    Arc<AtomicBool>,
    ) -> Self {
        Self {
            config,
            cabin,
            movement,
            transmission,
            rng,
            session,
            interrupt,
            field_refreshes: 0,
            refresh_failures: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`, or
    /// until the stop flag is set.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let counts = self.cabin.infection_counts();
        info!(
            passengers = counts.population,
            initially_infected = counts.infected,
            ticks = self.config.total_ticks,
            solver = self.session.solver_name(),
            backend = %self.session.kind(),
            "simulation starting"
        );

        while self.cabin.clock.current_tick < self.config.end_tick() {
            if self.is_interrupted() {
                warn!(tick = %self.cabin.clock.current_tick, "simulation interrupted");
                break;
            }
            self.process_tick(observer);
        }

        let summary = self.summary();
        info!(
            final_infected = summary.final_infected,
            population = summary.population,
            new_infections = summary.new_infections(),
            airborne = summary.airborne_infections,
            surface = summary.surface_infections,
            contact_events = summary.contact_events,
            interrupted = summary.interrupted,
            "simulation complete"
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// but honours the stop flag).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.is_interrupted() {
                break;
            }
            self.process_tick(observer);
        }
        Ok(())
    }

    /// Release the solver and surface any teardown error.  Dropping the
    /// `Sim` also releases it, but only logs failures.
    pub fn finish(self) -> SimResult<()> {
        self.session.close()?;
        Ok(())
    }

    /// A handle to the stop flag, for signal handlers or other threads.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    #[inline]
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn solver_kind(&self) -> SolverKind {
        self.session.kind()
    }

    /// Totals as of the current tick.
    pub fn summary(&self) -> RunSummary {
        let (mut initial, mut airborne, mut surface) = (0, 0, 0);
        for infection in self.cabin.agents.iter().filter_map(|a| a.infection()) {
            match infection.route {
                InfectionRoute::Initial  => initial += 1,
                InfectionRoute::Airborne => airborne += 1,
                InfectionRoute::Surface  => surface += 1,
            }
        }
        let final_tick = self.cabin.clock.current_tick;
        RunSummary {
            final_tick,
            end_time: self.cabin.now(),
            interrupted: final_tick < self.config.end_tick() && self.is_interrupted(),
            population: self.cabin.agents.len(),
            initial_infected: initial,
            airborne_infections: airborne,
            surface_infections: surface,
            final_infected: initial + airborne + surface,
            contact_events: self.cabin.contacts.len(),
            field_refreshes: self.field_refreshes,
            refresh_failures: self.refresh_failures,
            solver: self.session.kind(),
            solver_name: self.session.solver_name().to_owned(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.cabin.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: movement ─────────────────────────────────────────────
        let contacts = self.movement.update_all(&mut self.cabin, &mut self.rng);

        // ── Phase 2: field refresh ────────────────────────────────────────
        if now.is_on_interval(self.config.field_refresh_interval_ticks) {
            self.refresh_field(now, observer);
        }

        // ── Phase 3: transmission ─────────────────────────────────────────
        let outcome = self.transmission.update(&mut self.cabin, &mut self.rng);

        observer.on_tick_end(&TickReport {
            tick: now,
            contacts,
            new_airborne: outcome.airborne.len(),
            new_surface: outcome.surface.len(),
            infected: self.cabin.agents.infected_count(),
        });

        // ── Phase 4: clock and progress ───────────────────────────────────
        self.cabin.clock.advance();
        let reached = self.cabin.clock.current_tick;
        if reached.is_on_interval(self.config.report_interval_ticks) {
            let report = ProgressReport {
                tick:   reached,
                time:   self.cabin.now(),
                counts: self.cabin.infection_counts(),
            };
            info!(
                clock = %self.cabin.clock,
                infected = report.counts.infected,
                population = report.counts.population,
                front = report.counts.front,
                rear = report.counts.rear,
                "progress"
            );
            observer.on_progress(&report);
        }
    }

    /// Push the infected positions to the solver and install the field it
    /// returns.  On failure the previous field stays in place.
    fn refresh_field<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let sources = self.cabin.agents.infected_positions();
        let request = FieldRequest {
            time:       self.cabin.now(),
            iterations: self.config.solver_iterations,
        };

        let session = &mut self.session;
        let result = session
            .push_sources(&sources)
            .and_then(|()| session.compute_field(&request));

        match result {
            Ok(field) => {
                self.field_refreshes += 1;
                observer.on_field_refresh(now, &field);
                self.cabin.install_field(field);
            }
            Err(e) => {
                self.refresh_failures += 1;
                warn!(tick = %now, sources = sources.len(), error = %e, "field refresh failed, keeping previous field");
                observer.on_field_error(now, &e);
            }
        }
    }
}
