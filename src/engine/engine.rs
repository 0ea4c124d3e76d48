use super::*;
use crate::Ending;
use crate::Error;
use crate::Graph;
use crate::Outcome;
use crate::Params;
use crate::Partition;
use crate::Result;
use crate::Seed;
use crate::State;
use crate::Step;
use crate::Strategy;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Drives one match from setup to its [`Outcome`].
///
/// A single generator seeded from `params.seed` is threaded through every
/// random decision in order: graph seed, partition, one seed per seat, then
/// one focal draw per turn. Equal parameters and strategies therefore replay
/// the exact same match.
///
/// Each turn:
/// 1. draw a focal node uniformly
/// 2. hand it to the seat playing its label
/// 3. validate the answer: `None`, the focal node, or a neighbour
/// 4. apply and record a real conversion
///
/// Before every turn the match ends on fixation, else on the step limit.
pub struct Engine {
    params: Params,
    rng: SmallRng,
    state: State,
    seats: Vec<Seat>,
    owners: Vec<usize>,
    observer: Box<dyn Observer>,
    step: Step,
}

impl Engine {
    /// Builds the graph, splits it between seats, and initializes strategies.
    ///
    /// `strategies[i]` plays seat `i`, which holds initial group `i` under
    /// label `params.order[i]`. The order only renames groups; it never moves
    /// a player to another group.
    pub fn new(params: Params, strategies: Vec<Box<dyn Strategy>>) -> Result<Self> {
        params.validate()?;
        if strategies.len() != params.players {
            return Err(Error::parameter(format!(
                "{} strategies for {} players",
                strategies.len(),
                params.players
            )));
        }
        let mut rng = SmallRng::seed_from_u64(params.seed);
        let graph = Graph::barabasi(params.nodes, params.attachment, rng.random::<Seed>())?;
        let partition = Partition::new(params.players, params.order.clone())?;
        let labels = partition.assign(&graph, &mut rng)?;
        let state = State::new(graph, params.players, labels)?;
        let mut seats = strategies
            .into_iter()
            .enumerate()
            .map(|(i, strategy)| Seat::new(i, partition.label(i), strategy))
            .collect::<Vec<Seat>>();
        let mut owners = vec![0; params.players];
        for seat in seats.iter() {
            owners[seat.label().index()] = seat.player();
        }
        for seat in seats.iter_mut() {
            let seed = rng.random::<Seed>();
            seat.initialize(state.view(), seed);
        }
        log::debug!(
            "[engine] {} seats on {}: {}",
            seats.len(),
            state.graph(),
            seats
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self {
            params,
            rng,
            state,
            seats,
            owners,
            observer: Box::new(Silent),
            step: 0,
        })
    }
    /// Installs the hook run after each turn when `params.interactive` is set.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }
}

/// Accessors.
impl Engine {
    pub fn params(&self) -> &Params {
        &self.params
    }
    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    /// Turns taken so far.
    pub fn step(&self) -> Step {
        self.step
    }
    /// Why the match is over, if it is.
    pub fn ending(&self) -> Option<Ending> {
        if let Some(label) = self.state.fixation() {
            return Some(Ending::Fixation(label));
        }
        match self.params.steps {
            Some(limit) if self.step >= limit => Some(Ending::StepLimit),
            _ => None,
        }
    }
}

/// Turn loop.
impl Engine {
    /// Plays turns until fixation or the step limit.
    pub fn play(mut self) -> Result<Outcome> {
        loop {
            if let Some(ending) = self.ending() {
                return Ok(self.finish(ending));
            }
            self.turn()?;
        }
    }
    /// Plays exactly one turn, or nothing once the match has ended.
    ///
    /// A strategy answering with anything other than a pass, itself, or a
    /// neighbour fails the turn with [`Error::InvalidMove`] and leaves the
    /// state untouched.
    pub fn turn(&mut self) -> Result<Option<Turn>> {
        if self.ending().is_some() {
            return Ok(None);
        }
        let step = self.step;
        let focal = self.rng.random_range(0..self.state.graph().node_count());
        let label = self.state.label(focal);
        let owner = self.owners[label.index()];
        let choice = self.seats[owner].decide(self.state.view(), focal);
        let record = match choice {
            None => None,
            Some(target) if target == focal => None,
            Some(target) if self.state.graph().is_neighbor(focal, target) => {
                Some(self.state.convert(step, focal, target))
            }
            Some(target) => {
                log::error!(
                    "[engine] {} answered {} for focal {} in step {}",
                    self.seats[owner],
                    target,
                    focal,
                    step
                );
                return Err(Error::InvalidMove {
                    step,
                    focal,
                    target,
                });
            }
        };
        self.step += 1;
        let turn = Turn {
            step,
            focal,
            label,
            choice,
            record,
        };
        log::trace!("[engine] {}", turn);
        if let Some(record) = record {
            log::debug!("[engine] {}", record);
        }
        if self.params.interactive {
            self.observer.observe(&self.state, &turn);
        }
        Ok(Some(turn))
    }
    fn finish(self, ending: Ending) -> Outcome {
        let counts = self.state.counts();
        let standings = self
            .seats
            .iter()
            .map(|seat| seat.standing(counts[seat.label().index()]))
            .collect();
        let outcome = Outcome::new(self.params, ending, self.step, self.state, standings);
        log::info!("[engine] {}", outcome);
        outcome
    }
}
