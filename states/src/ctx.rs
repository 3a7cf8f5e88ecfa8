use std::{
    any::{TypeId, type_name},
    collections::BTreeMap,
    fmt::{Debug, Formatter},
};

use log::{debug, error, info, warn};
use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandSnapshot, Compute, ComputeDeps, Dep, Error, Graph, LatestOnlyUpdater, State,
    StateRuntime, StateSyncStatus, TaskHandle, TaskId, TopologyError, Updater,
    command::CommandFuture,
    runtime::Update,
};

/// Upper bound on re-running computes that dirtied each other within one `run_computed`.
const MAX_COMPUTE_PASSES: usize = 8;

pub(crate) struct ComputeSlot {
    pub(crate) compute: Box<dyn Compute>,
    pub(crate) deps: ComputeDeps,
    pub(crate) status: StateSyncStatus,
}

/// Owner of every state, compute, command and in-flight task of one mounted view.
///
/// A frame is expected to call `sync_computes` (apply async results), render, then
/// `run_computed` (re-derive whatever the frame dirtied).
pub struct StateCtx {
    runtime: StateRuntime,

    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    graph: Graph<TypeId>,
    order: Option<Vec<TypeId>>,

    tasks: BTreeMap<TypeId, TaskHandle>,
    generation: u64,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("tasks", &self.tasks.len())
            .field("generation", &self.generation)
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self {
            runtime: StateRuntime::new(),
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            graph: Graph::new(),
            order: None,
            tasks: BTreeMap::new(),
            generation: 0,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let deps = compute.deps();
        for dep in deps.iter() {
            self.graph.route_to(dep, id);
        }
        self.computes.insert(
            id,
            ComputeSlot {
                compute: Box::new(compute),
                deps,
                status: StateSyncStatus::BeforeInit,
            },
        );
        self.order = None;
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// Raw updater; writes land on the next `sync_computes`.
    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access for UI events. Every compute depending on `T` is marked dirty.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_dependents_dirty(id);
        match self
            .states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
        {
            Some(state) => state,
            None => panic!("{}", Error::state_not_found::<T>()),
        }
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
            .ok_or_else(Error::compute_not_found::<T>)
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_cached::<T>().ok()
    }

    pub fn compute_status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes
            .get(&TypeId::of::<T>())
            .map(|slot| slot.status)
    }

    /// Runs command `C` in the background. A still-running earlier dispatch of `C` is cancelled.
    pub fn dispatch<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        if !self.commands.contains_key(&id) {
            warn!("dispatch: command {} is not recorded", type_name::<C>());
            return;
        }

        if let Some(previous) = self.tasks.remove(&id) {
            debug!(
                "dispatch: cancelling {} generation {}",
                type_name::<C>(),
                previous.id().generation()
            );
            previous.cancel();
        }

        self.generation += 1;
        let token = CancellationToken::new();
        let snapshot = self.snapshot();
        let updater = LatestOnlyUpdater::new(self.runtime.updater(), token.clone());

        let Some(command) = self.commands.get(&id) else {
            return;
        };
        let future = command.run(snapshot, updater, token.clone());

        info!(
            "dispatch: {} generation {}",
            type_name::<C>(),
            self.generation
        );
        self.tasks
            .insert(id, TaskHandle::new(TaskId::new(id, self.generation), token));
        spawn_task(future);
    }

    pub fn task<C: Command>(&self) -> Option<&TaskHandle> {
        self.tasks.get(&TypeId::of::<C>())
    }

    /// True while the latest dispatch of `C` has not been cancelled.
    pub fn is_task_active<C: Command>(&self) -> bool {
        self.task::<C>().is_some_and(|handle| !handle.is_cancelled())
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snapshot = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snapshot.insert_cloned(*id, value);
            }
        }
        for (id, slot) in &self.computes {
            if let Some(value) = slot.compute.snapshot() {
                snapshot.insert_cloned(*id, value);
            }
        }
        snapshot
    }

    /// Applies every pending updater write.
    pub fn sync_computes(&mut self) {
        let updates: Vec<Update> = self.runtime.drain().collect();
        for update in updates {
            self.apply(update);
        }
    }

    fn apply(&mut self, update: Update) {
        let Update { id, name, value } = update;

        if let Some(slot) = self.computes.get_mut(&id) {
            slot.compute.assign_box(value);
        } else if let Some(state) = self.states.get_mut(&id) {
            state.assign_box(value);
        } else {
            warn!("sync_computes: no state or compute registered for {name}");
            return;
        }

        self.mark_dependents_dirty(id);
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        let dependents: Vec<TypeId> = self.graph.dependents(id).copied().collect();
        for dependent in dependents {
            if let Some(slot) = self.computes.get_mut(&dependent) {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }

    /// Checks the dependency graph and caches the evaluation order.
    pub fn verify_deps(&mut self) -> Result<(), TopologyError<TypeId>> {
        self.order = None;
        self.compute_order().map(|_| ())
    }

    fn compute_order(&mut self) -> Result<Vec<TypeId>, TopologyError<TypeId>> {
        if let Some(order) = &self.order {
            return Ok(order.clone());
        }

        let sorted = self.graph.topology_sort()?;
        let mut order: Vec<TypeId> = self
            .computes
            .keys()
            .filter(|id| !sorted.contains(id))
            .copied()
            .collect();
        order.extend(sorted.into_iter().filter(|id| self.computes.contains_key(id)));

        self.order = Some(order.clone());
        Ok(order)
    }

    /// Re-runs every dirty compute in dependency order.
    ///
    /// Writes a compute makes are applied before the next compute runs, so a single call
    /// leaves the whole pipeline consistent.
    pub fn run_computed(&mut self) {
        let order = match self.compute_order() {
            Ok(order) => order,
            Err(err) => {
                error!("run_computed: {err}");
                return;
            }
        };

        for _ in 0..MAX_COMPUTE_PASSES {
            let mut ran_any = false;

            for id in &order {
                let Some(slot) = self.computes.get(id) else {
                    continue;
                };
                if !slot.status.needs_run() {
                    continue;
                }
                debug_assert!(
                    slot.deps.iter().all(|dep| self.states.contains_key(&dep)
                        || self.computes.contains_key(&dep)),
                    "compute has an unregistered dependency"
                );

                slot.compute
                    .compute(Dep::new(&self.states, &self.computes), self.runtime.updater());

                if let Some(slot) = self.computes.get_mut(id) {
                    slot.status = StateSyncStatus::Clean;
                }
                self.sync_computes();
                ran_any = true;
            }

            if !ran_any {
                return;
            }
        }

        warn!("run_computed: computes still dirty after {MAX_COMPUTE_PASSES} passes");
    }

    /// Cancels every task. Late results are dropped by their `LatestOnlyUpdater`.
    pub fn teardown(&mut self) {
        for (_, handle) in std::mem::take(&mut self.tasks) {
            handle.cancel();
        }
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_task(future: CommandFuture) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => drop(handle.spawn(future)),
        Err(err) => error!("dispatch: no tokio runtime to spawn on: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_task(future: CommandFuture) {
    wasm_bindgen_futures::spawn_local(future);
}
