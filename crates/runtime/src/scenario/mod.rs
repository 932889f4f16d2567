//! Replayable scenarios built from [`motion_content::ScenarioSpec`].
//!
//! A scenario places characters on a [`GridMap`], gives them their own
//! routes, and forces scripted routes onto them at fixed ticks. Replaying
//! the same scenario always yields the same character traces.

use std::collections::BTreeMap;
use std::sync::Arc;

use motion_content::{CharacterSpec, ScenarioSpec};
use motion_core::{CharacterRef, CharacterState, MoveRoute, MovementFlags, Position, Tick};

use crate::error::{Result, RuntimeError};
use crate::oracle::GridMap;
use crate::runtime::{MapRuntime, RuntimeConfig, TickReport};

/// A route waiting for its tick.
#[derive(Clone, Debug)]
struct ScheduledRoute {
    at: Tick,
    reference: CharacterRef,
    name: String,
    route: Arc<MoveRoute>,
    frequency: u8,
}

/// A runtime plus the forced routes still to be applied.
pub struct Scenario {
    runtime: MapRuntime,
    schedule: Vec<ScheduledRoute>,
    cursor: usize,
}

impl Scenario {
    pub fn from_spec(spec: &ScenarioSpec, config: RuntimeConfig) -> Result<Self> {
        let routes: BTreeMap<&str, Arc<MoveRoute>> = spec
            .routes
            .iter()
            .map(|(name, route)| (name.as_str(), Arc::new(route.to_route())))
            .collect();
        let route = |name: &str| {
            routes
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownRoute(name.to_string()))
        };

        let map = GridMap::from_spec(&spec.map)?;
        let mut runtime = MapRuntime::builder(map).config(config).build();
        for character in &spec.characters {
            let custom = character.route.as_deref().map(route).transpose()?;
            runtime.spawn_with(
                character.kind.into(),
                Position::new(character.position.0, character.position.1),
                |state| configure(state, character, custom),
            )?;
        }

        let mut schedule = spec
            .forced
            .iter()
            .map(|forced| {
                Ok(ScheduledRoute {
                    at: Tick(forced.at_tick),
                    reference: CharacterRef::from_code(forced.character),
                    name: forced.route.clone(),
                    route: route(&forced.route)?,
                    frequency: forced.frequency,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        schedule.sort_by_key(|scheduled| scheduled.at);

        tracing::info!(
            characters = spec.characters.len(),
            routes = routes.len(),
            forced = schedule.len(),
            "scenario loaded"
        );

        Ok(Self {
            runtime,
            schedule,
            cursor: 0,
        })
    }

    pub fn runtime(&self) -> &MapRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut MapRuntime {
        &mut self.runtime
    }

    /// Forced routes not applied yet.
    pub fn remaining_scheduled(&self) -> usize {
        self.schedule.len() - self.cursor
    }

    /// Applies the routes due at the current frame, then ticks once.
    pub fn step(&mut self) -> Result<TickReport> {
        let frame = self.runtime.frame();
        while let Some(scheduled) = self.schedule.get(self.cursor) {
            if scheduled.at > frame {
                break;
            }
            let id = self.runtime.force_move_route(
                scheduled.reference,
                None,
                Arc::clone(&scheduled.route),
                scheduled.frequency,
            )?;
            tracing::debug!(character = %id, route = %scheduled.name, "scheduled route forced");
            self.cursor += 1;
        }
        Ok(self.runtime.tick())
    }

    pub fn run(&mut self, ticks: usize) -> Result<Vec<TickReport>> {
        (0..ticks).map(|_| self.step()).collect()
    }
}

fn configure(
    state: CharacterState,
    spec: &CharacterSpec,
    custom: Option<Arc<MoveRoute>>,
) -> CharacterState {
    let mut state = state
        .with_facing(spec.facing)
        .with_layer(spec.layer)
        .with_anim_type(spec.anim);
    if let Some(speed) = spec.speed {
        state = state.with_speed(speed);
    }
    if let Some(frequency) = spec.frequency {
        state = state.with_frequency(frequency);
    }
    if spec.through {
        state = state.with_flags(MovementFlags::THROUGH);
    }
    if spec.flying {
        state = state.with_flags(MovementFlags::FLYING);
    }
    match custom {
        Some(route) => state.with_custom_route(route),
        None => state,
    }
}
