//! Deferred spawns and despawns for one step.
//!
//! Systems never add or remove entities while queries are running. They
//! record the change here and the buffer is applied once, at the end of
//! the step.

use std::collections::HashSet;

use hecs::{CommandBuffer, DynamicBundle, Entity, World};

#[derive(Default)]
pub struct CommitBuffer {
    commands: CommandBuffer,
    retired: HashSet<Entity>,
}

impl CommitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an entity for creation at commit time.
    pub fn spawn(&mut self, bundle: impl DynamicBundle) {
        self.commands.spawn(bundle);
    }

    /// Mark an entity for removal. Returns false if it was already marked.
    pub fn retire(&mut self, entity: Entity) -> bool {
        if self.retired.insert(entity) {
            self.commands.despawn(entity);
            true
        } else {
            false
        }
    }

    /// True when the entity will be removed at commit.
    pub fn is_retired(&self, entity: Entity) -> bool {
        self.retired.contains(&entity)
    }

    /// Apply all queued changes to the world and reset the buffer.
    pub fn apply(&mut self, world: &mut World) {
        self.commands.run_on(world);
        self.retired.clear();
    }
}
