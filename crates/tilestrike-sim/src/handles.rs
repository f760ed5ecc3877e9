//! Conversion between hecs handles and the serializable `EntityId`.
//!
//! hecs handles carry a generation, so an id taken from a despawned
//! entity never resolves to a newer entity reusing the same slot.

use hecs::Entity;

use tilestrike_core::types::EntityId;

pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

pub fn entity_from_id(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
