//! Ports the form controller talks to when it accepts a submission.

use uuid::Uuid;

use super::{Equipment, EquipmentId};

/// Destination for accepted equipment.
///
/// The catalogue store is the production sink. Any `FnMut(Equipment)`
/// closure is a sink too, which keeps tests and adapters light.
#[cfg_attr(test, mockall::automock)]
pub trait EquipmentSink {
    /// Take ownership of a freshly validated item.
    fn append(&mut self, item: Equipment);
}

impl<F> EquipmentSink for F
where
    F: FnMut(Equipment),
{
    fn append(&mut self, item: Equipment) {
        self(item);
    }
}

/// Source of identifiers for newly created items.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    /// Produce an identifier not handed out before.
    fn next_id(&mut self) -> EquipmentId;
}

/// Random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> EquipmentId {
        EquipmentId::random()
    }
}

/// Deterministic identifiers counting up from a starting value.
///
/// ```
/// use catalogue::domain::{IdGenerator, SequentialIdGenerator};
///
/// let mut ids = SequentialIdGenerator::starting_at(41);
/// assert_eq!(
///     ids.next_id().to_string(),
///     "00000000-0000-0000-0000-000000000029"
/// );
/// ```
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    /// Start counting at `first`.
    #[must_use]
    pub const fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EquipmentId {
        let id = EquipmentId::from_uuid(Uuid::from_u128(self.next));
        self.next = self.next.saturating_add(1);
        id
    }
}
