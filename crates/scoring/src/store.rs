use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::{BoatRating, RaceResult};

type RaceKey = (Uuid, u32);

#[derive(Default)]
struct StoreInner {
    /// Every rating row ever written, inactive rows included (soft delete).
    ratings: RwLock<Vec<BoatRating>>,
    /// Raw race entries keyed by (regatta, race number).
    races: RwLock<HashMap<RaceKey, Vec<RaceResult>>>,
}

/// The engine's only mutable state: boat ratings and raw race entries.
///
/// Reads share the lock; writes take it exclusively, which serializes
/// concurrent upserts of the same (system, sail number) key. Cheap to clone
/// and hand to request handlers.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ratings(&self) -> RwLockReadGuard<'_, Vec<BoatRating>> {
        read(&self.inner.ratings)
    }

    pub(crate) fn ratings_mut(&self) -> RwLockWriteGuard<'_, Vec<BoatRating>> {
        write(&self.inner.ratings)
    }

    pub(crate) fn races(&self) -> RwLockReadGuard<'_, HashMap<RaceKey, Vec<RaceResult>>> {
        read(&self.inner.races)
    }

    pub(crate) fn races_mut(&self) -> RwLockWriteGuard<'_, HashMap<RaceKey, Vec<RaceResult>>> {
        write(&self.inner.races)
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
