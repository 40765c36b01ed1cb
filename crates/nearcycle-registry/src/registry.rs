//! The (material, cell) → actors index.

use indexmap::IndexSet;
use nearcycle_core::{ActorId, MaterialType};
use nearcycle_hex::{HexCell, HexProfile};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, RwLock};

/// Number of per-actor mutex stripes guarding re-indexing.
const ACTOR_STRIPES: usize = 64;

/// Composite bucket key: one material at one cell (the cell carries its
/// resolution).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct BucketKey {
    material: MaterialType,
    cell: HexCell,
}

/// What the registry currently knows about an indexed actor; needed to
/// locate the stale buckets on re-index.
#[derive(Clone, Copy, Debug)]
struct IndexedActor {
    material: MaterialType,
    profile: HexProfile,
}

/// The spatial index interface.
///
/// Modeled as a trait so the backing structure (the in-process
/// [`ShardedRegistry`], or an external key-value store) can vary without
/// touching the matching pipeline.
pub trait Registry: Send + Sync {
    /// Index an actor under every cell of its profile, replacing any prior
    /// index entries for the same actor.
    ///
    /// Re-indexing the same actor is serialized; a lookup at any single
    /// resolution observes the actor under exactly one cell throughout.
    fn upsert(&self, actor: ActorId, material: MaterialType, profile: &HexProfile);

    /// Drop every index entry for an actor. No-op for unknown actors.
    fn remove(&self, actor: ActorId);

    /// The actors indexed under one (material, cell) bucket, in insertion
    /// order. Read-only; never blocks other lookups.
    fn lookup(&self, material: MaterialType, cell: &HexCell) -> Vec<ActorId>;
}

/// In-memory registry partitioned across `RwLock` shards.
///
/// Buckets are hashed onto shards; a lookup takes one shard read lock, an
/// upsert takes write locks only on the shards its buckets live in.
/// Per-actor stripes serialize concurrent re-indexes of the same actor
/// while leaving distinct actors fully concurrent.
pub struct ShardedRegistry {
    shards: Box<[RwLock<HashMap<BucketKey, IndexSet<ActorId>>>]>,
    stripes: Box<[Mutex<HashMap<ActorId, IndexedActor>>]>,
}

impl ShardedRegistry {
    /// Create a registry with the given shard count (clamped to at least 1).
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let shards = (0..shard_count)
            .map(|_| RwLock::new(HashMap::new()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let stripes = (0..ACTOR_STRIPES)
            .map(|_| Mutex::new(HashMap::new()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { shards, stripes }
    }

    /// Number of actors currently indexed.
    pub fn actor_count(&self) -> usize {
        self.stripes
            .iter()
            .map(|s| s.lock().expect("actor stripe poisoned").len())
            .sum()
    }

    fn shard_for(&self, key: &BucketKey) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.shards.len()
    }

    fn stripe_for(&self, actor: ActorId) -> usize {
        (actor.0 as usize) % self.stripes.len()
    }

    fn insert_into(map: &mut HashMap<BucketKey, IndexSet<ActorId>>, key: BucketKey, actor: ActorId) {
        map.entry(key).or_default().insert(actor);
    }

    /// Remove an actor from a bucket, dropping the bucket when it empties
    /// so stale cells leave no ghost keys behind.
    fn remove_from(map: &mut HashMap<BucketKey, IndexSet<ActorId>>, key: BucketKey, actor: ActorId) {
        if let Some(set) = map.get_mut(&key) {
            // shift_remove keeps the remaining insertion order intact.
            set.shift_remove(&actor);
            if set.is_empty() {
                map.remove(&key);
            }
        }
    }

    /// Move an actor from one bucket to another under both shards' write
    /// locks, so no reader observes the actor in neither or both.
    fn swap_buckets(&self, stale: BucketKey, fresh: BucketKey, actor: ActorId) {
        let i = self.shard_for(&stale);
        let j = self.shard_for(&fresh);
        if i == j {
            let mut shard = self.shards[i].write().expect("registry shard poisoned");
            Self::remove_from(&mut shard, stale, actor);
            Self::insert_into(&mut shard, fresh, actor);
            return;
        }
        // Acquire in shard order so concurrent swaps cannot deadlock.
        let (lo, hi) = (i.min(j), i.max(j));
        let mut lo_guard = self.shards[lo].write().expect("registry shard poisoned");
        let mut hi_guard = self.shards[hi].write().expect("registry shard poisoned");
        let (stale_map, fresh_map) = if i == lo {
            (&mut *lo_guard, &mut *hi_guard)
        } else {
            (&mut *hi_guard, &mut *lo_guard)
        };
        Self::remove_from(stale_map, stale, actor);
        Self::insert_into(fresh_map, fresh, actor);
    }
}

impl Registry for ShardedRegistry {
    fn upsert(&self, actor: ActorId, material: MaterialType, profile: &HexProfile) {
        let mut stripe = self.stripes[self.stripe_for(actor)]
            .lock()
            .expect("actor stripe poisoned");
        match stripe.get(&actor).copied() {
            None => {
                for cell in profile.cells() {
                    let key = BucketKey { material, cell };
                    let mut shard =
                        self.shards[self.shard_for(&key)].write().expect("registry shard poisoned");
                    Self::insert_into(&mut shard, key, actor);
                }
            }
            Some(prior) => {
                for (stale_cell, fresh_cell) in prior.profile.cells().zip(profile.cells()) {
                    let stale = BucketKey {
                        material: prior.material,
                        cell: stale_cell,
                    };
                    let fresh = BucketKey {
                        material,
                        cell: fresh_cell,
                    };
                    if stale == fresh {
                        continue;
                    }
                    self.swap_buckets(stale, fresh, actor);
                }
            }
        }
        stripe.insert(
            actor,
            IndexedActor {
                material,
                profile: *profile,
            },
        );
    }

    fn remove(&self, actor: ActorId) {
        let mut stripe = self.stripes[self.stripe_for(actor)]
            .lock()
            .expect("actor stripe poisoned");
        let Some(prior) = stripe.remove(&actor) else {
            return;
        };
        for cell in prior.profile.cells() {
            let key = BucketKey {
                material: prior.material,
                cell,
            };
            let mut shard =
                self.shards[self.shard_for(&key)].write().expect("registry shard poisoned");
            Self::remove_from(&mut shard, key, actor);
        }
    }

    fn lookup(&self, material: MaterialType, cell: &HexCell) -> Vec<ActorId> {
        let key = BucketKey {
            material,
            cell: *cell,
        };
        let shard = self.shards[self.shard_for(&key)].read().expect("registry shard poisoned");
        shard
            .get(&key)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}
