//! Weighted rendezvous registry and lookups.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use rendez_hash::Hasher64;
use rendez_types::WeightedMember;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::PlacementError;
use crate::score::{score, weighted_score};
use crate::select::{Scored, best, select_top, select_top_ranked};

/// A change of ownership for one key between two member sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// The key whose owners changed.
    pub key: Vec<u8>,
    /// A member that owned the key before the change.
    pub from: String,
    /// A member that owns the key after the change.
    pub to: String,
}

/// Weighted rendezvous (HRW) placement over a mutable member set.
///
/// Every lookup scores each member against the key and picks the highest
/// scores, so the result depends only on the member set and the hash
/// provider. Adding a member only takes keys for itself; removing one only
/// reassigns the keys it owned.
///
/// All methods take `&self`. The registry sits behind a single `RwLock`:
/// lookups share it, `add`/`remove` hold it exclusively for one map update.
pub struct Rendezvous<M> {
    /// Registered members keyed by name.
    members: RwLock<HashMap<String, M>>,
    /// Scoring hash provider.
    hasher: Arc<dyn Hasher64>,
}

impl<M> Rendezvous<M>
where
    M: WeightedMember + Clone,
{
    /// Create an engine seeded with `members`.
    ///
    /// Duplicate names keep the first occurrence. Fails if any member has an
    /// invalid weight.
    pub fn new(
        members: impl IntoIterator<Item = M>,
        config: Config,
    ) -> Result<Self, PlacementError> {
        let mut map = HashMap::new();
        for member in members {
            validate_weight(&member)?;
            map.entry(member.name().to_string()).or_insert(member);
        }
        debug!(members = map.len(), "created rendezvous registry");

        Ok(Self {
            members: RwLock::new(map),
            hasher: config.resolve_hasher(),
        })
    }

    /// Create an engine with the default hash provider.
    pub fn with_members(members: impl IntoIterator<Item = M>) -> Result<Self, PlacementError> {
        Self::new(members, Config::default())
    }

    /// Add a member. Adding a name that is already present does nothing.
    ///
    /// Returns `true` if the member was inserted. There is no in-place weight
    /// update: remove the member first to change it.
    pub fn add(&self, member: M) -> Result<bool, PlacementError> {
        validate_weight(&member)?;
        let mut members = self.members.write().expect("lock poisoned");
        if members.contains_key(member.name()) {
            trace!(name = member.name(), "member already present");
            return Ok(false);
        }
        debug!(name = member.name(), weight = member.weight(), "added member");
        members.insert(member.name().to_string(), member);
        Ok(true)
    }

    /// Remove a member by name. Removing an absent name does nothing.
    ///
    /// Returns `true` if a member was removed.
    pub fn remove(&self, name: &str) -> bool {
        let removed = self
            .members
            .write()
            .expect("lock poisoned")
            .remove(name)
            .is_some();
        if removed {
            debug!(name, "removed member");
        }
        removed
    }

    /// Return the member that owns `key`, or `None` if the registry is empty.
    ///
    /// Equal scores resolve to the lexicographically smallest name.
    pub fn locate_key(&self, key: &[u8]) -> Option<M> {
        let members = self.members.read().expect("lock poisoned");
        let winner = best(members.iter().map(|(name, m)| Scored {
            name: name.as_str(),
            score: weighted_score(self.hasher.as_ref(), name, m.weight(), key),
        }))?;
        trace!(owner = winner.name, score = winner.score, "located key");
        members.get(winner.name).cloned()
    }

    /// Return the `count` members with the highest scores for `key`.
    ///
    /// The result is in no particular order; use
    /// [`closest_n_ranked`](Self::closest_n_ranked) when the order matters.
    /// Fails with [`PlacementError::InsufficientMembers`] if `count` exceeds
    /// the number of members.
    pub fn closest_n(&self, key: &[u8], count: usize) -> Result<Vec<M>, PlacementError> {
        self.closest_with(key, count, select_top)
    }

    /// Like [`closest_n`](Self::closest_n), ordered from highest score to lowest.
    pub fn closest_n_ranked(&self, key: &[u8], count: usize) -> Result<Vec<M>, PlacementError> {
        self.closest_with(key, count, select_top_ranked)
    }

    fn closest_with(
        &self,
        key: &[u8],
        count: usize,
        select: fn(&mut Vec<Scored<'_>>, usize),
    ) -> Result<Vec<M>, PlacementError> {
        let members = self.members.read().expect("lock poisoned");
        if count > members.len() {
            return Err(PlacementError::InsufficientMembers {
                requested: count,
                available: members.len(),
            });
        }

        let mut scores = self.scored(&members, key);
        select(&mut scores, count);
        trace!(count, "selected closest members");

        Ok(scores
            .iter()
            .filter_map(|s| members.get(s.name).cloned())
            .collect())
    }

    /// Score every member of `members` for `key`.
    fn scored<'a>(&self, members: &'a HashMap<String, M>, key: &[u8]) -> Vec<Scored<'a>> {
        members
            .iter()
            .map(|(name, m)| Scored {
                name: name.as_str(),
                score: weighted_score(self.hasher.as_ref(), name, m.weight(), key),
            })
            .collect()
    }

    /// Return a point-in-time copy of all members, in no particular order.
    pub fn members(&self) -> Vec<M> {
        self.members
            .read()
            .expect("lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    /// Return a copy of the member registered under `name`.
    pub fn get(&self, name: &str) -> Option<M> {
        self.members
            .read()
            .expect("lock poisoned")
            .get(name)
            .cloned()
    }

    /// Return whether a member named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.members
            .read()
            .expect("lock poisoned")
            .contains_key(name)
    }

    /// Return the number of members.
    pub fn len(&self) -> usize {
        self.members.read().expect("lock poisoned").len()
    }

    /// Return whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Score `member` for `key` with this engine's hash provider.
    ///
    /// `member` does not have to be registered.
    pub fn score(&self, member: &M, key: &[u8]) -> f64 {
        score(self.hasher.as_ref(), member, key)
    }

    /// Compute which keys change owners between two member sets.
    ///
    /// For each key, the top `replicas` owners are computed in both `old`
    /// and `new` (clamped to each side's member count). Members that gained
    /// the key are paired one-to-one, best rank first, with members that
    /// lost it. A gained owner with no lost owner left to pair with (the
    /// replica set grew) produces no migration.
    pub fn diff<K: AsRef<[u8]>>(
        old: &Self,
        new: &Self,
        keys: &[K],
        replicas: usize,
    ) -> Vec<Migration> {
        let mut migrations = Vec::new();

        for key in keys {
            let key = key.as_ref();
            let old_owners = old.owner_names(key, replicas);
            let new_owners = new.owner_names(key, replicas);

            let gained = new_owners.iter().filter(|n| !old_owners.contains(n));
            let lost = old_owners.iter().filter(|o| !new_owners.contains(o));
            for (to, from) in gained.zip(lost) {
                migrations.push(Migration {
                    key: key.to_vec(),
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }

        debug!(keys = keys.len(), migrations = migrations.len(), "computed placement diff");
        migrations
    }

    /// Names of the top `replicas` owners of `key`, best first, clamped to
    /// the member count under a single read of the registry.
    fn owner_names(&self, key: &[u8], replicas: usize) -> Vec<String> {
        let members = self.members.read().expect("lock poisoned");
        let count = replicas.min(members.len());
        let mut scores = self.scored(&members, key);
        select_top_ranked(&mut scores, count);
        scores.iter().map(|s| s.name.to_string()).collect()
    }
}

impl<M> Clone for Rendezvous<M>
where
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            members: RwLock::new(self.members.read().expect("lock poisoned").clone()),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<M> fmt::Debug for Rendezvous<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self
            .members
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort_unstable();
        f.debug_struct("Rendezvous").field("members", &names).finish()
    }
}

fn validate_weight<M: WeightedMember>(member: &M) -> Result<(), PlacementError> {
    let weight = member.weight();
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(PlacementError::InvalidWeight {
            name: member.name().to_string(),
            weight,
        })
    }
}
