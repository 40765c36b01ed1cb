//! Buyer and seller records, and the store the registry hydrates from.

use nearcycle_core::{ActorId, MaterialType};
use nearcycle_hex::AddressProfile;
use std::collections::HashMap;
use std::sync::RwLock;

/// A registered buyer organization — a matchable target.
#[derive(Clone, Debug)]
pub struct BuyerRecord {
    /// Actor identifier.
    pub id: ActorId,
    /// Organization display name.
    pub org_name: String,
    /// The single material this organization accepts.
    pub material: MaterialType,
    /// Registered address with its derived cell ladder.
    pub address: AddressProfile,
    /// Contact number or address, passed through to matches verbatim.
    pub contact: String,
    /// Map link for the organization's location.
    pub location_url: String,
}

/// A registered seller household — a query origin, never a match target.
#[derive(Clone, Debug)]
pub struct SellerRecord {
    /// Actor identifier.
    pub id: ActorId,
    /// Login email, the key proximity requests arrive under.
    pub email: String,
    /// Registered address, if the household has completed address capture.
    pub address: Option<AddressProfile>,
}

/// Access to the actor records behind the spatial index.
///
/// The engine reads through this trait only; the backing store (in-memory
/// here, a database in the surrounding service) resolves records and may
/// suspend on I/O, but must never be called while a registry lock is held.
pub trait Directory: Send + Sync {
    /// Resolve a seller by email, matched case-insensitively.
    fn seller_by_email(&self, email: &str) -> Option<SellerRecord>;

    /// Resolve a buyer record by identifier.
    fn buyer(&self, id: ActorId) -> Option<BuyerRecord>;

    /// All buyer records, for registry hydration at startup.
    fn buyers(&self) -> Vec<BuyerRecord>;

    /// Insert or replace a buyer record.
    fn upsert_buyer(&self, record: BuyerRecord);

    /// Remove a buyer record, returning it if present.
    fn remove_buyer(&self, id: ActorId) -> Option<BuyerRecord>;

    /// Insert or replace a seller record.
    fn upsert_seller(&self, record: SellerRecord);
}

/// Process-local directory backed by `RwLock`ed maps.
#[derive(Default)]
pub struct InMemoryDirectory {
    sellers: RwLock<HashMap<String, SellerRecord>>,
    buyers: RwLock<HashMap<ActorId, BuyerRecord>>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    fn email_key(email: &str) -> String {
        email.trim().to_ascii_lowercase()
    }
}

impl Directory for InMemoryDirectory {
    fn seller_by_email(&self, email: &str) -> Option<SellerRecord> {
        self.sellers
            .read()
            .expect("seller map poisoned")
            .get(&Self::email_key(email))
            .cloned()
    }

    fn buyer(&self, id: ActorId) -> Option<BuyerRecord> {
        self.buyers.read().expect("buyer map poisoned").get(&id).cloned()
    }

    fn buyers(&self) -> Vec<BuyerRecord> {
        self.buyers
            .read()
            .expect("buyer map poisoned")
            .values()
            .cloned()
            .collect()
    }

    fn upsert_buyer(&self, record: BuyerRecord) {
        self.buyers
            .write()
            .expect("buyer map poisoned")
            .insert(record.id, record);
    }

    fn remove_buyer(&self, id: ActorId) -> Option<BuyerRecord> {
        self.buyers.write().expect("buyer map poisoned").remove(&id)
    }

    fn upsert_seller(&self, record: SellerRecord) {
        self.sellers
            .write()
            .expect("seller map poisoned")
            .insert(Self::email_key(&record.email), record);
    }
}
