//! Process-local storage. Everything here is lost on restart.

use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::{
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use uuid::Uuid;

use crate::models::{AuditEntry, CartItem, Message, Product, User};

#[derive(Debug, Default)]
pub struct StoreData {
    /// Catalog order: newest admin additions first, then seed order.
    pub products: Vec<Product>,
    pub users: HashMap<Uuid, User>,
    /// Keyed by owner (user or guest session id).
    pub carts: HashMap<Uuid, Vec<CartItem>>,
    pub transcripts: HashMap<Uuid, Vec<Message>>,
    pub audit: Vec<AuditEntry>,
    /// Last cart or chat activity per owner.
    pub last_seen: HashMap<Uuid, DateTime<Utc>>,
}

impl StoreData {
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub fn touch(&mut self, owner: Uuid) {
        self.last_seen.insert(owner, Utc::now());
    }

    /// Drops the cart and transcript of every guest idle since before `cutoff`.
    /// Registered users keep theirs.
    pub fn evict_idle_guests(&mut self, cutoff: DateTime<Utc>) -> usize {
        let idle: Vec<Uuid> = self
            .last_seen
            .iter()
            .filter(|(owner, seen)| **seen < cutoff && !self.users.contains_key(*owner))
            .map(|(owner, _)| *owner)
            .collect();
        for owner in &idle {
            self.carts.remove(owner);
            self.transcripts.remove(owner);
            self.last_seen.remove(owner);
        }
        idle.len()
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }
}

#[derive(Debug, Default)]
pub struct Store {
    data: RwLock<StoreData>,
}

impl Store {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            data: RwLock::new(StoreData {
                products,
                ..StoreData::default()
            }),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.data.write().await
    }
}

/// Periodically evicts guest sessions idle for longer than `ttl`.
pub fn spawn_guest_sweeper(store: Arc<Store>, ttl: TimeDelta, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let evicted = store.write().await.evict_idle_guests(Utc::now() - ttl);
            if evicted > 0 {
                tracing::info!(evicted, "idle guest sessions evicted");
            }
        }
    })
}
