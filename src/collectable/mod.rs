//! Collectables: catalog lookup, spawning, and collection tracking.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`catalog`] | identifier → visual category, with a lenient default |
//! | [`spawner`] | "Food" placements → live `Collectable` entities |
//! | [`tracker`] | collected sequence, win condition, hero-overlap handling |

pub mod catalog;
pub mod spawner;
pub mod tracker;

pub use catalog::{category_of, DEFAULT_CATEGORY};
pub use spawner::{spawn_collectables, Collectable};
pub use tracker::{collection_system, CollectionTracker};
