pub mod bytesconv;
pub mod journal;
pub mod listext;
pub mod reconcile;
pub mod registry;
pub mod stringext;
pub mod timeext;
pub mod value_cmp;

// Re-export the main entry points
pub use reconcile::{reconcile, MatchList};
pub use value_cmp::{deep_equal, key_comparator, scalar_ord};
