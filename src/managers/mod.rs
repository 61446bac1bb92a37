// Pfoteneis state managers
// Managers handle stateful operations: the bookmarked location set.

pub mod bookmark_store;
