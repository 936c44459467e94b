use std::{collections::HashMap, hash::Hash};

/// Page name to estimated rank.
pub type Ranks = HashMap<String, f64, ahash::RandomState>;

pub fn norm_1<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn norm_inf<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).fold(0.0, f64::max)
}
