use fxhash::FxHashMap as HashMap;

use crate::models::{Cluster, Feature, RandomizedCluster};

///
/// RecordStore struct, an in-memory `chromosome -> id -> record` mapping built
/// once per input file.
///
/// The first record seen for an id on a chromosome wins; later records with the
/// same id on that chromosome are dropped without error.
///
#[derive(Clone, Debug)]
pub struct RecordStore<T> {
    chroms: HashMap<String, HashMap<String, T>>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        RecordStore {
            chroms: HashMap::default(),
        }
    }
}

impl<T> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Insert a record under `(chr, id)`.
    ///
    /// # Returns
    /// `true` if the record was stored, `false` if the id was already present
    /// on that chromosome and the record was discarded.
    pub fn insert(&mut self, chr: &str, id: &str, record: T) -> bool {
        let records = self.chroms.entry(chr.to_string()).or_default();
        if records.contains_key(id) {
            return false;
        }
        records.insert(id.to_string(), record);
        true
    }

    pub fn get(&self, chr: &str, id: &str) -> Option<&T> {
        self.chroms.get(chr).and_then(|records| records.get(id))
    }

    /// All records on one chromosome.
    pub fn chrom(&self, chr: &str) -> Option<&HashMap<String, T>> {
        self.chroms.get(chr)
    }

    ///
    /// Iterate chromosomes along with their records
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = (&String, &HashMap<String, T>)> {
        self.chroms.iter()
    }

    pub fn contains_chrom(&self, chr: &str) -> bool {
        self.chroms.contains_key(chr)
    }

    pub fn num_chroms(&self) -> usize {
        self.chroms.len()
    }

    /// Total number of records over all chromosomes.
    pub fn len(&self) -> usize {
        self.chroms.values().map(|records| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.chroms.values().flat_map(|records| records.values())
    }
}

impl FromIterator<Feature> for RecordStore<Feature> {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for feature in iter {
            let (chr, id) = (feature.chr.clone(), feature.id.clone());
            store.insert(&chr, &id, feature);
        }
        store
    }
}

impl FromIterator<Cluster> for RecordStore<Cluster> {
    fn from_iter<I: IntoIterator<Item = Cluster>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for cluster in iter {
            let (chr, name) = (cluster.chr.clone(), cluster.name.clone());
            store.insert(&chr, &name, cluster);
        }
        store
    }
}

impl FromIterator<RandomizedCluster> for RecordStore<RandomizedCluster> {
    fn from_iter<I: IntoIterator<Item = RandomizedCluster>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for cluster in iter {
            let (chr, name) = (cluster.chr.clone(), cluster.name.clone());
            store.insert(&chr, &name, cluster);
        }
        store
    }
}
