use std::cmp::Reverse;

use rand::Rng;

use sscluster_core::models::{ChromosomeLength, Interval, LocusLength, RandomizedCluster, RecordStore};

use crate::errors::{RandomizeError, Result};

///
/// Places loci uniformly at random on a genome while keeping their lengths.
///
/// For each locus a chromosome is drawn uniformly from those strictly longer
/// than the locus, then a start is drawn uniformly from
/// `[0, chromosome_length - locus_length]`. Loci are placed independently and
/// may overlap one another.
///
pub struct GenomeRandomizer<'a> {
    genome: &'a [ChromosomeLength],
    // chromosome indices, longest first; ties keep file order
    by_length: Vec<usize>,
}

impl<'a> GenomeRandomizer<'a> {
    pub fn new(genome: &'a [ChromosomeLength]) -> Self {
        let mut by_length: Vec<usize> = (0..genome.len()).collect();
        by_length.sort_by_key(|&i| Reverse(genome[i].length));

        GenomeRandomizer { genome, by_length }
    }

    /// Length of the longest chromosome, 0 for an empty genome.
    pub fn longest(&self) -> u64 {
        self.by_length
            .first()
            .map(|&i| self.genome[i].length)
            .unwrap_or(0)
    }

    ///
    /// Chromosomes able to hold a locus of `length` bases, i.e. strictly longer.
    ///
    pub fn candidates(&self, length: u64) -> impl Iterator<Item = &ChromosomeLength> + '_ {
        self.by_length[..self.num_candidates(length)]
            .iter()
            .map(|&i| &self.genome[i])
    }

    fn num_candidates(&self, length: u64) -> usize {
        self.by_length
            .partition_point(|&i| self.genome[i].length > length)
    }

    ///
    /// Fail up front if any locus cannot be placed anywhere on the genome.
    ///
    pub fn check(&self, loci: &[LocusLength]) -> Result<()> {
        let longest = self.longest();
        match loci.iter().find(|locus| locus.length >= longest) {
            Some(locus) => Err(self.unplaceable(locus)),
            None => Ok(()),
        }
    }

    ///
    /// Draw one placement for a locus.
    ///
    pub fn place<R: Rng>(&self, locus: &LocusLength, rng: &mut R) -> Result<RandomizedCluster> {
        let n = self.num_candidates(locus.length);
        if n == 0 {
            return Err(self.unplaceable(locus));
        }

        let chrom = &self.genome[self.by_length[rng.random_range(0..n)]];
        let start = rng.random_range(0..=chrom.length - locus.length);

        Ok(RandomizedCluster {
            chr: chrom.name.clone(),
            name: locus.name.clone(),
            interval: Interval::new(start, start + locus.length),
            length: locus.length,
        })
    }

    ///
    /// Draw a fresh placement for every locus.
    ///
    /// # Arguments
    /// - loci: names and lengths of the loci to place
    /// - rng: source of randomness, owned by the calling trial
    pub fn randomize<R: Rng>(
        &self,
        loci: &[LocusLength],
        rng: &mut R,
    ) -> Result<RecordStore<RandomizedCluster>> {
        let mut store = RecordStore::new();
        for locus in loci {
            let cluster = self.place(locus, rng)?;
            let chr = cluster.chr.clone();
            store.insert(&chr, &locus.name, cluster);
        }
        Ok(store)
    }

    fn unplaceable(&self, locus: &LocusLength) -> RandomizeError {
        RandomizeError::NoSuitableChromosome {
            locus: locus.name.clone(),
            length: locus.length,
            longest: self.longest(),
        }
    }
}

///
/// Randomize a set of loci over a genome in one call.
///
pub fn randomize<R: Rng>(
    loci: &[LocusLength],
    genome: &[ChromosomeLength],
    rng: &mut R,
) -> Result<RecordStore<RandomizedCluster>> {
    GenomeRandomizer::new(genome).randomize(loci, rng)
}
