use serde::{Deserialize, Serialize};

use crate::traits::Interval;

/// Where a cluster sits relative to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Upstream,
    Body,
    Downstream,
}

///
/// The zones one cluster position falls in for one feature.
///
/// Zones are tested independently, so a position can be in none, some or all
/// three of them at once (e.g. exactly on the feature start with both
/// upstream and body enabled).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneHits {
    pub upstream: bool,
    pub body: bool,
    pub downstream: bool,
}

impl ZoneHits {
    pub fn contains(&self, zone: Zone) -> bool {
        match zone {
            Zone::Upstream => self.upstream,
            Zone::Body => self.body,
            Zone::Downstream => self.downstream,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.upstream || self.body || self.downstream)
    }

    pub fn len(&self) -> usize {
        self.upstream as usize + self.body as usize + self.downstream as usize
    }

    pub fn zones(&self) -> impl Iterator<Item = Zone> + '_ {
        [Zone::Upstream, Zone::Body, Zone::Downstream]
            .into_iter()
            .filter(|zone| self.contains(*zone))
    }
}

///
/// Distances and switches of the overlap classifier.
///
/// Upstream and downstream are always taken along increasing coordinates;
/// strand is never consulted. A distance of zero turns its zone off.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub upstream_bp: u64,
    pub downstream_bp: u64,
    pub include_body: bool,
}

impl ClassifierConfig {
    pub fn new(upstream_bp: u64, downstream_bp: u64, include_body: bool) -> Self {
        ClassifierConfig {
            upstream_bp,
            downstream_bp,
            include_body,
        }
    }

    /// Classify a cluster position against one feature interval.
    #[inline]
    pub fn classify(&self, feature: &Interval, position: u64) -> ZoneHits {
        classify(
            feature.start,
            feature.stop,
            position,
            self.upstream_bp,
            self.downstream_bp,
            self.include_body,
        )
    }
}

///
/// Classify a cluster start coordinate against a feature.
///
/// - upstream: `upstream_bp > 0` and `start - upstream_bp <= position <= start`
/// - body: `include_body` and `start <= position <= stop`
/// - downstream: `downstream_bp > 0` and `stop <= position <= stop + downstream_bp`
///
/// All bounds are inclusive. Only the cluster start is compared; its own
/// extent is not.
#[inline]
pub fn classify(
    feature_start: u64,
    feature_stop: u64,
    position: u64,
    upstream_bp: u64,
    downstream_bp: u64,
    include_body: bool,
) -> ZoneHits {
    ZoneHits {
        upstream: upstream_bp > 0
            && feature_start.saturating_sub(upstream_bp) <= position
            && position <= feature_start,
        body: include_body && feature_start <= position && position <= feature_stop,
        downstream: downstream_bp > 0
            && feature_stop <= position
            && position <= feature_stop.saturating_add(downstream_bp),
    }
}
