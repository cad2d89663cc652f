//! Five-band colour buckets for normalised scores.

use serde::Serialize;

/// Quality band of a normalised score. Boundaries belong to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBucket {
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl RankBucket {
    /// Best first.
    pub const ALL: [RankBucket; 5] = [
        RankBucket::Excellent,
        RankBucket::Good,
        RankBucket::Moderate,
        RankBucket::Poor,
        RankBucket::VeryPoor,
    ];

    pub fn from_score(score: f64) -> Self {
        rank_bucket(score)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankBucket::Excellent => "excellent",
            RankBucket::Good => "good",
            RankBucket::Moderate => "moderate",
            RankBucket::Poor => "poor",
            RankBucket::VeryPoor => "very_poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankBucket::Excellent => "Excellent",
            RankBucket::Good => "Good",
            RankBucket::Moderate => "Moderate",
            RankBucket::Poor => "Poor",
            RankBucket::VeryPoor => "Very poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RankBucket::Excellent => "#15803d",
            RankBucket::Good => "#84cc16",
            RankBucket::Moderate => "#eab308",
            RankBucket::Poor => "#f97316",
            RankBucket::VeryPoor => "#dc2626",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for RankBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket for a normalised score. Total: NaN and anything below 0.2 land in
/// [`RankBucket::VeryPoor`].
pub fn rank_bucket(score: f64) -> RankBucket {
    if score >= 0.8 {
        RankBucket::Excellent
    } else if score >= 0.6 {
        RankBucket::Good
    } else if score >= 0.4 {
        RankBucket::Moderate
    } else if score >= 0.2 {
        RankBucket::Poor
    } else {
        RankBucket::VeryPoor
    }
}

/// Number of scores per bucket. Absent values are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    counts: [usize; 5],
}

impl BucketCounts {
    pub fn from_scores<I: IntoIterator<Item = f64>>(scores: I) -> Self {
        scores.into_iter().map(rank_bucket).collect()
    }

    pub fn add(&mut self, bucket: RankBucket) {
        self.counts[bucket.index()] += 1;
    }

    pub fn get(&self, bucket: RankBucket) -> usize {
        self.counts[bucket.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(bucket, count)` pairs, best first.
    pub fn iter(&self) -> impl Iterator<Item = (RankBucket, usize)> + '_ {
        RankBucket::ALL.iter().map(move |&b| (b, self.get(b)))
    }
}

impl FromIterator<RankBucket> for BucketCounts {
    fn from_iter<I: IntoIterator<Item = RankBucket>>(iter: I) -> Self {
        let mut counts = BucketCounts::default();
        for bucket in iter {
            counts.add(bucket);
        }
        counts
    }
}

impl Serialize for BucketCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(RankBucket::ALL.len()))?;
        for (bucket, count) in self.iter() {
            map.serialize_entry(bucket.as_str(), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_boundaries_belong_to_higher_bucket() {
        assert_eq!(rank_bucket(0.8), RankBucket::Excellent);
        assert_eq!(rank_bucket(0.79999), RankBucket::Good);
        assert_eq!(rank_bucket(0.6), RankBucket::Good);
        assert_eq!(rank_bucket(0.4), RankBucket::Moderate);
        assert_eq!(rank_bucket(0.2), RankBucket::Poor);
        assert_eq!(rank_bucket(0.19999), RankBucket::VeryPoor);
        assert_eq!(rank_bucket(0.0), RankBucket::VeryPoor);
        assert_eq!(rank_bucket(1.0), RankBucket::Excellent);
    }

    #[test]
    fn test_nan_is_very_poor() {
        assert_eq!(rank_bucket(f64::NAN), RankBucket::VeryPoor);
    }

    #[test]
    fn test_colors() {
        assert_eq!(RankBucket::Good.color(), "#84cc16");
        assert_eq!(RankBucket::VeryPoor.color(), "#dc2626");
    }

    #[test]
    fn test_bucket_counts() {
        let counts = BucketCounts::from_scores([0.95, 0.81, 0.5, 0.1]);
        assert_eq!(counts.get(RankBucket::Excellent), 2);
        assert_eq!(counts.get(RankBucket::Good), 0);
        assert_eq!(counts.total(), 4);
        assert_eq!(
            serde_json::to_value(counts).unwrap()["excellent"],
            serde_json::json!(2)
        );
    }
}
