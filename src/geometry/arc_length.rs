//! Bogenlängen-Parametrisierung über Polylinien-Abtastung.
//!
//! Die Länge wird über `samples` gleichmäßige t-Intervalle pro Segment
//! approximiert (leichte Unterschätzung, monoton in `samples`). Die inverse
//! Abbildung Distanz → (Segment, t) interpoliert linear innerhalb des
//! Abtastintervalls, das die Restdistanz einschließt.

use crate::core::{Chain, Segment};

/// Ort auf der Kette als (Segment, Bézier-Parameter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPosition {
    /// Index des Segments in der Kette
    pub segment_index: usize,
    /// Parameter innerhalb des Segments, in [0, 1]
    pub t: f64,
}

impl ArcPosition {
    /// Anfang der Kette.
    pub const START: Self = Self {
        segment_index: 0,
        t: 0.0,
    };
}

/// Approximierte Länge eines Segments über Polylinien-Segmente.
pub fn segment_length(segment: &Segment, samples: usize) -> f64 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev = segment.point_at(0.0);
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let p = segment.point_at(t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Summe der Segmentlängen.
pub fn chain_length(chain: &Chain, samples: usize) -> f64 {
    chain
        .segments
        .iter()
        .map(|segment| segment_length(segment, samples))
        .sum()
}

/// Sucht (Segment, t) zu einer Bogenlänge ab Ursprung.
///
/// Die Distanz wird nicht gegen die Gesamtlänge geprüft: Überlauf landet
/// auf dem letzten Segment bei t = 1, negative Werte am Anfang.
/// `None` nur bei leerer Kette.
pub fn find_t_for_distance(
    chain: &Chain,
    target_distance: f64,
    samples: usize,
) -> Option<ArcPosition> {
    ArcLengthTable::new(chain, samples).locate(target_distance)
}

/// Vorberechnete kumulative Längen aller Segmente.
///
/// Ein Diskretisierungs-Durchlauf baut die Tabelle einmal und beantwortet
/// danach alle Abfragen daraus.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    samples: usize,
    /// Kumulative Länge je Segment, `samples + 1` Einträge beginnend bei 0
    cumulative: Vec<Vec<f64>>,
    /// Länge vor dem jeweiligen Segment
    offsets: Vec<f64>,
    total: f64,
}

impl ArcLengthTable {
    /// Tastet jedes Segment an `samples + 1` Stellen ab.
    pub fn new(chain: &Chain, samples: usize) -> Self {
        let samples = samples.max(1);
        let mut cumulative = Vec::with_capacity(chain.len());
        let mut offsets = Vec::with_capacity(chain.len());
        let mut total = 0.0;

        for segment in &chain.segments {
            let mut lengths = Vec::with_capacity(samples + 1);
            let mut prev = segment.point_at(0.0);
            let mut running = 0.0;
            lengths.push(0.0);
            for i in 1..=samples {
                let p = segment.point_at(i as f64 / samples as f64);
                running += prev.distance(p);
                lengths.push(running);
                prev = p;
            }
            offsets.push(total);
            total += running;
            cumulative.push(lengths);
        }

        Self {
            samples,
            cumulative,
            offsets,
            total,
        }
    }

    /// Gesamtlänge der Kette.
    pub fn total_length(&self) -> f64 {
        self.total
    }

    /// Länge jedes einzelnen Segments.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.cumulative
            .iter()
            .map(|lengths| lengths.last().copied().unwrap_or(0.0))
            .collect()
    }

    /// Abtastdichte, mit der die Tabelle gebaut wurde.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Inverse Abbildung Distanz → (Segment, t), siehe [`find_t_for_distance`].
    pub fn locate(&self, target_distance: f64) -> Option<ArcPosition> {
        let last = self.cumulative.len().checked_sub(1)?;
        // NaN und negative Distanzen fallen auf den Anfang zurück
        if target_distance.is_nan() || target_distance <= 0.0 {
            return Some(ArcPosition::START);
        }

        for (segment_index, lengths) in self.cumulative.iter().enumerate() {
            let offset = self.offsets[segment_index];
            let length = lengths[self.samples];
            if target_distance > offset + length {
                continue;
            }

            let local = target_distance - offset;
            let idx = lengths
                .partition_point(|&len| len < local)
                .clamp(1, self.samples);
            let len_before = lengths[idx - 1];
            let len_after = lengths[idx];
            let frac = if len_after - len_before > f64::EPSILON {
                ((local - len_before) / (len_after - len_before)).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let t = ((idx - 1) as f64 + frac) / self.samples as f64;
            return Some(ArcPosition { segment_index, t });
        }

        // Überlauf (z.B. Fließkomma-Rest am Schleifenschluss)
        Some(ArcPosition {
            segment_index: last,
            t: 1.0,
        })
    }

    /// Bogenlänge ab Ursprung bis zu einem Ort (Umkehrung von [`Self::locate`]).
    pub fn distance_at(&self, position: ArcPosition) -> f64 {
        let Some(lengths) = self.cumulative.get(position.segment_index) else {
            return self.total;
        };
        let scaled = position.t.clamp(0.0, 1.0) * self.samples as f64;
        let idx = (scaled.floor() as usize).min(self.samples - 1);
        let frac = scaled - idx as f64;
        let local = lengths[idx] + (lengths[idx + 1] - lengths[idx]) * frac;
        self.offsets[position.segment_index] + local
    }
}
