// crates/atlas-core/src/geo/bounds.rs
use super::Position;
use serde::{Deserialize, Serialize};

/// Geographic bounding box in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn point(lat: f64, lon: f64) -> Self {
        Self {
            south: lat,
            west: lon,
            north: lat,
            east: lon,
        }
    }

    /// Smallest box containing every usable `[lon, lat, ..]` position.
    ///
    /// Positions with fewer than two values or non-finite values are skipped.
    /// Returns `None` when nothing usable remains.
    pub fn from_positions<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        positions
            .into_iter()
            .filter_map(|p| match p.as_slice() {
                [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some((*lat, *lon)),
                _ => None,
            })
            .fold(None, |acc: Option<Bounds>, (lat, lon)| {
                Some(match acc {
                    None => Bounds::point(lat, lon),
                    Some(b) => b.extended(lat, lon),
                })
            })
    }

    pub fn extended(self, lat: f64, lon: f64) -> Self {
        Self {
            south: self.south.min(lat),
            west: self.west.min(lon),
            north: self.north.max(lat),
            east: self.east.max(lon),
        }
    }

    pub fn union(self, other: Bounds) -> Self {
        Self {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.south, self.west, self.north, self.east]
            .iter()
            .all(|v| v.is_finite())
            && self.south <= self.north
            && self.west <= self.east
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        ]
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.south..=self.north).contains(&lat) && (self.west..=self.east).contains(&lon)
    }

    /// Leaflet's `[[south, west], [north, east]]` corner form.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

impl From<[[f64; 2]; 2]> for Bounds {
    fn from(c: [[f64; 2]; 2]) -> Self {
        Self {
            south: c[0][0],
            west: c[0][1],
            north: c[1][0],
            east: c[1][1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_lon_lat_pairs() {
        let ring: Vec<Position> = vec![
            vec![74.5, 12.5],
            vec![77.0, 12.5],
            vec![77.0, 8.5],
            vec![74.5, 8.5, 100.0],
        ];
        let b = Bounds::from_positions(&ring).unwrap();
        assert_eq!(b.corners(), [[8.5, 74.5], [12.5, 77.0]]);
        assert!(b.is_valid());
        assert!(b.contains(10.0, 76.0));
    }

    #[test]
    fn skips_short_and_non_finite_positions() {
        let ring: Vec<Position> = vec![vec![1.0], vec![f64::NAN, 3.0], vec![]];
        assert_eq!(Bounds::from_positions(&ring), None);
    }

    #[test]
    fn union_covers_both() {
        let a = Bounds::point(10.0, 70.0);
        let b = Bounds::point(30.0, 90.0);
        assert_eq!(a.union(b).corners(), [[10.0, 70.0], [30.0, 90.0]]);
    }
}
