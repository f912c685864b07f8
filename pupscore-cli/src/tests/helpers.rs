//! Test helpers for writing catalog and platform-table fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Four listings spanning the premium, midscale and homestay tiers.
///
/// Composite scores under the built-in table: grand-lakeside 9.2,
/// garden-retreat 8.7, lotus-inn 8.3 (Ctrip only) and tea-village 0.
pub(super) const WEST_LAKE_CATALOG: &str = r#"[
  {
    "id": "grand-lakeside",
    "name": "Grand Lakeside Hotel",
    "price": 1200,
    "location": "West Lake, Hangzhou",
    "amenities": ["pool", "spa"],
    "ratings": {
      "booking": { "value": 9.2, "reviewCount": 840 }
    }
  },
  {
    "id": "garden-retreat",
    "name": "Garden Retreat",
    "price": 800,
    "location": "West Lake, Hangzhou",
    "amenities": ["gym", "wifi"],
    "ratings": {
      "booking": { "value": 8.7, "reviewCount": 310 }
    }
  },
  {
    "id": "lotus-inn",
    "name": "Lotus Inn",
    "price": 450,
    "location": "Hefang Street, Hangzhou",
    "amenities": ["wifi"],
    "ratings": {
      "ctrip": { "value": 4.15, "reviewCount": 12 }
    }
  },
  {
    "id": "tea-village",
    "name": "Tea Village Homestay",
    "price": 150,
    "location": "Longjing, Hangzhou",
    "amenities": []
  }
]
"#;

/// Platform table trusting Booking.com alone.
pub(super) const BOOKING_ONLY_TABLE: &str = r#"{ "booking": { "scale": 10, "weight": 1.0 } }"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn west_lake_catalog(root: &Utf8Path) -> Utf8PathBuf {
    let path = root.join("catalog.json");
    write_utf8(&path, WEST_LAKE_CATALOG.as_bytes());
    path
}
