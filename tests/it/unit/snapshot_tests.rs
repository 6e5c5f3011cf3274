//! Snapshot tests using the insta crate.
//!
//! The stored layout format is what a front-end persists and reloads, so its
//! shape is pinned here. Snapshots are inline; to update them after an
//! intentional change:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestLayoutBuilder;
use shelfboard::settings::Settings;
use shelfboard::{Bay, Pillar, PillarStyle, Shelf, ShelfType};

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap()
}

#[test]
fn snapshot_pillar() {
    let pillar = Pillar::with_id("p1", 700.0, PillarStyle::Dual);
    insta::assert_snapshot!(pretty(&pillar), @r#"
    {
      "id": "p1",
      "xMm": 700.0,
      "kind": "normal",
      "isCornerPillar": false,
      "style": "dual"
    }
    "#);
}

#[test]
fn snapshot_wall_pillar() {
    let pillar = Pillar::wall("w", 5000.0);
    insta::assert_snapshot!(pretty(&pillar), @r#"
    {
      "id": "w",
      "xMm": 5000.0,
      "kind": "wall",
      "isCornerPillar": false,
      "style": "rear-single"
    }
    "#);
}

#[test]
fn snapshot_shelf() {
    let shelf = Shelf::with_id("s1", Bay::new("p1", "p2"), 2000.0, ShelfType::Hanger).corner(true);
    insta::assert_snapshot!(pretty(&shelf), @r#"
    {
      "id": "s1",
      "startPillarId": "p1",
      "endPillarId": "p2",
      "heightMm": 2000.0,
      "type": "hanger",
      "isCornerShelf": true
    }
    "#);
}

#[test]
fn snapshot_layout() {
    let store = TestLayoutBuilder::new()
        .with_room_width(1400.0)
        .with_pillars(&[("a", 0.0), ("b", 700.0)])
        .with_shelf("s", ("a", "b"), 3100.0, ShelfType::Drawer)
        .build();
    insta::assert_snapshot!(store.to_json().unwrap(), @r#"
    {
      "room": {
        "widthMm": 1400.0,
        "heightMm": 3400.0,
        "depthMm": 500.0
      },
      "pillars": [
        {
          "id": "a",
          "xMm": 0.0,
          "kind": "normal",
          "isCornerPillar": false,
          "style": "rear-single"
        },
        {
          "id": "b",
          "xMm": 700.0,
          "kind": "normal",
          "isCornerPillar": false,
          "style": "rear-single"
        }
      ],
      "shelves": [
        {
          "id": "s",
          "startPillarId": "a",
          "endPillarId": "b",
          "heightMm": 3100.0,
          "type": "drawer",
          "isCornerShelf": false
        }
      ]
    }
    "#);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_snapshot!(pretty(&Settings::default()), @r#"
    {
      "gridSizeMm": 100.0,
      "defaultRoom": {
        "widthMm": 5000.0,
        "heightMm": 3400.0,
        "depthMm": 500.0
      },
      "pillarStyle": "rear-single",
      "toastDurationMs": 3000,
      "cornerOvershootMm": 300.0
    }
    "#);
}
