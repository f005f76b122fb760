//! End-to-end TMX export: asset copy, document merge and the exported ids.

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

use dungeon_tmx::autotile::AutotileSlot;
use dungeon_tmx::export::populate;
use dungeon_tmx::generation::{generate_rooms, RoomsConfig};
use dungeon_tmx::tmx::{TmxWriter, OUTPUT_FILE, TEMPLATE_FILE};
use dungeon_tmx::{ExportError, Map, Tile, TmxTemplate};

const TEMPLATE: &str = "<map width=\"{{.Width}}\" height=\"{{.Height}}\"><data>{{.CSV}}</data></map>";

fn make_assets(root: &Path) {
    fs::create_dir_all(root.join("images/sub")).unwrap();
    fs::write(root.join(TEMPLATE_FILE), TEMPLATE).unwrap();
    fs::write(root.join("tiles.tsx"), "<tileset/>").unwrap();
    fs::write(root.join("images/floor.png"), [1u8, 2, 3]).unwrap();
    fs::write(root.join("images/sub/wall.png"), [4u8]).unwrap();
    fs::write(root.join("images/old.TMX"), "stale").unwrap();
}

#[test]
fn test_single_wall_export_document() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("dawnlike");
    let out = dir.path().join("tmx_export");
    make_assets(&assets);

    let template = TmxTemplate::dawnlike();
    let mut map = Map::empty(3, 3);
    map.layer("Ground").set(1, 1, Tile::Wall).unwrap();

    let writer = TmxWriter::for_template(dir.path(), &template, &out);
    let path = writer.write(&map, &template).unwrap();
    assert_eq!(path, out.join(OUTPUT_FILE));

    let document = fs::read_to_string(&path).unwrap();
    let isolated = template.terrain(Tile::Wall).unwrap().id(AutotileSlot::Isolated);
    let n = &template.nothing_id;
    assert_eq!(
        document,
        format!("<map width=\"3\" height=\"3\"><data>{n},{n},{n},{n},{isolated},{n},{n},{n},{n}</data></map>")
    );
}

#[test]
fn test_assets_copied_without_tmx() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("assets");
    let out = dir.path().join("out");
    make_assets(&assets);

    let map = Map::new(2, 2);
    TmxWriter::new(&assets, &out).write(&map, &TmxTemplate::dawnlike()).unwrap();

    assert_eq!(fs::read(out.join("images/floor.png")).unwrap(), vec![1u8, 2, 3]);
    assert_eq!(fs::read(out.join("images/sub/wall.png")).unwrap(), vec![4u8]);
    assert!(out.join("tiles.tsx").exists());
    assert!(!out.join(TEMPLATE_FILE).exists());
    assert!(!out.join("images/old.TMX").exists());
}

#[test]
fn test_existing_export_dir_is_reused() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("assets");
    let out = dir.path().join("out");
    make_assets(&assets);
    fs::create_dir_all(&out).unwrap();

    let writer = TmxWriter::new(&assets, &out);
    let map = Map::new(2, 2);
    writer.write(&map, &TmxTemplate::dawnlike()).unwrap();
    writer.write(&map, &TmxTemplate::dawnlike()).unwrap();
    assert!(out.join(OUTPUT_FILE).exists());
}

#[test]
fn test_export_dir_inside_assets() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("assets");
    let out = assets.join("export");
    make_assets(&assets);

    let writer = TmxWriter::new(&assets, &out);
    let map = Map::new(2, 2);
    writer.write(&map, &TmxTemplate::dawnlike()).unwrap();
    writer.write(&map, &TmxTemplate::dawnlike()).unwrap();

    assert!(out.join(OUTPUT_FILE).exists());
    assert_eq!(fs::read(out.join("images/sub/wall.png")).unwrap(), vec![4u8]);
    assert!(!out.join("export").exists());
}

#[test]
fn test_missing_assets_is_io_error() {
    let dir = TempDir::new().unwrap();
    let writer = TmxWriter::new(dir.path().join("nope"), dir.path().join("out"));
    let map = Map::new(2, 2);
    assert!(matches!(writer.write(&map, &TmxTemplate::dawnlike()), Err(ExportError::Io(_))));
}

#[test]
fn test_generated_dungeon_exports() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let dungeon = generate_rooms(48, 32, &RoomsConfig::default(), &mut rng).unwrap();
    let export = populate(&dungeon.map, &TmxTemplate::dawnlike()).unwrap();
    assert_eq!((export.width, export.height), (48, 32));
    assert_eq!(export.ids().count(), 48 * 32);
    assert!(export.ids().all(|id| !id.is_empty()));
}

#[test]
fn test_template_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.json");
    let json = serde_json::to_string(&TmxTemplate::dawnlike()).unwrap();
    fs::write(&path, json).unwrap();
    assert_eq!(TmxTemplate::from_json_file(&path).unwrap(), TmxTemplate::dawnlike());
}
