// Tile sandbox: crafting against the starting stock and a scripted run.

use voxel_craft::crafting::{craft, RecipeBook};
use voxel_craft::inventory::BlockStock;
use voxel_craft::tiles::{render_text, TileSession, TileWorld};
use voxel_craft::{run_tiles, BlockId, GameConfig, KeyCode};

#[test]
fn test_tools_from_exact_ingredients() {
    let book = RecipeBook::default();
    let mut stock: BlockStock = [(BlockId::WOOD, 2), (BlockId::STONE, 3)].into_iter().collect();

    assert!(craft(book.find("Инструменты").unwrap(), &mut stock));
    assert_eq!(stock.count(BlockId::WOOD), 0);
    assert_eq!(stock.count(BlockId::STONE), 1);
}

#[test]
fn test_boards_need_wood() {
    let book = RecipeBook::default();
    let boards = book.find("Доски").unwrap();

    let mut some: BlockStock = [(BlockId::WOOD, 1)].into_iter().collect();
    assert!(craft(boards, &mut some));
    assert_eq!(some.count(BlockId::WOOD), 1);

    let mut none = BlockStock::new();
    assert!(!craft(boards, &mut none));
    assert_eq!(none, BlockStock::new());
}

#[test]
fn test_collect_then_place_elsewhere() {
    let mut world = TileWorld::empty();
    world.set(5, 5, BlockId::WATER);
    let mut session = TileSession::with_world(world);
    session.start();

    session.click(5, 5, true);
    assert_eq!(session.stock().count(BlockId::WATER), 1);
    assert!(session.select(BlockId::WATER));
    assert!(session.click(6, 6, false).is_some());
    assert_eq!(session.world().get(6, 6), Some(BlockId::WATER));
    assert_eq!(session.stock().count(BlockId::WATER), 0);

    session.handle_key(KeyCode::KeyD);
    assert!(render_text(&session).lines().nth(10).unwrap().contains('@'));
}

#[tokio::test]
async fn test_scripted_run() {
    let mut config = GameConfig::default();
    config.tiles.seed = Some(5);
    config.tiles.tick_ms = 1;
    let session = run_tiles(&config, 30).await.unwrap();

    assert_eq!(session.player(), (14, 11));
    assert_eq!(session.time_of_day(), 30);
    assert!((session.hunger() - 97.0).abs() < 1e-3);
    assert!(session.is_started());
}

#[tokio::test(start_paused = true)]
async fn test_run_is_paced_by_tick_interval() {
    let mut config = GameConfig::default();
    config.tiles.seed = Some(5);
    let started = tokio::time::Instant::now();

    let session = run_tiles(&config, 10).await.unwrap();

    assert_eq!(session.time_of_day(), 10);
    // The first tick fires immediately, the other nine wait a full interval
    assert!(started.elapsed() >= config.tiles.tick_interval() * 9);
}
