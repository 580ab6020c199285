// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;

// Room dimensions, outer wall ring included
pub const ROOM_WIDTH: i32 = 10;
pub const ROOM_HEIGHT: i32 = 10;

// Display glyphs
pub const PLAYER_CHAR: char = '@';
pub const ENEMY_CHAR: char = 'E';
pub const BOSS_CHAR: char = 'B';
pub const ITEM_CHAR: char = 'I';
pub const WALL_CHAR: char = '#';
pub const EMPTY_CHAR: char = '.';

// Starting stats
pub const PLAYER_HEALTH: u32 = 100;
pub const PLAYER_ATTACK_DAMAGE: u32 = 10;
pub const ENEMY_HEALTH: u32 = 50;
pub const ENEMY_ATTACK_DAMAGE: u32 = 5;
pub const BOSS_HEALTH: u32 = 200;

// Session setup
pub const ENEMY_COUNT: usize = 3;
pub const PLAYER_SPAWN: (i32, i32) = (5, 5);
pub const ITEM_SPAWN: (i32, i32) = (2, 3);
pub const BOSS_SPAWN: (i32, i32) = (8, 8);
pub const BOSS_NAME: &str = "Final Boss";
pub const STARTING_ITEM_NAME: &str = "Health Potion";
