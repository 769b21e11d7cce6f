//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Half-extent of the square ground plane (100 x 100 units).
pub const ARENA_HALF_EXTENT: f64 = 50.0;

/// Height at which ground units stand.
pub const GROUND_HEIGHT: f64 = 1.0;

// --- Game flow ---

/// Pre-level countdown length in seconds.
pub const COUNTDOWN_SECS: f64 = 3.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Ground speed (units/s).
pub const PLAYER_SPEED: f64 = 10.0;

/// Player bounding box half-extents.
pub const PLAYER_HALF_EXTENTS: [f64; 3] = [0.55, 1.2, 0.35];

/// Minimum seconds between shots.
pub const SHOOT_COOLDOWN_SECS: f64 = 0.5;

/// Knockback impulse applied when an enemy strikes the player (units/s).
pub const KNOCKBACK_IMPULSE: f64 = 2.0;

/// Per-tick decay factor for knockback velocity.
pub const KNOCKBACK_DECAY: f64 = 0.9;

/// Knockback below this speed is zeroed.
pub const KNOCKBACK_EPSILON: f64 = 1e-3;

// --- Bullets ---

/// Bullet speed (units/s).
pub const BULLET_SPEED: f64 = 50.0;

/// Bullet lifespan in seconds (15 units of reach at full speed).
pub const BULLET_LIFESPAN_SECS: f64 = 0.3;

/// Bullet collision radius.
pub const BULLET_RADIUS: f64 = 0.2;

/// Damage per bullet against a regular enemy.
pub const BULLET_DAMAGE_ENEMY: i32 = 50;

/// Damage per bullet against the boss.
pub const BULLET_DAMAGE_BOSS: i32 = 100;

// --- Enemies ---

/// Distance from the arena origin at which enemies appear.
pub const ENEMY_SPAWN_DISTANCE: f64 = 30.0;

/// Enemy bounding box half-extents (unit octahedron).
pub const ENEMY_HALF_EXTENTS: [f64; 3] = [1.0, 1.0, 1.0];

/// Ground distance at which an enemy can strike the player.
pub const ENEMY_ATTACK_RANGE: f64 = 2.5;

/// Ground distance at which a chasing enemy stops closing in.
pub const ENEMY_STANDOFF_DISTANCE: f64 = 1.5;

/// Seconds between strikes after the first one.
pub const ENEMY_ATTACK_COOLDOWN_SECS: f64 = 1.5;

/// Seconds an enemy must have existed before its first strike.
pub const ENEMY_ENGAGE_DELAY_SECS: f64 = 1.0;

/// Damage dealt to the player per strike.
pub const ENEMY_CONTACT_DAMAGE: i32 = 10;

pub const GRUNT_SPEED: f64 = 2.0;
pub const GRUNT_HEALTH: i32 = 50;
pub const SOLDIER_SPEED: f64 = 3.0;
pub const SOLDIER_HEALTH: i32 = 100;
pub const ELITE_SPEED: f64 = 4.0;
pub const ELITE_HEALTH: i32 = 150;

// --- Boss ---

pub const BOSS_DEFAULT_HEALTH: i32 = 500;

/// Boss bounding box half-extents (5 x 10 x 5 box).
pub const BOSS_HALF_EXTENTS: [f64; 3] = [2.5, 5.0, 2.5];

/// Height of the boss centre above the ground.
pub const BOSS_HOVER_HEIGHT: f64 = 5.0;

// --- Spawn pacing ---

/// Shortest interval between enemy spawns (seconds).
pub const SPAWN_MIN_INTERVAL_SECS: f64 = 0.5;

/// Longest interval between enemy spawns (seconds).
pub const SPAWN_MAX_INTERVAL_SECS: f64 = 3.0;

/// Time after which the interval is pinned at the minimum (3 minutes).
pub const SPAWN_RAMP_SECS: f64 = 180.0;

/// Active-enemy count at which the interval reaches its minimum.
pub const SPAWN_CROWD_LIMIT: u32 = 20;
