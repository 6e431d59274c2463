pub const DEFAULT_GRID_WIDTH: i32 = 30;
pub const DEFAULT_GRID_HEIGHT: i32 = 30;
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";
pub const DEFAULT_TOP_N: usize = 5;
