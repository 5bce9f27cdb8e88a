pub(crate) mod backup;
pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod menu;
pub(crate) mod move_games;
pub(crate) mod relink;
