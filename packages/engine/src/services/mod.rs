pub mod deck_loader;
pub mod image_cache;
pub mod leaderboard;
pub mod round_service;
