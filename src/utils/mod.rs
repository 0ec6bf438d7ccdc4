pub mod is_target_file;
pub mod slash_path;
