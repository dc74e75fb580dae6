pub mod get_standing;
pub mod list;
pub mod register;
pub mod update_standing;
