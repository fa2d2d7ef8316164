pub mod skill_check;
pub mod sweep;
