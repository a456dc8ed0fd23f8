// UI Components
// This module contains all reusable UI components

pub mod profile_card;
pub mod styles;

pub use profile_card::ProfileCard;
