pub mod answer;
pub mod catalog;
pub mod dispatch;
pub mod export;
pub mod identity;
pub mod navigate;
pub mod payload;
pub mod reset;
pub mod results;
pub mod schedule;
pub mod schema;
pub mod score;
pub mod show;
pub mod submit;
