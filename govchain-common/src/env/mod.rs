pub mod proposal;
pub mod status;
pub mod user;
pub mod vote_data;
