pub mod question_store;
pub mod scoring_service;
