//! Core module - check-in model, classification, aggregation and search

mod aggregator;
mod rules;
mod search;
mod types;

pub(crate) use aggregator::summarize;
pub(crate) use rules::StatusRules;
pub(crate) use search::{KeywordQuery, search};
pub(crate) use types::{Entry, Summary};
