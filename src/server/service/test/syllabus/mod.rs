use super::*;
use crate::server::data::topic::TopicRepository;
use test_utils::{builder::TestBuilder, factory};

mod append;
mod concurrent;
mod move_to;
mod remove;
