use super::*;
use crate::server::service::topic::TopicService;
use test_utils::{builder::TestBuilder, factory};
