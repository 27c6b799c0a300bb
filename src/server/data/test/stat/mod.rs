use crate::server::{data::stat::StatRepository, model::stat::StatParams};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_id;
mod update;
