use crate::server::{data::character::CharacterRepository, model::character::CreateCharacterParams};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_id;
mod get_by_user_id;
mod get_full_by_user_id;
