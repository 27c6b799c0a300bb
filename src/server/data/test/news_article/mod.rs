use crate::server::{
    data::news_article::NewsArticleRepository, model::news_article::NewsArticleParams,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update_silently;

fn params(title: &str) -> NewsArticleParams {
    NewsArticleParams {
        title: title.to_string(),
        contents: format!("{} contents", title),
        image_url: None,
    }
}
