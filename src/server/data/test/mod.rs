mod character;
mod news_article;
mod stat;
