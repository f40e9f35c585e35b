// src/bin/seed_demo.rs
use anyhow::Result;
use article_board::{
    application::services::ApplicationServices, config::AppConfig, infrastructure::database,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;

    let services = ApplicationServices::new(pool.repositories());
    services.seeder.seed().await?;

    match services.seeder.first_article().await? {
        Some(article) => {
            println!("Article ID: {}, Title: {}", article.id, article.title);
            for comment in &article.comments {
                println!(" - Comment ID: {}, Content: {}", comment.id, comment.content);
            }
        }
        None => println!("No articles found"),
    }

    pool.close().await;
    Ok(())
}
