//! Seed 50 users into in-memory SQLite and print page 2 of 10, newest first.
//!
//! Run with `RUST_LOG=sea_paginator=debug` to see the pager's window trace.

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectOptions, ConnectionTrait, Database, EntityTrait,
    Schema, Set,
};
use sea_paginator::{Pager, Params};
use tracing::info;

mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub email: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(user::Entity)))
        .await?;

    for i in 1..=50 {
        user::ActiveModel {
            id: NotSet,
            name: Set(format!("User {}", i)),
            email: Set(format!("user{}@example.com", i)),
        }
        .insert(&db)
        .await?;
    }
    info!("Seeded 50 users");

    let params = Params::new(2, 10).order_by("id desc");
    let page = Pager::default()
        .paginate_models(&db, user::Entity::find(), &params)
        .await?;

    println!("Total users: {}", page.metadata.total_records);
    for u in &page.items {
        println!("{} {}", u.id, u.name);
    }
    println!("{}", serde_json::to_string_pretty(&page.metadata)?);

    Ok(())
}
