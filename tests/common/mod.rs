//! Shared fixtures: a users/wallets schema in in-memory SQLite.

#![allow(dead_code)]

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, LoaderTrait, Schema, Set,
};
use sea_paginator::{PaginateError, PaginateResult, Record};

pub mod user {
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
    pub enum Relation {
        #[sea_orm(has_many = "super::wallet::Entity")]
        Wallets,
    }

    impl Related<super::wallet::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Wallets.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod wallet {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "wallets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub user_id: i32,
        pub amount: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id"
        )]
        User,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Entity whose table is never created, for failure paths.
pub mod ghost {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "ghosts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub const USER_COUNT: i32 = 25;

/// A user with its wallets, filled only when "wallets" is preloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithWallets {
    pub user: user::Model,
    pub wallets: Vec<wallet::Model>,
}

#[async_trait]
impl Record for UserWithWallets {
    type Entity = user::Entity;

    fn from_model(user: user::Model) -> Self {
        Self {
            user,
            wallets: Vec::new(),
        }
    }

    async fn preload<C>(records: &mut [Self], relation: &str, db: &C) -> PaginateResult<()>
    where
        C: ConnectionTrait,
    {
        if !relation.eq_ignore_ascii_case("wallets") {
            return Err(PaginateError::unknown_relation::<Self>(relation));
        }
        if records.is_empty() {
            return Ok(());
        }

        let users: Vec<user::Model> = records.iter().map(|r| r.user.clone()).collect();
        let wallets = users.load_many(wallet::Entity, db).await?;
        for (record, wallets) in records.iter_mut().zip(wallets) {
            record.wallets = wallets;
        }
        Ok(())
    }
}

/// Plain user record that knows no relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BareUser(pub user::Model);

impl Record for BareUser {
    type Entity = user::Entity;

    fn from_model(model: user::Model) -> Self {
        Self(model)
    }
}

async fn connect() -> Result<DatabaseConnection, DbErr> {
    // A single long-lived connection, every in-memory connection is its own database.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(opt).await
}

/// 25 users; every fifth one owns a wallet worth `i * 100`.
pub async fn setup_db() -> DatabaseConnection {
    let db = connect().await.expect("connect to sqlite");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(user::Entity)))
        .await
        .expect("create users");
    db.execute(backend.build(&schema.create_table_from_entity(wallet::Entity)))
        .await
        .expect("create wallets");

    for i in 1..=USER_COUNT {
        let user = user::ActiveModel {
            id: NotSet,
            name: Set(format!("User {}", i)),
            email: Set(format!("user{}@example.com", i)),
        }
        .insert(&db)
        .await
        .expect("insert user");

        if i % 5 == 0 {
            wallet::ActiveModel {
                id: NotSet,
                user_id: Set(user.id),
                amount: Set(i * 100),
            }
            .insert(&db)
            .await
            .expect("insert wallet");
        }
    }

    db
}
