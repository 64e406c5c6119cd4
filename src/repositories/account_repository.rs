use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{require, Database},
    errors::{is_duplicate_key, AppError, AppResult},
    models::domain::Account,
};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists.";

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fails with `AlreadyExists` when the email is taken.
    async fn create(&self, account: Account) -> AppResult<Account>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
    async fn update_password_hash(&self, email: &str, password_hash: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoAccountRepository {
    collection: Option<Collection<Account>>,
}

impl MongoAccountRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self { collection }
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn create(&self, account: Account) -> AppResult<Account> {
        match require(&self.collection)?.insert_one(&account).await {
            Ok(_) => Ok(account),
            Err(err) if is_duplicate_key(&err) => {
                Err(AppError::AlreadyExists(DUPLICATE_EMAIL_MESSAGE.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let account = require(&self.collection)?
            .find_one(doc! { "email": email })
            .await?;
        Ok(account)
    }

    async fn update_password_hash(&self, email: &str, password_hash: &str) -> AppResult<()> {
        require(&self.collection)?
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "password": password_hash, "updatedAt": DateTime::now() } },
            )
            .await?;
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("email_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        require(&self.collection)?.create_index(model).await?;
        log::info!("Created unique index on users.email");

        Ok(())
    }
}
