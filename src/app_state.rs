use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        AccountRepository, MongoAccountRepository, MongoAnswerEvaluationRepository,
        MongoAttemptResultRepository, MongoQuizItemRepository,
    },
    services::{
        account_service::AccountService,
        completion_client::{CompletionClient, OpenAiCompletionClient},
        evaluation_service::EvaluationService,
        question_service::QuestionService,
        result_service::ResultService,
    },
    uploads::UploadSettings,
};

/// Everything handlers need, built once at startup and shared by clone.
/// Missing database or AI configuration never stops construction; the
/// affected services report the gap when they are called.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub account_service: Arc<AccountService>,
    pub question_service: Arc<QuestionService>,
    pub result_service: Arc<ResultService>,
    pub evaluation_service: Arc<EvaluationService>,
    pub upload_settings: UploadSettings,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        config.warn_missing();

        let db = match &config.mongodb_uri {
            Some(uri) => match Database::connect(uri, &config.mongo_db_name).await {
                Ok(db) => db,
                Err(err) => {
                    log::error!("MongoDB client could not be created: {}", err);
                    Database::disconnected(&config.mongo_db_name)
                }
            },
            None => Database::disconnected(&config.mongo_db_name),
        };

        let account_repository = Arc::new(MongoAccountRepository::new(&db));
        if db.is_configured() {
            if let Err(err) = account_repository.ensure_indexes().await {
                log::warn!("Could not create users.email index yet: {}", err);
            }
        }

        let completion_client = config.openai_api_key.as_ref().map(|api_key| {
            Arc::new(OpenAiCompletionClient::new(
                api_key,
                &config.openai_model,
                config.openai_api_base.as_deref(),
            )) as Arc<dyn CompletionClient>
        });

        let jwt_service = Arc::new(JwtService::new(
            config.jwt_secret.as_ref(),
            config.jwt_expiration_hours,
        ));

        let state = Self {
            account_service: Arc::new(AccountService::new(account_repository, jwt_service)),
            question_service: Arc::new(QuestionService::new(Arc::new(
                MongoQuizItemRepository::new(&db),
            ))),
            result_service: Arc::new(ResultService::new(Arc::new(
                MongoAttemptResultRepository::new(&db),
            ))),
            evaluation_service: Arc::new(EvaluationService::new(
                Arc::new(MongoAnswerEvaluationRepository::new(&db)),
                completion_client,
            )),
            upload_settings: UploadSettings::from_config(&config),
            db,
            config: Arc::new(config),
        };

        if state.config.seed_questions && state.db.is_configured() {
            if let Err(err) = state.question_service.seed_if_empty().await {
                log::warn!("Question seeding skipped: {}", err);
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
impl AppState {
    /// State over in-memory repositories and an optional stub collaborator.
    pub fn for_tests(completion_client: Option<Arc<dyn CompletionClient>>) -> Self {
        use crate::test_utils::{
            test_helpers::temp_upload_settings, InMemoryAccountRepository,
            InMemoryAnswerEvaluationRepository, InMemoryAttemptResultRepository,
            InMemoryQuizItemRepository,
        };

        let config = Config::test_config();
        let jwt_service = Arc::new(JwtService::new(
            config.jwt_secret.as_ref(),
            config.jwt_expiration_hours,
        ));

        Self {
            db: Database::disconnected(&config.mongo_db_name),
            account_service: Arc::new(AccountService::new(
                Arc::new(InMemoryAccountRepository::default()),
                jwt_service,
            )),
            question_service: Arc::new(QuestionService::new(Arc::new(
                InMemoryQuizItemRepository::default(),
            ))),
            result_service: Arc::new(ResultService::new(Arc::new(
                InMemoryAttemptResultRepository::default(),
            ))),
            evaluation_service: Arc::new(EvaluationService::new(
                Arc::new(InMemoryAnswerEvaluationRepository::default()),
                completion_client,
            )),
            upload_settings: temp_upload_settings(),
            config: Arc::new(config),
        }
    }
}
