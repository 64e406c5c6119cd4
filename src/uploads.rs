use std::path::{Path, PathBuf};

use actix_multipart::{Field, Multipart};
use actix_web::{dev::Payload, http::header::CONTENT_TYPE, web, FromRequest, HttpRequest};
use futures::{future::LocalBoxFuture, FutureExt, TryStreamExt};
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    config::{Config, MAX_UPLOAD_BYTES},
    errors::{AppError, AppResult},
};

pub const RESUME_FIELD: &str = "resume";
const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_bytes: usize,
}

impl UploadSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dir: PathBuf::from(&config.upload_dir),
            max_bytes: config.max_upload_bytes,
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

/// A résumé written to transient storage under a generated name.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub original_name: String,
    pub stored_name: String,
    pub path: PathBuf,
    pub size: usize,
}

/// Upload boundary for résumé routes. Accepts one PDF in the `resume` field
/// of a multipart body and stores it before the handler runs; a wrong MIME
/// type or an oversize file is rejected here with a validation error.
/// `None` means the request carried no résumé file.
pub struct ResumeUpload(pub Option<StoredUpload>);

impl FromRequest for ResumeUpload {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("multipart/"))
            .unwrap_or(false);

        if !is_multipart {
            return futures::future::ready(Ok(ResumeUpload(None))).boxed_local();
        }

        let settings = req
            .app_data::<web::Data<UploadSettings>>()
            .map(|settings| settings.get_ref().clone())
            .or_else(|| {
                req.app_data::<web::Data<AppState>>()
                    .map(|state| state.upload_settings.clone())
            })
            .unwrap_or_default();
        let multipart = Multipart::new(req.headers(), payload.take());

        Box::pin(async move {
            accept_resume(multipart, &settings).await.map(ResumeUpload)
        })
    }
}

async fn accept_resume(
    mut multipart: Multipart,
    settings: &UploadSettings,
) -> AppResult<Option<StoredUpload>> {
    let mut accepted: Option<StoredUpload> = None;

    match read_parts(&mut multipart, settings, &mut accepted).await {
        Ok(()) => Ok(accepted),
        Err(err) => {
            if let Some(stored) = accepted {
                discard(&stored.path).await;
            }
            Err(err)
        }
    }
}

async fn read_parts(
    multipart: &mut Multipart,
    settings: &UploadSettings,
    accepted: &mut Option<StoredUpload>,
) -> AppResult<()> {
    while let Some(mut field) = multipart.try_next().await? {
        if field.name() != Some(RESUME_FIELD) || accepted.is_some() {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let is_pdf = field
            .content_type()
            .map(|mime| mime.essence_str() == PDF_MIME)
            .unwrap_or(false);
        if !is_pdf {
            return Err(AppError::ValidationError(
                "Only PDF files are allowed.".to_string(),
            ));
        }

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("resume.pdf")
            .to_string();

        *accepted = Some(store_field(&mut field, original_name, settings).await?);
    }

    Ok(())
}

async fn store_field(
    field: &mut Field,
    original_name: String,
    settings: &UploadSettings,
) -> AppResult<StoredUpload> {
    fs::create_dir_all(&settings.dir).await?;

    let stored_name = Uuid::new_v4().simple().to_string();
    let path = settings.dir.join(&stored_name);
    let mut file = fs::File::create(&path).await?;

    match write_chunks(field, &mut file, settings.max_bytes).await {
        Ok(size) => Ok(StoredUpload {
            original_name,
            stored_name,
            path,
            size,
        }),
        Err(err) => {
            drop(file);
            discard(&path).await;
            Err(err)
        }
    }
}

async fn discard(path: &Path) {
    if let Err(err) = fs::remove_file(path).await {
        log::warn!("Could not remove upload {:?}: {}", path, err);
    }
}

async fn write_chunks(field: &mut Field, file: &mut fs::File, max_bytes: usize) -> AppResult<usize> {
    let mut size = 0usize;

    while let Some(chunk) = field.try_next().await? {
        size += chunk.len();
        if size > max_bytes {
            return Err(AppError::ValidationError(format!(
                "File too large. Maximum size is {} bytes.",
                max_bytes
            )));
        }
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(size)
}
