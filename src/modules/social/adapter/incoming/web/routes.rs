use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::incoming::use_cases::{
    CreateSocialLinkError, DeleteSocialLinkError, GetSocialLinkError, ListSocialLinksError,
    SocialLinkCommand, UpdateSocialLinkError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SocialLinkRequest {
    pub platform: String,
    pub url: String,
    pub label: Option<String>,
}

fn build_command(req: SocialLinkRequest) -> Result<SocialLinkCommand, HttpResponse> {
    SocialLinkCommand::new(req.platform, req.url, req.label)
        .map_err(|e| ApiResponse::bad_request(&e.to_string()))
}

#[get("/api/socials")]
pub async fn get_social_links_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.socials.list.execute(UserId::from(user.user_id)).await {
        Ok(links) => ApiResponse::list(links),
        Err(ListSocialLinksError::RepositoryError(msg)) => {
            error!("Repository error listing social links: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/socials")]
pub async fn create_social_link_handler(
    user: AuthenticatedUser,
    req: web::Json<SocialLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .socials
        .create
        .execute(UserId::from(user.user_id), command)
        .await
    {
        Ok(link) => ApiResponse::created(link),
        Err(CreateSocialLinkError::RepositoryError(msg)) => {
            error!("Repository error creating social link: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/socials/{id}")]
pub async fn get_social_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .socials
        .get
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(link) => ApiResponse::success(link),
        Err(GetSocialLinkError::NotFound) => ApiResponse::not_found("Social link not found"),
        Err(GetSocialLinkError::RepositoryError(msg)) => {
            error!("Repository error fetching social link: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/socials/{id}")]
pub async fn update_social_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SocialLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match build_command(req.into_inner()) {
        Ok(command) => command,
        Err(response) => return response,
    };

    match data
        .socials
        .update
        .execute(UserId::from(user.user_id), path.into_inner(), command)
        .await
    {
        Ok(link) => ApiResponse::success(link),
        Err(UpdateSocialLinkError::NotFound) => ApiResponse::not_found("Social link not found"),
        Err(UpdateSocialLinkError::RepositoryError(msg)) => {
            error!("Repository error updating social link: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/socials/{id}")]
pub async fn delete_social_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .socials
        .delete
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message("Social link deleted"),
        Err(DeleteSocialLinkError::NotFound) => ApiResponse::not_found("Social link not found"),
        Err(DeleteSocialLinkError::RepositoryError(msg)) => {
            error!("Repository error deleting social link: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
