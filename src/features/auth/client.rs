//! Client wrappers for the auth API endpoints. Each operation issues exactly
//! one request and returns a typed outcome; status mapping lives in
//! `protocol`. These functions never touch the session cache — routes decide
//! when an outcome populates it.

use crate::app_lib::{AppError, api};
use crate::features::auth::protocol::{self, SignUpOutcome};
use crate::features::auth::types::{
    ApplyPasswordResetRequest, Identity, RequestPasswordResetRequest, SignInRequest,
    SignUpRequest, VerifyAccountRequest,
};

pub async fn sign_in(request: &SignInRequest) -> Result<Identity, AppError> {
    let response = api::post_json("auth/login", request).await?;
    if response.ok() {
        protocol::interpret_sign_in(&request.email, &response.body)
    } else {
        Err(protocol::sign_in_error(response.status, &response.body))
    }
}

pub async fn sign_up(request: &SignUpRequest) -> Result<SignUpOutcome, AppError> {
    let response = api::post_json("auth/createAccount", request).await?;
    if response.ok() {
        protocol::interpret_sign_up(&request.email, &response.body)
    } else {
        Err(protocol::sign_up_error(response.status, &response.body))
    }
}

pub async fn verify_account(verification_token: &str) -> Result<Identity, AppError> {
    let request = VerifyAccountRequest {
        verification_token: verification_token.to_string(),
    };
    let response = api::post_json("auth/verifyAccount", &request).await?;
    if response.ok() {
        protocol::interpret_verification(verification_token, &response.body)
    } else {
        Err(protocol::verify_error(response.status, &response.body))
    }
}

pub async fn request_password_reset(email: &str) -> Result<(), AppError> {
    let request = RequestPasswordResetRequest {
        email: email.to_string(),
    };
    let response = api::post_json("auth/request-password-reset", &request).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(protocol::request_reset_error(response.status, &response.body))
    }
}

pub async fn apply_password_reset(reset_token: &str, password: &str) -> Result<(), AppError> {
    let request = ApplyPasswordResetRequest {
        reset_token: reset_token.to_string(),
        password: password.to_string(),
    };
    let response = api::patch_json("auth/request-password-reset", &request).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(protocol::apply_reset_error(response.status, &response.body))
    }
}
