use std::{ops::Deref, pin::Pin, sync::Arc};

use actix_web::{
    web::{Data, Query},
    FromRequest,
};
use futures::Future;
use serde::Deserialize;

use crate::error::{HResult, HandlerError};

use super::registry::SessionRegistry;
use super::session::{Identity, SessionToken};

#[derive(Deserialize)]
struct TokenParams {
    token: String,
}

/// The raw session token as supplied by the client. Tokens travel as a plain
/// `token` query parameter; a request without one is rejected before any
/// handler runs.
pub struct SessionEx(pub SessionToken);

impl Deref for SessionEx {
    type Target = SessionToken;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for SessionEx {
    type Error = HandlerError;
    type Future = std::future::Ready<HResult<Self>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        std::future::ready(
            Query::<TokenParams>::from_query(req.query_string())
                .map(|params| SessionEx(params.into_inner().token))
                .map_err(|_| HandlerError::from(401)),
        )
    }
}

/// The auth gate. Every protected handler takes one of these; extraction
/// resolves the supplied token against the session registry and fails the
/// request with a uniform 401 when no live session exists. The resolved
/// identity says who the caller is, nothing more; the database handle is a
/// separate parameter.
pub struct IdentityEx(pub Arc<Identity>);

impl Deref for IdentityEx {
    type Target = Arc<Identity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for IdentityEx {
    type Error = HandlerError;
    type Future = Pin<Box<dyn Future<Output = HResult<Self>>>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let session = SessionEx::from_request(&req, &mut actix_web::dev::Payload::None).await?;

            let identity = req
                .app_data::<Data<SessionRegistry>>()
                .unwrap()
                .resolve(&session)?;

            Ok(IdentityEx(identity))
        })
    }
}
