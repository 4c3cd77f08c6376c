//! Authentication hook resolving the current user of every request.
//!
//! When the request carries a session cookie the token is revalidated against
//! the upstream profile endpoint; a valid profile becomes the request's current
//! user. Any failure leaves the request anonymous and the request proceeds.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::domain::{Error as DomainError, UserProfile, messages};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Middleware storing the revalidated profile in request extensions.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use tripfront::middleware::CurrentUserHook;
///
/// let app = App::new().wrap(CurrentUserHook);
/// ```
#[derive(Clone)]
pub struct CurrentUserHook;

impl<S, B> Transform<S, ServiceRequest> for CurrentUserHook
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CurrentUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CurrentUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service wrapper produced by [`CurrentUserHook`].
pub struct CurrentUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CurrentUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let session = SessionContext::from_cookies(req.request());
            let user = match (session.token(), req.app_data::<web::Data<HttpState>>()) {
                (None, _) => {
                    debug!("no session cookie; request is anonymous");
                    None
                }
                (Some(token), Some(state)) => state.sessions.current_user(Some(token)).await,
                (Some(_), None) => {
                    warn!("HTTP state missing; request is anonymous");
                    None
                }
            };
            req.extensions_mut().insert(CurrentUser(user));
            service.call(req).await
        })
    }
}

/// Profile of the signed-in user, resolved by [`CurrentUserHook`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser(pub Option<UserProfile>);

impl CurrentUser {
    pub fn profile(&self) -> Option<&UserProfile> {
        self.0.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.0.is_some()
    }

    /// The profile, or `401 Unauthorized` for anonymous requests.
    pub fn require(&self) -> Result<&UserProfile, DomainError> {
        self.profile()
            .ok_or_else(|| DomainError::unauthorized(messages::NOT_SIGNED_IN))
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<Self>().cloned().unwrap_or_default();
        ready(Ok(user))
    }
}
