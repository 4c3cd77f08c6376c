//! Public landing page.

use actix_web::{HttpResponse, get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::pages::{HOME_PATH, redirect};
use crate::middleware::CurrentUser;

/// Page data for anonymous visitors of `GET /`.
#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub signed_in: bool,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Anonymous landing page", body = LandingPage),
        (status = 302, description = "Signed in; redirect to /home")
    ),
    tags = ["pages"],
    operation_id = "landingPage",
    security([])
)]
#[get("/")]
pub async fn landing(user: CurrentUser) -> HttpResponse {
    if user.is_signed_in() {
        redirect(HOME_PATH)
    } else {
        HttpResponse::Ok().json(LandingPage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    use crate::inbound::http::test_utils::{MockPorts, session};
    use crate::middleware::CurrentUserHook;

    #[rstest]
    #[case(false, StatusCode::OK)]
    #[case(true, StatusCode::FOUND)]
    #[actix_rt::test]
    async fn landing_depends_on_session(#[case] signed_in: bool, #[case] expected: StatusCode) {
        let ports = if signed_in {
            MockPorts::signed_in()
        } else {
            MockPorts::default()
        };
        let app = actix_test::init_service(
            App::new()
                .app_data(ports.into_state())
                .wrap(CurrentUserHook)
                .service(landing),
        )
        .await;
        let mut req = actix_test::TestRequest::get().uri("/");
        if signed_in {
            req = req.cookie(session("tok"));
        }

        let res = actix_test::call_service(&app, req.to_request()).await;

        assert_eq!(res.status(), expected);
    }
}
