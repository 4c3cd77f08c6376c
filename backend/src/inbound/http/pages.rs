//! Navigation helpers shared by page handlers.

use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header;
use url::form_urlencoded;

/// Landing page for signed-in users.
pub const HOME_PATH: &str = "/home";
/// Sign-in page anonymous visitors are sent to.
pub const SIGN_IN_PATH: &str = "/auth?method=sign-in";

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_owned()))
        .finish()
}

/// Path and query of `req`, used as a post-sign-in return target.
pub fn request_target(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), ToString::to_string)
}

/// Redirect to sign-in that returns to `next` afterwards.
pub fn sign_in_then(next: &str) -> HttpResponse {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("method", "sign-in")
        .append_pair("next", next)
        .finish();
    redirect(&format!("/auth?{query}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    fn location(res: &HttpResponse) -> &str {
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .expect("location header")
    }

    #[test]
    fn redirect_is_found() {
        let res = redirect(HOME_PATH);
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/home");
    }

    #[test]
    fn sign_in_keeps_return_path() {
        let res = sign_in_then("/home/trips/accept?memberId=m1&tripId=t1");
        assert_eq!(
            location(&res),
            "/auth?method=sign-in&next=%2Fhome%2Ftrips%2Faccept%3FmemberId%3Dm1%26tripId%3Dt1"
        );
    }
}
