//! Typed path-parameter extractors.
//!
//! Each extractor owns the parse/validation of one route parameter and
//! rejects the request with a 400 envelope before the handler runs.

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, error::InternalError};
use chrono::NaiveDate;
use futures_util::future::{Ready, ready};
use std::str::FromStr;

use crate::models::ApiResponse;
use crate::models::students::entities::Branch;

fn bad_request(message: &str) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(message));
    InternalError::from_response(message.to_string(), response).into()
}

/// Numeric `{id}` path parameter
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .map(SafeIDI64)
            .ok_or_else(|| bad_request("Invalid id in path"));
        ready(result)
    }
}

/// `{uid}` path parameter, checked against the UID format contract
pub struct SafeUid(pub String);

impl FromRequest for SafeUid {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("uid")
            .map(|v| v.trim().to_uppercase())
            .filter(|v| crate::utils::uid::is_valid_uid(v))
            .map(SafeUid)
            .ok_or_else(|| bad_request("Invalid UID format, expected e.g. 1CSE2410"));
        ready(result)
    }
}

/// `{year}` path parameter, restricted to 1-4
pub struct SafeYear(pub i32);

impl FromRequest for SafeYear {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("year")
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|v| (1..=4).contains(v))
            .map(SafeYear)
            .ok_or_else(|| bad_request("Year must be 1, 2, 3, or 4"));
        ready(result)
    }
}

/// `{branch}` path parameter, uppercased and parsed into the branch enum
pub struct SafeBranch(pub Branch);

impl FromRequest for SafeBranch {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("branch")
            .and_then(|v| Branch::from_str(&v.to_uppercase()).ok())
            .map(SafeBranch)
            .ok_or_else(|| bad_request("Invalid branch"));
        ready(result)
    }
}

/// `{date}` path parameter, `YYYY-MM-DD` at day granularity
pub struct SafeDate(pub NaiveDate);

impl FromRequest for SafeDate {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("date")
            .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
            .map(SafeDate)
            .ok_or_else(|| bad_request("Invalid date, expected YYYY-MM-DD"));
        ready(result)
    }
}
