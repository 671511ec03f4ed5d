use std::{fmt::Display, result};

pub use karmadb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{jwt, sqlite},
};
use karmadb_application::prelude as flows;

mod error;
mod reviews;
mod students;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::get_current_user,
        users::get_users,
        users::post_user,
        users::put_user,
        users::delete_user,
        users::get_user,
        users::get_users_with_role,
        users::get_user_votes,
        users::get_user_reviews,
        // ---   students   --- //
        students::get_students,
        students::post_student,
        students::get_student,
        students::put_student,
        students::delete_student,
        students::get_student_reviews,
        students::get_student_karma,
        students::search_students,
        students::get_students_by_name,
        students::get_student_by_school_id,
        // ---   reviews   --- //
        reviews::get_reviews,
        reviews::post_review,
        reviews::get_review,
        reviews::put_review,
        reviews::delete_review,
        reviews::get_review_votes,
        reviews::get_review_karma,
        reviews::put_vote,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
