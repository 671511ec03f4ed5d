use rocket::{
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{prelude::*, usecases},
    web::jwt,
};

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// An authenticated user, identified by the username in
/// a valid bearer token.
#[derive(Debug)]
pub struct Account {
    username: String,
    token: String,
}

impl Account {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Loads the account and requires the given role.
    pub fn user_with_role<R: UserRepo>(&self, repo: &R, role: Role) -> Result<User> {
        Ok(usecases::authorize_user_by_username(
            repo,
            &self.username,
            role,
        )?)
    }

    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        Ok(usecases::authorize_account(repo, &self.username)?)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jwt_state = try_outcome!(request.guard::<&State<jwt::JwtState>>().await);
        let account = Self::bearer_tokens_from_header(request)
            .into_iter()
            .find_map(|token| {
                jwt_state
                    .validate_token_and_get_username(&token)
                    .map(|username| Account { username, token })
                    .map_err(|err| {
                        debug!("Rejecting bearer token: {err}");
                        err
                    })
                    .ok()
            });
        match account {
            Some(account) => Outcome::Success(account),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Version(pub &'static str);
