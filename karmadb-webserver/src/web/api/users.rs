use super::*;

#[post("/login", format = "json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            username: &login.username,
            password: &login.password,
        };
        usecases::login_with_username(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login with username '{}' failed: {}", login.username, err);
            err
        })?
    };
    let token = jwt_state.generate_token(&user.username)?;
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout")]
pub fn post_logout(account: Account, jwt_state: &State<jwt::JwtState>) -> Json<()> {
    jwt_state.blacklist_token(account.token().to_owned());
    Json(())
}

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = account.user(&db.shared()?)?;
    Ok(Json(user.into()))
}

#[get("/users")]
pub fn get_users(db: sqlite::Connections, account: Account) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    account.user_with_role(&db, Role::Admin)?;
    let users = usecases::all_users(&db)?.into_iter().map(Into::into).collect();
    Ok(Json(users))
}

#[post("/users", format = "json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    account: Account,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    account.user_with_role(&db.shared()?, Role::Admin)?;
    let user = flows::create_user(&db, new_user)?;
    Ok(Json(user.into()))
}

#[put("/users/<id>", format = "json", data = "<data>")]
pub fn put_user(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: JsonResult<json::UpdateUser>,
) -> Result<json::User> {
    let json::UpdateUser { username } = data?.into_inner();
    let user = flows::update_username(&db, account.username(), id, &username)?;
    Ok(Json(user.into()))
}

#[delete("/users/<id>")]
pub fn delete_user(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    flows::delete_user(&db, account.username(), id)?;
    Ok(Json(()))
}

#[get("/users/<id>", rank = 2)]
pub fn get_user(db: sqlite::Connections, account: Account, id: &str) -> Result<json::User> {
    let db = db.shared()?;
    account.user_with_role(&db, Role::Admin)?;
    let user = usecases::get_user(&db, id)?;
    Ok(Json(user.into()))
}

#[get("/users/role/<role>", rank = 1)]
pub fn get_users_with_role(
    db: sqlite::Connections,
    account: Account,
    role: &str,
) -> Result<Vec<json::User>> {
    let role = role.parse::<Role>().map_err(|_| {
        ApiError::OtherWithStatus(anyhow::anyhow!("Unknown role '{role}'"), Status::BadRequest)
    })?;
    let db = db.shared()?;
    account.user_with_role(&db, Role::Admin)?;
    let users = usecases::users_with_role(&db, role)?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[get("/users/<id>/votes", rank = 2)]
pub fn get_user_votes(
    db: sqlite::Connections,
    _account: Account,
    id: &str,
) -> Result<Vec<json::Vote>> {
    let votes = usecases::votes_by_staff(&db.shared()?, id)?;
    Ok(Json(votes.into_iter().map(Into::into).collect()))
}

#[get("/users/<id>/reviews", rank = 2)]
pub fn get_user_reviews(
    db: sqlite::Connections,
    _account: Account,
    id: &str,
) -> Result<Vec<json::Review>> {
    let reviews = usecases::load_scored_reviews_by_staff(&db.shared()?, id)?;
    Ok(Json(reviews.into_iter().map(to_json::scored_review).collect()))
}
