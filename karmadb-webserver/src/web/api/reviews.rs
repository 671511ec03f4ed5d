use super::*;

#[get("/reviews")]
pub fn get_reviews(db: sqlite::Connections, _account: Account) -> Result<Vec<json::Review>> {
    let reviews = usecases::load_all_scored_reviews(&db.shared()?)?;
    Ok(Json(reviews.into_iter().map(to_json::scored_review).collect()))
}

#[post("/reviews", format = "json", data = "<new_review>")]
pub fn post_review(
    db: sqlite::Connections,
    account: Account,
    new_review: JsonResult<json::NewReview>,
) -> Result<json::Review> {
    let new_review = from_json::new_review(new_review?.into_inner());
    let review = flows::create_review(&db, account.username(), new_review)?;
    let review = usecases::load_scored_review(&db.shared()?, review.id.as_str())?;
    Ok(Json(to_json::scored_review(review)))
}

#[get("/reviews/<id>")]
pub fn get_review(db: sqlite::Connections, _account: Account, id: &str) -> Result<json::Review> {
    let review = usecases::load_scored_review(&db.shared()?, id)?;
    Ok(Json(to_json::scored_review(review)))
}

#[put("/reviews/<id>", format = "json", data = "<data>")]
pub fn put_review(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: JsonResult<json::ReviewUpdate>,
) -> Result<json::Review> {
    let update = from_json::review_update(data?.into_inner());
    flows::update_review(&db, account.username(), id, update)?;
    let review = usecases::load_scored_review(&db.shared()?, id)?;
    Ok(Json(to_json::scored_review(review)))
}

#[delete("/reviews/<id>")]
pub fn delete_review(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    flows::delete_review(&db, account.username(), id)?;
    Ok(Json(()))
}

#[get("/reviews/<id>/votes")]
pub fn get_review_votes(
    db: sqlite::Connections,
    _account: Account,
    id: &str,
) -> Result<Vec<json::Vote>> {
    let votes = usecases::list_votes(&db.shared()?, id)?;
    Ok(Json(votes.into_iter().map(Into::into).collect()))
}

#[get("/reviews/<id>/karma")]
pub fn get_review_karma(
    db: sqlite::Connections,
    _account: Account,
    id: &str,
) -> Result<json::Karma> {
    let karma = usecases::review_karma(&db.shared()?, id)?;
    Ok(Json(karma.into()))
}

/// Upvotes or downvotes a review on behalf of the current
/// staff member. Repeating a vote withdraws it.
#[put("/reviews/<id>/<action>")]
pub fn put_vote(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    action: &str,
) -> Result<json::VoteResolution> {
    let staff = account.user(&db.shared()?)?;
    let resolution = flows::resolve_vote(&db, id, staff.id.as_str(), action)?;
    Ok(Json(to_json::vote_resolution(resolution)))
}
