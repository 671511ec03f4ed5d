use super::*;

#[get("/students")]
pub fn get_students(db: sqlite::Connections, _account: Account) -> Result<Vec<json::Student>> {
    let students = usecases::load_all_scored_students(&db.shared()?)?;
    Ok(Json(
        students.into_iter().map(to_json::scored_student).collect(),
    ))
}

#[post("/students", format = "json", data = "<new_student>")]
pub fn post_student(
    db: sqlite::Connections,
    account: Account,
    new_student: JsonResult<json::NewStudent>,
) -> Result<json::Student> {
    let new_student = from_json::new_student(new_student?.into_inner());
    let student = flows::create_student(&db, account.username(), new_student)?;
    Ok(Json((student, Karma::zero()).into()))
}

#[get("/students/<id>")]
pub fn get_student(db: sqlite::Connections, _account: Account, id: &str) -> Result<json::Student> {
    let student = usecases::load_scored_student(&db.shared()?, id)?;
    Ok(Json(to_json::scored_student(student)))
}

#[put("/students/<id>", format = "json", data = "<data>")]
pub fn put_student(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: JsonResult<json::NewStudent>,
) -> Result<json::Student> {
    let update = from_json::new_student(data?.into_inner());
    flows::update_student(&db, account.username(), id, update)?;
    let student = usecases::load_scored_student(&db.shared()?, id)?;
    Ok(Json(to_json::scored_student(student)))
}

#[delete("/students/<id>")]
pub fn delete_student(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    flows::delete_student(&db, account.username(), id)?;
    Ok(Json(()))
}

#[get("/students/<id>/reviews", rank = 2)]
pub fn get_student_reviews(
    db: sqlite::Connections,
    _account: Account,
    id: &str,
) -> Result<Vec<json::Review>> {
    let reviews = usecases::load_scored_reviews_of_student(&db.shared()?, id)?;
    Ok(Json(reviews.into_iter().map(to_json::scored_review).collect()))
}

#[get("/students/<id>/karma", rank = 2)]
pub fn get_student_karma(
    db: sqlite::Connections,
    _account: Account,
    id: &str,
) -> Result<json::Karma> {
    let karma = usecases::student_karma(&db.shared()?, id)?;
    Ok(Json(karma.into()))
}

#[get("/students/search/<query>", rank = 1)]
pub fn search_students(
    db: sqlite::Connections,
    _account: Account,
    query: &str,
) -> Result<Vec<json::Student>> {
    let db = db.shared()?;
    let students = usecases::search_students(&db, query)?;
    let students = usecases::score_students(&db, students)?;
    Ok(Json(
        students.into_iter().map(to_json::scored_student).collect(),
    ))
}

#[get("/students/name/<name>", rank = 1)]
pub fn get_students_by_name(
    db: sqlite::Connections,
    _account: Account,
    name: &str,
) -> Result<Vec<json::Student>> {
    let db = db.shared()?;
    let students = usecases::find_students_by_name(&db, name)?;
    let students = usecases::score_students(&db, students)?;
    Ok(Json(
        students.into_iter().map(to_json::scored_student).collect(),
    ))
}

#[get("/students/school_id/<school_id>", rank = 1)]
pub fn get_student_by_school_id(
    db: sqlite::Connections,
    _account: Account,
    school_id: &str,
) -> Result<json::Student> {
    let db = db.shared()?;
    let student = usecases::get_student_by_school_id(&db, school_id)?;
    let student = usecases::load_scored_student(&db, student.id.as_str())?;
    Ok(Json(to_json::scored_student(student)))
}
