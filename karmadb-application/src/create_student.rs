use super::*;

pub fn create_student(
    connections: &sqlite::Connections,
    account: &str,
    new_student: usecases::NewStudent,
) -> Result<Student> {
    let school_id = new_student.school_id.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::create_student(conn, &account, new_student).map_err(|err| {
            warn!("Failed to create student {}: {}", school_id, err);
            err
        })
    })?)
}
