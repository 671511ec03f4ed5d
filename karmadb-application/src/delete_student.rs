use super::*;

pub fn delete_student(
    connections: &sqlite::Connections,
    account: &str,
    student_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::delete_student(conn, &account, student_id).map_err(|err| {
            warn!("Failed to delete student {}: {}", student_id, err);
            err
        })
    })?)
}
