use super::prelude::*;
use crate::{authorization::user::authorize_role, util::validate::Validate};

use super::create_student::NewStudent;

pub fn update_student<R: StudentRepo>(
    repo: &R,
    account: &User,
    student_id: &str,
    update: NewStudent,
) -> Result<Student> {
    authorize_role(account, Role::Admin)?;
    let old = repo
        .try_get_student(student_id)?
        .ok_or(Error::UnknownStudent)?;
    let student = update.into_student(old.id);
    student.validate()?;
    if let Some(other) = repo.try_get_student_by_school_id(&student.school_id)? {
        if other.id != student.id {
            return Err(Error::StudentExists);
        }
    }
    log::debug!("Updating student {}", student.id);
    repo.update_student(&student)?;
    Ok(student)
}
